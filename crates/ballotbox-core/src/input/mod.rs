//! Input abstraction layer.

pub mod debounce;
pub mod mock;

pub use debounce::{Debouncer, KeypadScan};

/// One symbol on the 12-key pad.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Digit(u8),
    Star,
    Hash,
}

impl Key {
    /// Digit value when the key is `0`..`9`.
    pub const fn digit(self) -> Option<u8> {
        match self {
            Key::Digit(d) => Some(d),
            _ => None,
        }
    }

    /// Candidate slot index for keys `1`..`6`.
    pub const fn candidate_slot(self) -> Option<usize> {
        match self {
            Key::Digit(d) if d >= 1 && d <= 6 => Some((d - 1) as usize),
            _ => None,
        }
    }
}

/// Polled source of debounced key symbols.
///
/// At most one symbol is pending at a time; implementations do not queue.
pub trait InputProvider {
    type Error;

    fn poll_key(&mut self, now_ms: u64) -> Result<Option<Key>, Self::Error>;
}
