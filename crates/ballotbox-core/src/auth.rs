//! Numeric access gate for the admin and voting flows.

use heapless::Vec;
use log::debug;

/// Effective secret length.
pub const ACCESS_CODE_LEN: usize = 4;

/// Buffer headroom beyond the secret length so extra presses are absorbed
/// instead of overflowing.
const CODE_BUFFER_CAP: usize = 8;

pub const DEFAULT_ACCESS_CODE: &str = "1101";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuthOutcome {
    Granted,
    /// Buffer length differed from the secret length.
    BadLength,
    /// Right length, wrong digits.
    WrongCode,
}

/// Collects digits and compares them against a fixed numeric code.
///
/// The full digit range 0..=9 is accepted. (A predecessor of this terminal
/// silently dropped 8 and 9 at the prompt; that was a defect, and the test
/// suite pins the corrected behavior.)
pub struct AccessGate {
    code: &'static str,
    buffer: Vec<u8, CODE_BUFFER_CAP>,
}

impl AccessGate {
    pub const fn new(code: &'static str) -> Self {
        Self {
            code,
            buffer: Vec::new(),
        }
    }

    /// Appends a digit. Returns false when the digit was refused (not a
    /// decimal digit, or the buffer is full).
    pub fn submit_digit(&mut self, digit: u8) -> bool {
        if digit > 9 {
            return false;
        }
        self.buffer.push(b'0' + digit).is_ok()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn entered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Compares the buffer against the code. Any rejection clears the
    /// buffer so the prompt is immediately re-enterable.
    pub fn confirm(&mut self) -> AuthOutcome {
        let outcome = if self.buffer.len() != self.code.len() {
            AuthOutcome::BadLength
        } else if self.buffer.as_slice() == self.code.as_bytes() {
            AuthOutcome::Granted
        } else {
            AuthOutcome::WrongCode
        };

        debug!("auth: confirm len={} outcome={:?}", self.buffer.len(), outcome);
        self.buffer.clear();
        outcome
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_CODE)
    }
}
