//! Debounce-and-edge-detect filter over a raw keypad scanner.

use super::{InputProvider, Key};

/// A key must read back unchanged for this long before it is reported.
pub const QUIESCENCE_MS: u64 = 50;

/// Raw (bouncy) keypad scan: whichever key is currently down, if any.
pub trait KeypadScan {
    fn scan(&mut self) -> Option<Key>;
}

/// Emits each physical press exactly once.
///
/// A symbol is reported only after it differs from the last emitted symbol
/// and has stayed stable for [`QUIESCENCE_MS`]. Releasing the key clears the
/// last-emitted memory so the same key can fire again on the next press.
/// This is a filter, not a queue: presses between polls are lost.
pub struct Debouncer<S: KeypadScan> {
    scan: S,
    candidate: Option<(Key, u64)>,
    last_emitted: Option<Key>,
}

impl<S: KeypadScan> Debouncer<S> {
    pub const fn new(scan: S) -> Self {
        Self {
            scan,
            candidate: None,
            last_emitted: None,
        }
    }
}

impl<S: KeypadScan> InputProvider for Debouncer<S> {
    type Error = core::convert::Infallible;

    fn poll_key(&mut self, now_ms: u64) -> Result<Option<Key>, Self::Error> {
        let Some(raw) = self.scan.scan() else {
            // Key released: re-arm for a repeat of the same symbol.
            self.candidate = None;
            self.last_emitted = None;
            return Ok(None);
        };

        if self.last_emitted == Some(raw) {
            // Held past its first report.
            return Ok(None);
        }

        match self.candidate {
            Some((key, since_ms)) if key == raw => {
                if now_ms.saturating_sub(since_ms) >= QUIESCENCE_MS {
                    self.candidate = None;
                    self.last_emitted = Some(raw);
                    return Ok(Some(raw));
                }
            }
            _ => self.candidate = Some((raw, now_ms)),
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedScan<'a> {
        samples: &'a [Option<Key>],
        cursor: usize,
    }

    impl KeypadScan for ScriptedScan<'_> {
        fn scan(&mut self) -> Option<Key> {
            let sample = self.samples.get(self.cursor).copied().flatten();
            self.cursor += 1;
            sample
        }
    }

    fn debouncer(samples: &[Option<Key>]) -> Debouncer<ScriptedScan<'_>> {
        Debouncer::new(ScriptedScan { samples, cursor: 0 })
    }

    #[test]
    fn stable_press_emits_once_then_stays_silent_while_held() {
        let five = Some(Key::Digit(5));
        let samples = [five, five, five, five, five];
        let mut input = debouncer(&samples);

        assert_eq!(input.poll_key(0), Ok(None));
        assert_eq!(input.poll_key(10), Ok(None));
        assert_eq!(input.poll_key(60), Ok(Some(Key::Digit(5))));
        assert_eq!(input.poll_key(120), Ok(None));
        assert_eq!(input.poll_key(500), Ok(None));
    }

    #[test]
    fn bounce_within_quiescence_window_is_not_reported() {
        let mut input = debouncer(&[
            Some(Key::Digit(3)),
            None,
            Some(Key::Digit(3)),
            Some(Key::Digit(3)),
        ]);

        assert_eq!(input.poll_key(0), Ok(None));
        assert_eq!(input.poll_key(5), Ok(None));
        // The release reset the candidate; stability is measured anew.
        assert_eq!(input.poll_key(10), Ok(None));
        assert_eq!(input.poll_key(30), Ok(None));
    }

    #[test]
    fn release_rearms_the_same_symbol() {
        let star = Some(Key::Star);
        let samples = [star, star, None, star, star];
        let mut input = debouncer(&samples);

        assert_eq!(input.poll_key(0), Ok(None));
        assert_eq!(input.poll_key(60), Ok(Some(Key::Star)));
        assert_eq!(input.poll_key(100), Ok(None));
        assert_eq!(input.poll_key(110), Ok(None));
        assert_eq!(input.poll_key(200), Ok(Some(Key::Star)));
    }

    #[test]
    fn changing_key_mid_window_restarts_stability_timing() {
        let mut input = debouncer(&[
            Some(Key::Digit(1)),
            Some(Key::Digit(2)),
            Some(Key::Digit(2)),
        ]);

        assert_eq!(input.poll_key(0), Ok(None));
        assert_eq!(input.poll_key(40), Ok(None));
        // Only 20 ms of stability for the new symbol so far.
        assert_eq!(input.poll_key(60), Ok(None));
    }
}
