//! Output capability traits for the non-display peripherals.

/// Six-LED candidate panel mirroring the enabled flags.
pub trait IndicatorPanel {
    /// Bit `i` lights slot `i`.
    fn set_enabled_mask(&mut self, mask: u8);
}

/// Named tone events; frequency and duration are the front end's business.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToneEvent {
    Init,
    AccessGranted,
    AccessDenied,
    VoteConfirmed,
    ResetDone,
}

pub trait ToneOutput {
    fn play(&mut self, event: ToneEvent);
}

/// No-hardware panel used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullPanel;

impl IndicatorPanel for NullPanel {
    fn set_enabled_mask(&mut self, _mask: u8) {}
}

/// No-hardware tone sink used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct SilentTone;

impl ToneOutput for SilentTone {
    fn play(&mut self, _event: ToneEvent) {}
}
