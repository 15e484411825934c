//! Semantic screens published by the terminal app.
//!
//! The front end decides pixels; the core only says which screen is active
//! and with what parameters.

use crate::auth::AuthOutcome;
use crate::election::CANDIDATE_SLOTS;
use crate::results::ResultsSummary;

/// What a code prompt is protecting; shown so the operator knows which
/// action they are unlocking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CodePurpose {
    AdminMenu,
    VotingBooth,
    ResetElection,
}

/// Transient message screens, shown for a fixed interval then replaced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Notice {
    AccessDenied(AuthOutcome),
    VoteAccepted { slot: usize },
    CandidateDisabled { slot: usize },
    BoothFull,
    /// Write-then-read verification mismatch; the voter may retry.
    StorageFault,
    CapSaved { cap: u16 },
    ResetDone,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    MainMenu,
    CodeEntry {
        purpose: CodePurpose,
        /// Digits entered so far, for a masked echo.
        entered: usize,
    },
    AdminMenu,
    EnableCandidates {
        enabled_mask: u8,
    },
    Results {
        summary: ResultsSummary,
    },
    ResultsGraph {
        counts: [u16; CANDIDATE_SLOTS],
        max_count: u16,
    },
    SetVoterCap {
        pending: u16,
        current: u16,
    },
    VotingBooth {
        locked: bool,
        enabled_mask: u8,
    },
    Notice(Notice),
}
