//! Menu state machine for the voting terminal.

use log::{debug, warn};

use crate::{
    auth::{AccessGate, DEFAULT_ACCESS_CODE},
    election::{ElectionState, VoteError},
    input::{InputProvider, Key},
    panel::{IndicatorPanel, ToneEvent, ToneOutput},
    render::{CodePurpose, Notice, Screen},
    results,
    storage::TallyStore,
};

/// How long transient notices stay on screen.
const NOTICE_MS: u64 = 1_200;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TerminalConfig {
    pub access_code: &'static str,
    pub notice_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            access_code: DEFAULT_ACCESS_CODE,
            notice_ms: NOTICE_MS,
        }
    }
}

/// What a granted code entry unlocks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GateTarget {
    Admin,
    Booth,
    Reset,
}

/// Where a notice goes when its interval elapses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AfterNotice {
    CodeEntry(GateTarget),
    AdminMenu,
    EnableCandidates,
    Booth { locked: bool },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    MainMenu,
    CodeEntry {
        target: GateTarget,
    },
    AdminMenu,
    EnableCandidates,
    Results,
    ResultsGraph,
    SetVoterCap {
        pending: u16,
    },
    VotingBooth {
        locked: bool,
    },
    Notice {
        notice: Notice,
        until_ms: u64,
        then: AfterNotice,
    },
}

pub struct TerminalApp<ST, IN, PN, TN>
where
    ST: TallyStore,
    IN: InputProvider,
    PN: IndicatorPanel,
    TN: ToneOutput,
{
    store: ST,
    input: IN,
    panel: PN,
    tone: TN,
    config: TerminalConfig,
    election: ElectionState,
    gate: AccessGate,
    ui: UiState,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("session.rs");
