//! Terminal rendering of the core's semantic screens, plus log-line
//! stand-ins for the indicator panel and the tone generator.

use ballotbox_core::{
    auth::{ACCESS_CODE_LEN, AuthOutcome},
    election::{CANDIDATE_SLOTS, NONE_OF_THE_ABOVE_SLOT},
    panel::{IndicatorPanel, ToneEvent, ToneOutput},
    render::{CodePurpose, Notice, Screen},
};
use log::info;

pub struct LogPanel;

impl IndicatorPanel for LogPanel {
    fn set_enabled_mask(&mut self, mask: u8) {
        let mut lamps = String::new();
        for slot in 0..CANDIDATE_SLOTS {
            lamps.push(if mask & (1 << slot) != 0 { 'o' } else { '.' });
        }
        info!("panel: [{lamps}]");
    }
}

pub struct LogTone;

impl ToneOutput for LogTone {
    fn play(&mut self, event: ToneEvent) {
        info!("tone: {event:?}");
    }
}

fn slot_label(slot: usize) -> String {
    if slot == NONE_OF_THE_ABOVE_SLOT {
        "None of the above".to_string()
    } else {
        format!("Candidate {}", slot + 1)
    }
}

pub fn print_screen(screen: &Screen) {
    println!();
    match screen {
        Screen::MainMenu => {
            println!("== MAIN MENU ==");
            println!("  1  admin");
            println!("  2  voting booth");
        }
        Screen::CodeEntry { purpose, entered } => {
            let what = match purpose {
                CodePurpose::AdminMenu => "admin menu",
                CodePurpose::VotingBooth => "voting booth",
                CodePurpose::ResetElection => "election reset",
            };
            println!("== ENTER CODE ({what}) ==");
            println!(
                "  [{:*<width$}]   # confirm, * clear",
                "",
                width = (*entered).min(ACCESS_CODE_LEN * 2)
            );
        }
        Screen::AdminMenu => {
            println!("== ADMIN ==");
            println!("  1  enable candidates");
            println!("  2  results");
            println!("  3  voter cap");
            println!("  4  reset election");
            println!("  *  back");
        }
        Screen::EnableCandidates { enabled_mask } => {
            println!("== ENABLE CANDIDATES (1-6 toggles, * back) ==");
            for slot in 0..CANDIDATE_SLOTS {
                let state = if enabled_mask & (1 << slot) != 0 {
                    "ENABLED"
                } else {
                    "disabled"
                };
                println!("  {}  {:18} {state}", slot + 1, slot_label(slot));
            }
        }
        Screen::Results { summary } => {
            println!("== RESULTS (# graph, * back) ==");
            for (slot, &count) in summary.counts.iter().enumerate() {
                let mark = if summary.is_winner(slot) { "*" } else { " " };
                println!("  {mark} {:18} {count:5}", slot_label(slot));
            }
            println!("  total {} / cap {}", summary.total_cast, summary.voter_cap);
            match summary.turnout_pct {
                Some(pct) => println!("  turnout {pct}%{}", if summary.is_tie() { "  (tie)" } else { "" }),
                None => println!("  turnout n/a (cap not set)"),
            }
        }
        Screen::ResultsGraph { counts, max_count } => {
            println!("== GRAPH (* back) ==");
            let scale = (*max_count).max(1) as u32;
            for (slot, &count) in counts.iter().enumerate() {
                let bar = (count as u32 * 40 / scale) as usize;
                println!("  {} |{}", slot + 1, "#".repeat(bar));
            }
        }
        Screen::SetVoterCap { pending, current } => {
            println!("== VOTER CAP (digits, # save, * clear) ==");
            println!("  current {current}");
            println!("  new     {pending}");
        }
        Screen::VotingBooth {
            locked,
            enabled_mask,
        } => {
            if *locked {
                println!("== BOOTH LOCKED: waiting for poll worker (*) ==");
            } else {
                println!("== CAST YOUR VOTE ==");
                for slot in 0..CANDIDATE_SLOTS {
                    if enabled_mask & (1 << slot) != 0 {
                        println!("  {}  {}", slot + 1, slot_label(slot));
                    }
                }
            }
        }
        Screen::Notice(notice) => print_notice(notice),
    }
}

fn print_notice(notice: &Notice) {
    match notice {
        Notice::AccessDenied(AuthOutcome::BadLength) => {
            println!(">> code must be {ACCESS_CODE_LEN} digits");
        }
        Notice::AccessDenied(_) => println!(">> access denied"),
        Notice::VoteAccepted { slot } => {
            println!(">> vote recorded for {}", slot_label(*slot));
        }
        Notice::CandidateDisabled { slot } => {
            println!(">> {} is not on this ballot", slot_label(*slot));
        }
        Notice::BoothFull => println!(">> voter cap reached, no more votes"),
        Notice::StorageFault => println!(">> STORAGE FAULT: vote not recorded, try again"),
        Notice::CapSaved { cap } => println!(">> voter cap set to {cap}"),
        Notice::ResetDone => println!(">> election reset to defaults"),
    }
}
