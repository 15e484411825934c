//! Tally summaries for the results screens.

use heapless::Vec;

use crate::election::{CANDIDATE_SLOTS, ElectionState};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResultsSummary {
    pub counts: [u16; CANDIDATE_SLOTS],
    pub total_cast: u32,
    pub voter_cap: u16,
    /// Every slot achieving the maximum count; more than one entry is a tie.
    pub winners: Vec<u8, CANDIDATE_SLOTS>,
    /// Turnout as `total_cast * 100 / voter_cap`, `None` when the cap is 0
    /// (insufficient data, not a division error).
    pub turnout_pct: Option<u32>,
}

impl ResultsSummary {
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }

    pub fn is_winner(&self, slot: usize) -> bool {
        self.winners.iter().any(|&w| w as usize == slot)
    }
}

pub fn summarize(election: &ElectionState) -> ResultsSummary {
    let mut counts = [0u16; CANDIDATE_SLOTS];
    for (slot, count) in counts.iter_mut().enumerate() {
        *count = election.vote_count(slot);
    }

    let total_cast: u32 = counts.iter().map(|&c| c as u32).sum();
    let voter_cap = election.max_voters();

    let top = counts.iter().copied().max().unwrap_or(0);
    let mut winners = Vec::new();
    for (slot, &count) in counts.iter().enumerate() {
        if count == top {
            // Cannot overflow: at most CANDIDATE_SLOTS entries.
            let _ = winners.push(slot as u8);
        }
    }

    let turnout_pct = if voter_cap == 0 {
        None
    } else {
        Some(total_cast * 100 / voter_cap as u32)
    };

    ResultsSummary {
        counts,
        total_cast,
        voter_cap,
        winners,
        turnout_pct,
    }
}
