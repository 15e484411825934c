//! Election state: the in-memory mirror of the persisted tally, and the
//! operations that mutate it.
//!
//! All mutation goes through this type; the store is never written from
//! anywhere else. Every operation persists before it updates the mirror, so
//! a storage error leaves the mirror describing what is actually on disk.

use log::{debug, info, warn};

use crate::storage::{MAX_VOTERS_ADDR, TallyStore, enabled_flag_addr, vote_count_addr};

pub const CANDIDATE_SLOTS: usize = 6;

/// Slot 5 conventionally represents "none of the above".
pub const NONE_OF_THE_ABOVE_SLOT: usize = 5;

pub const DEFAULT_MAX_VOTERS: u16 = 100;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CandidateRecord {
    pub enabled: bool,
    pub votes: u16,
}

/// Why a cast was refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteError<E> {
    /// Business-rule rejection: the slot is not enabled.
    Disabled,
    /// Business-rule rejection: the voter cap has been reached.
    CapacityReached,
    /// The post-write read-back did not return the value just written.
    /// The mirror is left untouched; the caller may retry.
    VerifyFailed { expected: u16, read_back: u16 },
    Storage(E),
}

impl<E> From<E> for VoteError<E> {
    fn from(err: E) -> Self {
        VoteError::Storage(err)
    }
}

pub struct ElectionState {
    candidates: [CandidateRecord; CANDIDATE_SLOTS],
    max_voters: u16,
}

impl ElectionState {
    /// Power-on load: mirrors whatever the store holds. A blank store is the
    /// operator's problem to provision via reset; nothing is invented here.
    pub fn load<ST: TallyStore>(store: &mut ST) -> Result<Self, ST::Error> {
        let mut candidates = [CandidateRecord::default(); CANDIDATE_SLOTS];
        for (slot, record) in candidates.iter_mut().enumerate() {
            record.enabled = store.read_flag(enabled_flag_addr(slot))?;
            record.votes = store.read16(vote_count_addr(slot))?;
        }
        let max_voters = store.read16(MAX_VOTERS_ADDR)?;

        info!(
            "election: loaded max_voters={} total_cast={}",
            max_voters,
            candidates.iter().map(|c| c.votes as u32).sum::<u32>()
        );

        Ok(Self {
            candidates,
            max_voters,
        })
    }

    pub fn candidate(&self, slot: usize) -> CandidateRecord {
        self.candidates[slot]
    }

    pub fn vote_count(&self, slot: usize) -> u16 {
        self.candidates[slot].votes
    }

    pub fn is_enabled(&self, slot: usize) -> bool {
        self.candidates[slot].enabled
    }

    pub fn max_voters(&self) -> u16 {
        self.max_voters
    }

    /// Recomputed on every call; never cached across operations.
    pub fn total_votes_cast(&self) -> u32 {
        self.candidates.iter().map(|c| c.votes as u32).sum()
    }

    /// Bit `i` set when slot `i` is enabled. Feeds the indicator panel.
    pub fn enabled_mask(&self) -> u8 {
        self.candidates
            .iter()
            .enumerate()
            .fold(0, |mask, (slot, c)| mask | ((c.enabled as u8) << slot))
    }

    /// Casts one vote for `slot`, verifying the persisted count by reading
    /// it back. Returns the new count on success.
    pub fn cast_vote<ST: TallyStore>(
        &mut self,
        store: &mut ST,
        slot: usize,
    ) -> Result<u16, VoteError<ST::Error>> {
        if !self.candidates[slot].enabled {
            debug!("election: cast refused slot={} disabled", slot);
            return Err(VoteError::Disabled);
        }
        if self.total_votes_cast() >= self.max_voters as u32 {
            debug!(
                "election: cast refused slot={} cap reached ({}/{})",
                slot,
                self.total_votes_cast(),
                self.max_voters
            );
            return Err(VoteError::CapacityReached);
        }

        // Fresh read rather than trusting the mirror, so a verify failure on
        // a previous cast cannot compound.
        let addr = vote_count_addr(slot);
        let current = store.read16(addr)?;
        let next = current.saturating_add(1);

        store.write16(addr, next)?;
        let read_back = store.read16(addr)?;
        if read_back != next {
            warn!(
                "election: verify failed slot={} expected={} read_back={}",
                slot, next, read_back
            );
            return Err(VoteError::VerifyFailed {
                expected: next,
                read_back,
            });
        }

        self.candidates[slot].votes = next;
        info!("election: vote recorded slot={} count={}", slot, next);
        Ok(next)
    }

    /// Flips a slot's enabled flag and persists it. Returns the new value.
    pub fn toggle_enabled<ST: TallyStore>(
        &mut self,
        store: &mut ST,
        slot: usize,
    ) -> Result<bool, ST::Error> {
        let next = !self.candidates[slot].enabled;
        store.write_flag(enabled_flag_addr(slot), next)?;
        self.candidates[slot].enabled = next;
        info!("election: slot={} enabled={}", slot, next);
        Ok(next)
    }

    /// Persists a new voter cap, clamped to 1..=65535. Out-of-range values
    /// (only 0 is representable) are forced to 65535, not rejected.
    pub fn set_max_voters<ST: TallyStore>(
        &mut self,
        store: &mut ST,
        requested: u16,
    ) -> Result<u16, ST::Error> {
        let clamped = if requested == 0 { u16::MAX } else { requested };
        store.write16(MAX_VOTERS_ADDR, clamped)?;
        self.max_voters = clamped;
        info!("election: max_voters={}", clamped);
        Ok(clamped)
    }

    /// Reinitializes the election: all slots enabled, all counts zero, cap
    /// back to the default. Atomic from the caller's view only; a power loss
    /// mid-reset leaves a partial state the operator resolves by resetting
    /// again.
    pub fn reset<ST: TallyStore>(&mut self, store: &mut ST) -> Result<(), ST::Error> {
        for slot in 0..CANDIDATE_SLOTS {
            store.write_flag(enabled_flag_addr(slot), true)?;
            store.write16(vote_count_addr(slot), 0)?;
        }
        store.write16(MAX_VOTERS_ADDR, DEFAULT_MAX_VOTERS)?;

        for record in &mut self.candidates {
            *record = CandidateRecord {
                enabled: true,
                votes: 0,
            };
        }
        self.max_voters = DEFAULT_MAX_VOTERS;
        info!("election: reset to defaults");
        Ok(())
    }
}
