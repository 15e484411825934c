impl<ST, IN, PN, TN> TerminalApp<ST, IN, PN, TN>
where
    ST: TallyStore,
    IN: InputProvider,
    PN: IndicatorPanel,
    TN: ToneOutput,
{
    fn enter_code_entry(&mut self, target: GateTarget) {
        debug!("ui: code entry for {:?}", target);
        self.gate.clear();
        self.ui = UiState::CodeEntry { target };
        self.pending_redraw = true;
    }

    fn confirm_code(&mut self, target: GateTarget, now_ms: u64) {
        use crate::auth::AuthOutcome;

        match self.gate.confirm() {
            AuthOutcome::Granted => {
                self.tone.play(ToneEvent::AccessGranted);
                match target {
                    GateTarget::Admin => {
                        debug!("ui: access granted -> admin menu");
                        self.ui = UiState::AdminMenu;
                        self.pending_redraw = true;
                    }
                    GateTarget::Booth => {
                        debug!("ui: access granted -> voting booth");
                        self.ui = UiState::VotingBooth { locked: false };
                        self.pending_redraw = true;
                    }
                    GateTarget::Reset => self.reset_election(now_ms),
                }
            }
            rejected => {
                self.tone.play(ToneEvent::AccessDenied);
                self.enter_notice(
                    Notice::AccessDenied(rejected),
                    now_ms,
                    AfterNotice::CodeEntry(target),
                );
            }
        }
    }

    fn cast_vote(&mut self, slot: usize, now_ms: u64) {
        match self.election.cast_vote(&mut self.store, slot) {
            Ok(_) => {
                self.tone.play(ToneEvent::VoteConfirmed);
                self.enter_notice(
                    Notice::VoteAccepted { slot },
                    now_ms,
                    AfterNotice::Booth { locked: true },
                );
            }
            Err(VoteError::Disabled) => self.enter_notice(
                Notice::CandidateDisabled { slot },
                now_ms,
                AfterNotice::Booth { locked: false },
            ),
            Err(VoteError::CapacityReached) => self.enter_notice(
                Notice::BoothFull,
                now_ms,
                AfterNotice::Booth { locked: false },
            ),
            // Verify mismatch and hard storage errors both leave the booth
            // unlocked so the voter can retry.
            Err(VoteError::VerifyFailed { .. }) | Err(VoteError::Storage(_)) => self.enter_notice(
                Notice::StorageFault,
                now_ms,
                AfterNotice::Booth { locked: false },
            ),
        }
    }

    fn toggle_candidate(&mut self, slot: usize, now_ms: u64) {
        match self.election.toggle_enabled(&mut self.store, slot) {
            Ok(_) => {
                self.panel.set_enabled_mask(self.election.enabled_mask());
                self.pending_redraw = true;
            }
            Err(_) => self.enter_notice(
                Notice::StorageFault,
                now_ms,
                AfterNotice::EnableCandidates,
            ),
        }
    }

    fn save_voter_cap(&mut self, pending: u16, now_ms: u64) {
        match self.election.set_max_voters(&mut self.store, pending) {
            Ok(cap) => {
                self.enter_notice(Notice::CapSaved { cap }, now_ms, AfterNotice::AdminMenu)
            }
            Err(_) => self.enter_notice(Notice::StorageFault, now_ms, AfterNotice::AdminMenu),
        }
    }

    fn reset_election(&mut self, now_ms: u64) {
        match self.election.reset(&mut self.store) {
            Ok(()) => {
                self.tone.play(ToneEvent::ResetDone);
                self.panel.set_enabled_mask(self.election.enabled_mask());
                self.enter_notice(Notice::ResetDone, now_ms, AfterNotice::AdminMenu);
            }
            Err(_) => self.enter_notice(Notice::StorageFault, now_ms, AfterNotice::AdminMenu),
        }
    }
}
