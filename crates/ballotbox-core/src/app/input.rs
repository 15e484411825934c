impl<ST, IN, PN, TN> TerminalApp<ST, IN, PN, TN>
where
    ST: TallyStore,
    IN: InputProvider,
    PN: IndicatorPanel,
    TN: ToneOutput,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_key(now_ms) {
                Ok(Some(key)) => self.apply_key(key, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error, dropping poll");
                    break;
                }
            }
        }
    }

    fn apply_key(&mut self, key: Key, now_ms: u64) {
        match self.ui {
            UiState::MainMenu => self.apply_main_menu_key(key),
            UiState::CodeEntry { target } => self.apply_code_entry_key(target, key, now_ms),
            UiState::AdminMenu => self.apply_admin_menu_key(key),
            UiState::EnableCandidates => self.apply_enable_key(key, now_ms),
            UiState::Results => self.apply_results_key(key),
            UiState::ResultsGraph => self.apply_graph_key(key),
            UiState::SetVoterCap { pending } => self.apply_voter_cap_key(pending, key, now_ms),
            UiState::VotingBooth { locked } => self.apply_booth_key(locked, key, now_ms),
            // Notices run to completion; presses during one are dropped.
            UiState::Notice { .. } => {}
        }
    }

    fn apply_main_menu_key(&mut self, key: Key) {
        match key {
            Key::Digit(1) => self.enter_code_entry(GateTarget::Admin),
            Key::Digit(2) => self.enter_code_entry(GateTarget::Booth),
            Key::Star => self.pending_redraw = true,
            _ => {}
        }
    }

    fn apply_code_entry_key(&mut self, target: GateTarget, key: Key, now_ms: u64) {
        match key {
            Key::Digit(d) => {
                if self.gate.submit_digit(d) {
                    self.pending_redraw = true;
                }
            }
            Key::Star => {
                self.gate.clear();
                self.pending_redraw = true;
            }
            Key::Hash => self.confirm_code(target, now_ms),
        }
    }

    fn apply_admin_menu_key(&mut self, key: Key) {
        match key {
            Key::Digit(1) => {
                debug!("ui: admin -> enable candidates");
                self.panel.set_enabled_mask(self.election.enabled_mask());
                self.ui = UiState::EnableCandidates;
                self.pending_redraw = true;
            }
            Key::Digit(2) => {
                debug!("ui: admin -> results");
                self.ui = UiState::Results;
                self.pending_redraw = true;
            }
            Key::Digit(3) => {
                debug!("ui: admin -> set voter cap");
                self.ui = UiState::SetVoterCap { pending: 0 };
                self.pending_redraw = true;
            }
            // Reset sits behind a second code challenge.
            Key::Digit(4) => self.enter_code_entry(GateTarget::Reset),
            Key::Star => {
                debug!("ui: admin -> main menu");
                self.ui = UiState::MainMenu;
                self.pending_redraw = true;
            }
            _ => {}
        }
    }

    fn apply_enable_key(&mut self, key: Key, now_ms: u64) {
        if let Some(slot) = key.candidate_slot() {
            self.toggle_candidate(slot, now_ms);
            return;
        }
        if key == Key::Star {
            self.ui = UiState::AdminMenu;
            self.pending_redraw = true;
        }
    }

    fn apply_results_key(&mut self, key: Key) {
        match key {
            Key::Hash => {
                self.ui = UiState::ResultsGraph;
                self.pending_redraw = true;
            }
            Key::Star => {
                self.ui = UiState::AdminMenu;
                self.pending_redraw = true;
            }
            _ => {}
        }
    }

    fn apply_graph_key(&mut self, key: Key) {
        // The graph only ever returns to the results screen.
        if matches!(key, Key::Star | Key::Hash) {
            self.ui = UiState::Results;
            self.pending_redraw = true;
        }
    }

    fn apply_voter_cap_key(&mut self, pending: u16, key: Key, now_ms: u64) {
        match key {
            Key::Digit(d) => {
                let next = (pending as u32) * 10 + d as u32;
                self.ui = UiState::SetVoterCap {
                    // Display clamp; the final clamp happens on confirm.
                    pending: next.min(u16::MAX as u32) as u16,
                };
                self.pending_redraw = true;
            }
            Key::Star => {
                self.ui = UiState::SetVoterCap { pending: 0 };
                self.pending_redraw = true;
            }
            Key::Hash => self.save_voter_cap(pending, now_ms),
        }
    }

    fn apply_booth_key(&mut self, locked: bool, key: Key, now_ms: u64) {
        if locked {
            // Poll worker re-arms the booth for the next voter.
            if key == Key::Star {
                debug!("ui: booth re-armed");
                self.ui = UiState::VotingBooth { locked: false };
                self.pending_redraw = true;
            }
            return;
        }

        if let Some(slot) = key.candidate_slot() {
            self.cast_vote(slot, now_ms);
        }
    }
}
