impl<ST, IN, PN, TN> TerminalApp<ST, IN, PN, TN>
where
    ST: TallyStore,
    IN: InputProvider,
    PN: IndicatorPanel,
    TN: ToneOutput,
{
    /// Loads election state from the store and starts at the main menu.
    pub fn new(
        mut store: ST,
        input: IN,
        mut panel: PN,
        mut tone: TN,
        config: TerminalConfig,
    ) -> Result<Self, ST::Error> {
        let election = ElectionState::load(&mut store)?;
        panel.set_enabled_mask(election.enabled_mask());
        tone.play(ToneEvent::Init);

        Ok(Self {
            store,
            input,
            panel,
            tone,
            gate: AccessGate::new(config.access_code),
            config,
            election,
            ui: UiState::MainMenu,
            pending_redraw: true,
        })
    }

    /// One cooperative step: drain pending input, expire notices, report
    /// whether the front end should redraw.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);
        self.tick_notice(now_ms);

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// The semantic screen the front end should be showing.
    pub fn screen(&self) -> Screen {
        match self.ui {
            UiState::MainMenu => Screen::MainMenu,
            UiState::CodeEntry { target } => Screen::CodeEntry {
                purpose: match target {
                    GateTarget::Admin => CodePurpose::AdminMenu,
                    GateTarget::Booth => CodePurpose::VotingBooth,
                    GateTarget::Reset => CodePurpose::ResetElection,
                },
                entered: self.gate.entered_len(),
            },
            UiState::AdminMenu => Screen::AdminMenu,
            UiState::EnableCandidates => Screen::EnableCandidates {
                enabled_mask: self.election.enabled_mask(),
            },
            UiState::Results => Screen::Results {
                summary: results::summarize(&self.election),
            },
            UiState::ResultsGraph => {
                let summary = results::summarize(&self.election);
                Screen::ResultsGraph {
                    max_count: summary.counts.iter().copied().max().unwrap_or(0),
                    counts: summary.counts,
                }
            }
            UiState::SetVoterCap { pending } => Screen::SetVoterCap {
                pending,
                current: self.election.max_voters(),
            },
            UiState::VotingBooth { locked } => Screen::VotingBooth {
                locked,
                enabled_mask: self.election.enabled_mask(),
            },
            UiState::Notice { notice, .. } => Screen::Notice(notice),
        }
    }

    pub fn election(&self) -> &ElectionState {
        &self.election
    }

    fn tick_notice(&mut self, now_ms: u64) {
        let UiState::Notice {
            until_ms, then, ..
        } = self.ui
        else {
            return;
        };

        if now_ms < until_ms {
            return;
        }

        match then {
            AfterNotice::CodeEntry(target) => self.ui = UiState::CodeEntry { target },
            AfterNotice::AdminMenu => self.ui = UiState::AdminMenu,
            AfterNotice::EnableCandidates => self.ui = UiState::EnableCandidates,
            AfterNotice::Booth { locked } => self.ui = UiState::VotingBooth { locked },
        }
        self.pending_redraw = true;
    }

    fn enter_notice(&mut self, notice: Notice, now_ms: u64, then: AfterNotice) {
        debug!("ui: notice {:?} then {:?}", notice, then);
        self.ui = UiState::Notice {
            notice,
            until_ms: now_ms + self.config.notice_ms,
            then,
        };
        self.pending_redraw = true;
    }
}
