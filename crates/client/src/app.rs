//! Glue between keyboard commands, the match session, and screen state.

use crossterm::event::KeyEvent;
use runtime::MatchSession;
use strike_core::{ActionError, Phase, PlayerIdx, catalog};

use crate::input::{self, FormKey, KeyAction};
use crate::state::{AppMode, AppState, SetupForm, StatusLine};
use crate::view_model::UiFrame;

pub struct App {
    session: MatchSession,
    state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(session: MatchSession) -> Self {
        let mut app = Self {
            session,
            state: AppState::new(),
            should_quit: false,
        };
        app.state.mode = app.mode_for_phase();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn ui_frame(&self) -> UiFrame {
        UiFrame::build(self.session.state(), &self.state)
    }

    pub fn mode(&self) -> &AppMode {
        &self.state.mode
    }

    /// Adopt whatever the store holds and land on the right screen.
    pub fn restore(&mut self) {
        if self.session.restore() {
            self.state.status = Some(StatusLine::notice("previous match restored"));
        }
        self.state.mode = self.mode_for_phase();
    }

    /// Deferred restore check; reports repairs and re-routes the screen in
    /// case the audit moved the phase.
    pub fn validate_restored_state(&mut self) {
        let repairs = self.session.validate_restored_state();
        if !repairs.is_empty() {
            self.state.status = Some(StatusLine::notice(format!(
                "restored state needed {} repair(s)",
                repairs.len()
            )));
            self.state.mode = self.mode_for_phase();
        }
    }

    /// Process one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match input::map_key(&self.state.mode, key) {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::MoveCursor(dx, dy) => self.state.move_cursor(dx, dy),
            KeyAction::Activate => self.activate_cursor(),
            KeyAction::Undo => self.undo_latest_strike(),
            KeyAction::ToggleGentlemans => self.toggle_gentlemans(),
            KeyAction::ClearBans => self.apply(|session| session.clear_bans()),
            KeyAction::OpenSetup => self.open_setup(),
            KeyAction::NewMatch => self.new_match(),
            KeyAction::Rematch => self.rematch(),
            KeyAction::BeginScoreAdjust(delta) => {
                self.state.mode = AppMode::ScoreAdjust { delta };
            }
            KeyAction::PickSeat(seat) => self.pick_seat(seat),
            KeyAction::Dismiss => self.dismiss(),
            KeyAction::Form(form_key) => self.handle_form_key(form_key),
            KeyAction::None => {}
        }
    }

    // ===== Command handlers =====

    fn activate_cursor(&mut self) {
        let stage = catalog::all_stages()[self.state.cursor].id;
        match self.session.state().phase() {
            Phase::Banning => self.apply(|session| session.ban_stage(stage)),
            Phase::Selecting => {
                self.apply(|session| session.select_stage(stage));
                if self.session.state().phase() == Phase::WinnerSelect {
                    self.state.mode = AppMode::WinnerDialog;
                }
            }
            // Dialog was dismissed earlier; bring it back.
            Phase::WinnerSelect => self.state.mode = AppMode::WinnerDialog,
            Phase::Setup | Phase::SetComplete => {}
        }
    }

    fn undo_latest_strike(&mut self) {
        let Some(stage) = self
            .session
            .state()
            .stage_bans()
            .latest()
            .map(|record| record.stage.clone())
        else {
            self.state.status = Some(StatusLine::error("nothing to undo"));
            return;
        };
        self.apply(|session| session.unban_stage(stage));
    }

    fn toggle_gentlemans(&mut self) {
        if self.session.state().gentlemans_agreement() {
            self.apply(|session| session.disable_gentlemans_agreement());
        } else {
            self.apply(|session| session.enable_gentlemans_agreement());
        }
    }

    fn open_setup(&mut self) {
        // Going back to setup drops current-game strikes but keeps the set.
        self.apply(|session| session.reset_to_setup());
        self.state.mode = AppMode::Setup(SetupForm::from_state(self.session.state()));
    }

    fn new_match(&mut self) {
        self.apply(|session| session.reset_match());
        self.state.mode = AppMode::Setup(SetupForm::from_state(self.session.state()));
    }

    fn rematch(&mut self) {
        let mut form = SetupForm::from_state(self.session.state());
        form.first_banner = PlayerIdx::P1;
        form.gentlemans_agreement = false;
        match form.validate() {
            Ok(config) => {
                self.apply(|session| session.setup_match(config));
                self.state.cursor = 0;
                self.state.mode = self.mode_for_phase();
            }
            // Unnameable players mean there is nothing to rematch yet.
            Err(reason) => self.state.status = Some(StatusLine::error(reason)),
        }
    }

    fn pick_seat(&mut self, seat: PlayerIdx) {
        match self.state.mode {
            AppMode::WinnerDialog => {
                self.apply(|session| session.declare_winner(seat));
                self.state.cursor = 0;
                self.state.mode = self.mode_for_phase();
            }
            AppMode::ScoreAdjust { delta } => {
                let state = self.session.state();
                let cap = i64::from(state.win_threshold()) - 1;
                let current = i64::from(state.player(seat).score);
                let target = (current + i64::from(delta)).clamp(0, cap) as u32;
                self.apply(|session| session.update_player_score(seat, target));
                self.state.mode = AppMode::Striking;
            }
            _ => {}
        }
    }

    fn dismiss(&mut self) {
        match &mut self.state.mode {
            AppMode::WinnerDialog | AppMode::ScoreAdjust { .. } => {
                self.state.mode = AppMode::Striking;
            }
            AppMode::Setup(form) => form.error = None,
            _ => self.state.status = None,
        }
    }

    fn handle_form_key(&mut self, form_key: FormKey) {
        let AppMode::Setup(form) = &mut self.state.mode else {
            return;
        };

        match form_key {
            FormKey::Char(ch) => {
                if let Some(name) = form.focused_name_mut() {
                    name.push(ch);
                }
            }
            FormKey::Backspace => {
                if let Some(name) = form.focused_name_mut() {
                    name.pop();
                }
            }
            FormKey::NextField => form.focus = form.focus.next(),
            FormKey::PrevField => form.focus = form.focus.prev(),
            FormKey::Toggle => form.toggle_focused(),
            FormKey::Submit => self.submit_setup_form(),
        }
    }

    fn submit_setup_form(&mut self) {
        let AppMode::Setup(form) = &mut self.state.mode else {
            return;
        };
        match form.validate() {
            Ok(config) => {
                self.apply(|session| session.setup_match(config));
                self.state.cursor = 0;
                self.state.mode = self.mode_for_phase();
            }
            Err(reason) => form.error = Some(reason),
        }
    }

    // ===== Helpers =====

    /// Run a session operation; rejections become the status line.
    fn apply<F>(&mut self, operation: F)
    where
        F: FnOnce(&mut MatchSession) -> Result<(), ActionError>,
    {
        match operation(&mut self.session) {
            Ok(()) => self.state.status = None,
            Err(err) => self.state.status = Some(StatusLine::error(err.to_string())),
        }
    }

    fn mode_for_phase(&self) -> AppMode {
        match self.session.state().phase() {
            Phase::Setup => AppMode::Setup(SetupForm::from_state(self.session.state())),
            Phase::Banning | Phase::Selecting => AppMode::Striking,
            Phase::WinnerSelect => AppMode::WinnerDialog,
            Phase::SetComplete => AppMode::SetComplete,
        }
    }
}
