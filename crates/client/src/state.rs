//! Application state for screen routing and UI context.

use strike_core::{MatchConfig, MatchFormat, MatchState, PlayerIdx};

/// Top-level screen determining input handling and layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Fullscreen match setup form.
    Setup(SetupForm),
    /// Stage grid with the striking and selection flow.
    Striking,
    /// Winner prompt over the striking screen.
    WinnerDialog,
    /// Transient prompt: which player's score does `delta` apply to?
    ScoreAdjust { delta: i32 },
    /// Fullscreen set summary.
    SetComplete,
}

impl AppMode {
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, AppMode::Setup(_) | AppMode::SetComplete)
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, AppMode::WinnerDialog | AppMode::ScoreAdjust { .. })
    }
}

/// Field focus order of the setup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupField {
    Player1Name,
    Player2Name,
    Format,
    FirstBanner,
    Gentlemans,
    Start,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::Player1Name => SetupField::Player2Name,
            SetupField::Player2Name => SetupField::Format,
            SetupField::Format => SetupField::FirstBanner,
            SetupField::FirstBanner => SetupField::Gentlemans,
            SetupField::Gentlemans => SetupField::Start,
            SetupField::Start => SetupField::Player1Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::Player1Name => SetupField::Start,
            SetupField::Player2Name => SetupField::Player1Name,
            SetupField::Format => SetupField::Player2Name,
            SetupField::FirstBanner => SetupField::Format,
            SetupField::Gentlemans => SetupField::FirstBanner,
            SetupField::Start => SetupField::Gentlemans,
        }
    }

    pub fn is_name(self) -> bool {
        matches!(self, SetupField::Player1Name | SetupField::Player2Name)
    }
}

/// Editable state of the match setup form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupForm {
    pub player1_name: String,
    pub player2_name: String,
    pub format: MatchFormat,
    pub first_banner: PlayerIdx,
    pub gentlemans_agreement: bool,
    pub focus: SetupField,
    /// Why the last Start press was rejected, if it was.
    pub error: Option<String>,
}

impl SetupForm {
    /// Form pre-filled from the current match, so rematches and edits
    /// start from what is already there.
    pub fn from_state(state: &MatchState) -> Self {
        Self {
            player1_name: state.player(PlayerIdx::P1).name.clone(),
            player2_name: state.player(PlayerIdx::P2).name.clone(),
            format: state.match_format(),
            first_banner: PlayerIdx::P1,
            gentlemans_agreement: state.gentlemans_agreement(),
            focus: SetupField::Player1Name,
            error: None,
        }
    }

    /// The name field currently focused, if focus is on one.
    pub fn focused_name_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            SetupField::Player1Name => Some(&mut self.player1_name),
            SetupField::Player2Name => Some(&mut self.player2_name),
            _ => None,
        }
    }

    /// Flip the focused toggle field. Direction does not matter; every
    /// toggle here is binary.
    pub fn toggle_focused(&mut self) {
        match self.focus {
            SetupField::Format => {
                self.format = match self.format {
                    MatchFormat::Bo3 => MatchFormat::Bo5,
                    MatchFormat::Bo5 => MatchFormat::Bo3,
                };
            }
            SetupField::FirstBanner => self.first_banner = self.first_banner.opponent(),
            SetupField::Gentlemans => self.gentlemans_agreement = !self.gentlemans_agreement,
            _ => {}
        }
    }

    /// Check the form and produce the config to start a match with.
    pub fn validate(&self) -> Result<MatchConfig, String> {
        let player1 = self.player1_name.trim();
        let player2 = self.player2_name.trim();

        if player1.is_empty() || player2.is_empty() {
            return Err("both players need a name".to_string());
        }
        if player1 == player2 {
            return Err("player names must differ".to_string());
        }

        Ok(MatchConfig {
            player1_name: player1.to_string(),
            player2_name: player2.to_string(),
            match_format: self.format,
            first_banner: self.first_banner,
            gentlemans_agreement: self.gentlemans_agreement,
        })
    }
}

/// One-line feedback shown under the main panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }
}

/// Mutable UI state next to the session.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    /// Stage grid cursor, row-major into the catalog.
    pub cursor: usize,
    pub status: Option<StatusLine>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Striking,
            cursor: 0,
            status: None,
        }
    }

    /// Move the grid cursor by whole cells, clamped to the 3x3 grid.
    pub fn move_cursor(&mut self, dx: i8, dy: i8) {
        let col = (self.cursor % 3) as i8;
        let row = (self.cursor / 3) as i8;
        let col = (col + dx).clamp(0, 2);
        let row = (row + dy).clamp(0, 2);
        self.cursor = (row * 3 + col) as usize;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_at_grid_edges() {
        let mut state = AppState::new();
        state.move_cursor(-1, -1);
        assert_eq!(state.cursor, 0);

        state.move_cursor(1, 1);
        assert_eq!(state.cursor, 4);

        state.move_cursor(5, 5);
        assert_eq!(state.cursor, 8);
    }

    #[test]
    fn form_validation_requires_distinct_names() {
        let mut form = SetupForm::from_state(&MatchState::new());
        form.player1_name = "Alice".into();
        form.player2_name = "Alice".into();
        assert!(form.validate().is_err());

        form.player2_name = "  ".into();
        assert!(form.validate().is_err());

        form.player2_name = "Bob".into();
        let config = form.validate().expect("valid form");
        assert_eq!(config.player1_name, "Alice");
        assert_eq!(config.player2_name, "Bob");
    }

    #[test]
    fn form_focus_cycles_through_every_field() {
        let mut field = SetupField::Player1Name;
        for _ in 0..6 {
            field = field.next();
        }
        assert_eq!(field, SetupField::Player1Name);
        assert_eq!(SetupField::Player1Name.prev(), SetupField::Start);
    }
}
