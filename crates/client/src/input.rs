//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application stays agnostic about concrete key bindings or the specifics
//! of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strike_core::PlayerIdx;

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the stage grid cursor by (dx, dy).
    MoveCursor(i8, i8),
    /// Act on the stage under the cursor (strike or pick, by phase).
    Activate,
    /// Undo the latest strike.
    Undo,
    /// Toggle the gentleman's agreement.
    ToggleGentlemans,
    /// Clear all strikes of the current game.
    ClearBans,
    /// Open the setup form, keeping scores and history.
    OpenSetup,
    /// Reset the set and open the setup form.
    NewMatch,
    /// Start a fresh set with the same players and format.
    Rematch,
    /// Begin a score adjustment by the given amount.
    BeginScoreAdjust(i32),
    /// Seat choice: winner in the dialog, target of a score adjustment.
    PickSeat(PlayerIdx),
    /// Close the current overlay or clear feedback.
    Dismiss,
    /// Keystroke routed to the setup form.
    Form(FormKey),
    /// No meaningful command was produced.
    None,
}

/// Keystrokes the setup form consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormKey {
    Char(char),
    Backspace,
    NextField,
    PrevField,
    Toggle,
    Submit,
}

/// Converts a raw key event into a command for the current screen.
pub fn map_key(mode: &AppMode, key: KeyEvent) -> KeyAction {
    // Ctrl+C quits everywhere, including text entry.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match mode {
        AppMode::Setup(_) => map_setup_key(key),
        AppMode::Striking => map_striking_key(key),
        AppMode::WinnerDialog => map_seat_prompt_key(key),
        AppMode::ScoreAdjust { .. } => map_seat_prompt_key(key),
        AppMode::SetComplete => map_set_complete_key(key),
    }
}

fn map_setup_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Dismiss,
        KeyCode::Enter => KeyAction::Form(FormKey::Submit),
        KeyCode::Backspace => KeyAction::Form(FormKey::Backspace),
        KeyCode::Tab | KeyCode::Down => KeyAction::Form(FormKey::NextField),
        KeyCode::BackTab | KeyCode::Up => KeyAction::Form(FormKey::PrevField),
        KeyCode::Left | KeyCode::Right => KeyAction::Form(FormKey::Toggle),
        // Raw char: names are case-sensitive text.
        KeyCode::Char(ch) => KeyAction::Form(FormKey::Char(ch)),
        _ => KeyAction::None,
    }
}

fn map_striking_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Left => KeyAction::MoveCursor(-1, 0),
        KeyCode::Right => KeyAction::MoveCursor(1, 0),
        KeyCode::Up => KeyAction::MoveCursor(0, -1),
        KeyCode::Down => KeyAction::MoveCursor(0, 1),
        KeyCode::Enter => KeyAction::Activate,
        KeyCode::Esc => KeyAction::Dismiss,
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'h' => KeyAction::MoveCursor(-1, 0),
            'l' => KeyAction::MoveCursor(1, 0),
            'k' => KeyAction::MoveCursor(0, -1),
            'j' => KeyAction::MoveCursor(0, 1),
            'u' => KeyAction::Undo,
            'g' => KeyAction::ToggleGentlemans,
            'c' => KeyAction::ClearBans,
            's' => KeyAction::OpenSetup,
            'n' => KeyAction::NewMatch,
            'r' => KeyAction::Rematch,
            '+' | '=' => KeyAction::BeginScoreAdjust(1),
            '-' => KeyAction::BeginScoreAdjust(-1),
            _ => KeyAction::None,
        },
        _ => KeyAction::None,
    }
}

fn map_seat_prompt_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Dismiss,
        KeyCode::Char(ch) => match ch {
            '1' => KeyAction::PickSeat(PlayerIdx::P1),
            '2' => KeyAction::PickSeat(PlayerIdx::P2),
            'q' | 'Q' => KeyAction::Quit,
            _ => KeyAction::None,
        },
        _ => KeyAction::None,
    }
}

fn map_set_complete_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'n' => KeyAction::NewMatch,
            'r' => KeyAction::Rematch,
            's' => KeyAction::OpenSetup,
            _ => KeyAction::None,
        },
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    use crate::state::SetupForm;
    use strike_core::MatchState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn striking_keys_map_to_grid_commands() {
        let mode = AppMode::Striking;
        assert_eq!(map_key(&mode, key(KeyCode::Char('h'))), KeyAction::MoveCursor(-1, 0));
        assert_eq!(map_key(&mode, key(KeyCode::Down)), KeyAction::MoveCursor(0, 1));
        assert_eq!(map_key(&mode, key(KeyCode::Enter)), KeyAction::Activate);
        assert_eq!(map_key(&mode, key(KeyCode::Char('u'))), KeyAction::Undo);
        assert_eq!(map_key(&mode, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            map_key(&mode, key(KeyCode::Char('+'))),
            KeyAction::BeginScoreAdjust(1)
        );
    }

    #[test]
    fn setup_mode_keeps_letters_for_typing() {
        let mode = AppMode::Setup(SetupForm::from_state(&MatchState::new()));
        assert_eq!(
            map_key(&mode, key(KeyCode::Char('q'))),
            KeyAction::Form(FormKey::Char('q'))
        );
        assert_eq!(
            map_key(&mode, key(KeyCode::Char('Q'))),
            KeyAction::Form(FormKey::Char('Q'))
        );
        assert_eq!(map_key(&mode, key(KeyCode::Tab)), KeyAction::Form(FormKey::NextField));
        assert_eq!(map_key(&mode, ctrl(KeyCode::Char('c'))), KeyAction::Quit);
    }

    #[test]
    fn seat_prompts_accept_only_seats_and_escape() {
        let mode = AppMode::WinnerDialog;
        assert_eq!(
            map_key(&mode, key(KeyCode::Char('1'))),
            KeyAction::PickSeat(PlayerIdx::P1)
        );
        assert_eq!(
            map_key(&mode, key(KeyCode::Char('2'))),
            KeyAction::PickSeat(PlayerIdx::P2)
        );
        assert_eq!(map_key(&mode, key(KeyCode::Esc)), KeyAction::Dismiss);
        assert_eq!(map_key(&mode, key(KeyCode::Char('x'))), KeyAction::None);
    }
}
