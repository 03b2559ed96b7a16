//! Presentation-ready snapshot of the match for the widgets.
//!
//! Rebuilt from the session state after every input; widgets read it and
//! never touch `MatchState` directly.

use strike_core::{MatchState, Phase, PlayerIdx, catalog};

use crate::state::{AppState, StatusLine};

/// One player's scoreboard entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerCard {
    pub name: String,
    pub score: u32,
    /// Seat is currently striking.
    pub is_acting: bool,
    /// Seat picks the stage in the selection phase.
    pub is_selector: bool,
}

/// One cell of the 3x3 stage grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageCell {
    pub id: &'static str,
    pub name: &'static str,
    /// Name of the player who struck this stage, if anyone.
    pub banned_by: Option<String>,
    pub is_selected: bool,
    pub under_cursor: bool,
}

/// One decided game in the set summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub game_number: u32,
    pub stage: String,
    pub winner: String,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct UiFrame {
    pub players: [PlayerCard; 2],
    pub format_label: &'static str,
    pub game_number: u32,
    pub phase: Phase,
    pub gentlemans: bool,
    /// Row-major catalog order, always nine cells.
    pub stages: Vec<StageCell>,
    /// Strikes of the current game, oldest first, as "name struck stage".
    pub strike_log: Vec<String>,
    /// One-line instruction for the current phase.
    pub prompt: String,
    pub status: Option<StatusLine>,
    pub selected_stage: Option<String>,
    pub set_winner: Option<String>,
    pub history: Vec<HistoryRow>,
    pub total_bans: usize,
    pub win_threshold: u32,
}

impl UiFrame {
    /// Build a frame from the live state and the UI context.
    pub fn build(state: &MatchState, app: &AppState) -> Self {
        let acting = state.acting_player();
        let selector = state.stage_selector();
        let players = [PlayerIdx::P1, PlayerIdx::P2].map(|seat| PlayerCard {
            name: state.player(seat).name.clone(),
            score: state.player(seat).score,
            is_acting: state.phase() == Phase::Banning && acting == Some(seat),
            is_selector: state.phase() == Phase::Selecting && selector == seat,
        });

        let stages = catalog::all_stages()
            .iter()
            .enumerate()
            .map(|(index, stage)| StageCell {
                id: stage.id,
                name: stage.name,
                banned_by: state
                    .stage_bans()
                    .struck_by(stage.id)
                    .map(|seat| state.player(seat).name.clone()),
                is_selected: state.selected_stage() == Some(stage.id),
                under_cursor: index == app.cursor,
            })
            .collect();

        let strike_log = state
            .stage_bans()
            .records()
            .iter()
            .map(|record| {
                format!(
                    "{} struck {}",
                    state.player(record.by).name,
                    catalog::stage_name(&record.stage)
                )
            })
            .collect();

        let history = state
            .game_history()
            .iter()
            .map(|game| HistoryRow {
                game_number: game.game_number,
                stage: catalog::stage_name(&game.selected_stage).to_string(),
                winner: state.player(game.winner).name.clone(),
            })
            .collect();

        Self {
            prompt: prompt_for(state),
            players,
            format_label: state.match_format().label(),
            game_number: state.current_game(),
            phase: state.phase(),
            gentlemans: state.gentlemans_agreement(),
            stages,
            strike_log,
            status: app.status.clone(),
            selected_stage: state
                .selected_stage()
                .map(|id| catalog::stage_name(id).to_string()),
            set_winner: state
                .set_winner()
                .map(|seat| state.player(seat).name.clone()),
            history,
            total_bans: state.total_bans_in_set(),
            win_threshold: state.win_threshold(),
        }
    }
}

fn prompt_for(state: &MatchState) -> String {
    match state.phase() {
        Phase::Setup => "set up the match".to_string(),
        Phase::Banning => {
            let summary = state.ban_phase();
            let strike_number = summary.total_bans - summary.remaining_bans + 1;
            match summary.current_player {
                Some(seat) => format!(
                    "{} to strike ({} of {})",
                    state.player(seat).name,
                    strike_number,
                    summary.total_bans
                ),
                None => "striking".to_string(),
            }
        }
        Phase::Selecting => {
            if state.gentlemans_agreement() {
                "gentleman's agreement: pick any stage".to_string()
            } else {
                format!(
                    "{} picks the stage to play",
                    state.player(state.stage_selector()).name
                )
            }
        }
        Phase::WinnerSelect => match state.selected_stage() {
            Some(id) => format!(
                "playing {}: who wins game {}?",
                catalog::stage_name(id),
                state.current_game()
            ),
            None => format!("who wins game {}?", state.current_game()),
        },
        Phase::SetComplete => match state.set_winner() {
            Some(seat) => format!("{} wins the set", state.player(seat).name),
            None => "set complete".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strike_core::{MatchAction, MatchConfig, MatchEngine, MatchFormat};

    fn started_state() -> MatchState {
        let mut state = MatchState::new();
        MatchEngine::new(&mut state)
            .execute(&MatchAction::setup(MatchConfig {
                player1_name: "Alice".into(),
                player2_name: "Bob".into(),
                match_format: MatchFormat::Bo3,
                first_banner: PlayerIdx::P1,
                gentlemans_agreement: false,
            }))
            .expect("setup");
        state
    }

    #[test]
    fn banning_frame_flags_the_acting_player() {
        let state = started_state();
        let frame = UiFrame::build(&state, &AppState::new());

        assert!(frame.players[0].is_acting);
        assert!(!frame.players[1].is_acting);
        assert_eq!(frame.prompt, "Alice to strike (1 of 7)");
        assert_eq!(frame.stages.len(), 9);
        assert!(frame.stages.iter().all(|cell| cell.banned_by.is_none()));
    }

    #[test]
    fn struck_stages_carry_the_striker_name() {
        let mut state = started_state();
        MatchEngine::new(&mut state)
            .execute(&MatchAction::ban("battlefield"))
            .expect("legal strike");

        let frame = UiFrame::build(&state, &AppState::new());
        let battlefield = frame
            .stages
            .iter()
            .find(|cell| cell.id == "battlefield")
            .expect("battlefield cell");
        assert_eq!(battlefield.banned_by.as_deref(), Some("Alice"));
        assert_eq!(frame.strike_log, vec!["Alice struck Battlefield"]);
        assert_eq!(frame.prompt, "Alice to strike (2 of 7)");
    }

    #[test]
    fn selection_prompt_names_the_previous_loser() {
        let mut state = started_state();
        {
            let mut engine = MatchEngine::new(&mut state);
            for stage in [
                "battlefield",
                "final-destination",
                "small-battlefield",
                "pokemon-stadium-2",
                "smashville",
                "town-and-city",
                "kalos-pokemon-league",
            ] {
                engine.execute(&MatchAction::ban(stage)).expect("strike");
            }
            engine
                .execute(&MatchAction::select("hollow-bastion"))
                .expect("pick");
            engine
                .execute(&MatchAction::declare_winner(PlayerIdx::P1))
                .expect("winner");
        }

        // Game 2: the winner strikes, the loser picks.
        let frame = UiFrame::build(&state, &AppState::new());
        assert_eq!(frame.game_number, 2);
        assert_eq!(frame.prompt, "Alice to strike (1 of 3)");
        assert_eq!(frame.history.len(), 1);
        assert_eq!(frame.history[0].winner, "Alice");
        assert_eq!(frame.history[0].stage, "Hollow Bastion");
        assert_eq!(frame.total_bans, 7);
    }
}
