use crate::action::error::ActionError;
use crate::action::transition::MatchTransition;
use crate::order;
use crate::state::{GameResult, MatchState, Phase, PlayerIdx};

/// Declares who won the game just played and rolls the set forward.
///
/// Appends a frozen [`GameResult`] to history, then either ends the set
/// (score reached the format threshold) or starts the next game's striking
/// phase with the winner banning first. Under the gentleman's agreement the
/// next game skips striking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclareWinnerAction {
    pub winner: PlayerIdx,
}

impl DeclareWinnerAction {
    pub fn new(winner: PlayerIdx) -> Self {
        Self { winner }
    }
}

impl MatchTransition for DeclareWinnerAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        if state.phase() != Phase::WinnerSelect {
            return Err(ActionError::PhaseMismatch {
                operation: "declare_winner",
                expected: "winner-select",
                actual: state.phase(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        state.players[self.winner.index()].score += 1;

        state.game_history.push(GameResult {
            game_number: state.current_game,
            winner: self.winner,
            selected_stage: state.selected_stage.clone().unwrap_or_default(),
            stage_bans: state.stage_bans.to_pairs(),
        });

        let threshold = state.match_format.win_threshold();
        if state.players[self.winner.index()].score >= threshold {
            state.current_phase = Phase::SetComplete;
            return Ok(());
        }

        state.current_game += 1;
        if state.gentlemans_agreement {
            state.enter_selecting_unbanned();
        } else {
            state.enter_banning(order::games2_plus_order(self.winner));
        }
        Ok(())
    }
}
