use crate::action::error::ActionError;
use crate::action::transition::MatchTransition;
use crate::state::{BanOrder, MatchState, Phase};

/// Abandons the current set and returns to setup for a rematch.
///
/// Player names survive; scores, history, and every game-progress field
/// reset. The chosen format is kept as the setup form's starting point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetMatchAction;

impl MatchTransition for ResetMatchAction {
    type Error = ActionError;

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        for player in &mut state.players {
            player.score = 0;
        }
        state.current_game = 1;
        state.game_history.clear();
        state.gentlemans_agreement = false;
        state.clear_current_bans();
        state.ban_order = BanOrder::new();
        state.selected_stage = None;
        state.current_phase = Phase::Setup;
        Ok(())
    }
}

/// Backs out of an in-progress ban/select sequence into setup without
/// touching names, scores, or history; set progress survives and the
/// interrupted game can be reconfigured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetToSetupAction;

impl MatchTransition for ResetToSetupAction {
    type Error = ActionError;

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        state.clear_current_bans();
        state.ban_order = BanOrder::new();
        state.selected_stage = None;
        state.current_phase = Phase::Setup;
        Ok(())
    }
}
