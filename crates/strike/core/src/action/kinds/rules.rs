use crate::action::error::ActionError;
use crate::action::transition::MatchTransition;
use crate::order;
use crate::state::{MatchState, Phase, PlayerIdx};

/// Turns on the gentleman's agreement: both players consent to skip
/// striking, so any in-progress strikes are wiped and the match goes
/// straight to stage selection. Stays in effect for subsequent games until
/// explicitly disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnableGentlemansAction;

impl MatchTransition for EnableGentlemansAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        if !state.phase().allows_ban_edits() {
            return Err(ActionError::PhaseMismatch {
                operation: "enable_gentlemans_agreement",
                expected: "banning or selecting",
                actual: state.phase(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        state.gentlemans_agreement = true;
        state.clear_current_bans();
        state.current_phase = Phase::Selecting;
        Ok(())
    }
}

/// Turns the gentleman's agreement back off and resumes striking.
///
/// The ban order is recomputed from scratch: the game-1 order when no game
/// has been decided yet, otherwise the three-strike order of the most recent
/// winner. Strikes made before the agreement was enabled are gone (enabling
/// wiped them), so the striking phase restarts cleanly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisableGentlemansAction;

impl MatchTransition for DisableGentlemansAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        if !state.phase().allows_ban_edits() {
            return Err(ActionError::PhaseMismatch {
                operation: "disable_gentlemans_agreement",
                expected: "banning or selecting",
                actual: state.phase(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        state.gentlemans_agreement = false;
        let order = match state.game_history.last() {
            Some(last) => order::games2_plus_order(last.winner),
            // No decided game to take a winner from: fall back to the full
            // game-1 shape, whatever the nominal game number says.
            None => order::game1_order(PlayerIdx::P1),
        };
        state.enter_banning(order);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::kinds::ban::BanStageAction;
    use crate::action::kinds::setup::{MatchConfig, SetupMatchAction};
    use crate::state::{GameResult, MatchFormat};

    fn banning_state() -> MatchState {
        let mut state = MatchState::new();
        SetupMatchAction::new(MatchConfig {
            player1_name: "Alice".into(),
            player2_name: "Bob".into(),
            match_format: MatchFormat::Bo3,
            first_banner: PlayerIdx::P1,
            gentlemans_agreement: false,
        })
        .apply(&mut state)
        .unwrap();
        state
    }

    fn run(
        action: &impl MatchTransition<Error = ActionError>,
        state: &mut MatchState,
    ) -> Result<(), ActionError> {
        action.pre_validate(state)?;
        action.apply(state)
    }

    #[test]
    fn enabling_mid_banning_wipes_strikes_and_forces_selecting() {
        let mut state = banning_state();
        run(&BanStageAction::new("battlefield"), &mut state).unwrap();
        run(&BanStageAction::new("smashville"), &mut state).unwrap();

        run(&EnableGentlemansAction, &mut state).unwrap();
        assert!(state.gentlemans_agreement());
        assert!(state.stage_bans().is_empty());
        assert_eq!(state.current_ban_index(), 0);
        assert_eq!(state.phase(), Phase::Selecting);
    }

    #[test]
    fn disabling_in_game_one_restores_the_full_striking_order() {
        let mut state = banning_state();
        run(&EnableGentlemansAction, &mut state).unwrap();
        run(&DisableGentlemansAction, &mut state).unwrap();

        assert!(!state.gentlemans_agreement());
        assert_eq!(state.phase(), Phase::Banning);
        assert_eq!(state.ban_order(), order::game1_order(PlayerIdx::P1).as_slice());
        assert_eq!(state.current_ban_index(), 0);
    }

    #[test]
    fn disabling_after_a_decided_game_uses_the_last_winner() {
        let mut state = banning_state();
        state.game_history.push(GameResult {
            game_number: 1,
            winner: PlayerIdx::P2,
            selected_stage: "battlefield".into(),
            stage_bans: Vec::new(),
        });
        state.current_game = 2;
        run(&EnableGentlemansAction, &mut state).unwrap();

        run(&DisableGentlemansAction, &mut state).unwrap();
        assert_eq!(state.ban_order(), order::games2_plus_order(PlayerIdx::P2).as_slice());
    }

    #[test]
    fn toggling_is_rejected_outside_striking_phases() {
        let mut state = MatchState::new();
        let err = run(&EnableGentlemansAction, &mut state).unwrap_err();
        assert!(matches!(err, ActionError::PhaseMismatch { .. }));
        assert!(!state.gentlemans_agreement());
    }
}
