//! Action execution pipeline.
//!
//! The [`MatchEngine`] is the authoritative reducer for
//! [`MatchState`](crate::state::MatchState): every mutation flows through
//! [`MatchEngine::execute`], which drives the owning action's transition
//! (`pre_validate` → `apply` → `post_validate`). A rejected action returns
//! the rejection and leaves state untouched.

use crate::action::{ActionError, MatchAction, MatchTransition};
use crate::state::MatchState;

/// Executes match actions against a caller-owned state.
pub struct MatchEngine<'a> {
    state: &'a mut MatchState,
}

impl<'a> MatchEngine<'a> {
    /// Creates an engine borrowing the given state.
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    /// Routes the action to its transition and runs the pipeline.
    pub fn execute(&mut self, action: &MatchAction) -> Result<(), ActionError> {
        match action {
            MatchAction::SetupMatch(t) => drive(t, self.state),
            MatchAction::BanStage(t) => drive(t, self.state),
            MatchAction::UnbanStage(t) => drive(t, self.state),
            MatchAction::SelectStage(t) => drive(t, self.state),
            MatchAction::DeclareWinner(t) => drive(t, self.state),
            MatchAction::EnableGentlemans(t) => drive(t, self.state),
            MatchAction::DisableGentlemans(t) => drive(t, self.state),
            MatchAction::ResetMatch(t) => drive(t, self.state),
            MatchAction::ResetToSetup(t) => drive(t, self.state),
            MatchAction::UpdatePlayerName(t) => drive(t, self.state),
            MatchAction::UpdatePlayerScore(t) => drive(t, self.state),
            MatchAction::ClearBans(t) => drive(t, self.state),
        }
    }
}

/// Runs one transition through the three-phase pipeline.
fn drive<T>(transition: &T, state: &mut MatchState) -> Result<(), T::Error>
where
    T: MatchTransition,
{
    transition.pre_validate(state)?;
    transition.apply(state)?;
    transition.post_validate(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MatchConfig;
    use crate::catalog;
    use crate::order;
    use crate::state::{MatchFormat, Phase, PlayerIdx};

    fn exec(state: &mut MatchState, action: MatchAction) -> Result<(), ActionError> {
        MatchEngine::new(state).execute(&action)
    }

    fn alice_bob_config() -> MatchConfig {
        MatchConfig {
            player1_name: "Alice".into(),
            player2_name: "Bob".into(),
            match_format: MatchFormat::Bo3,
            first_banner: PlayerIdx::P1,
            gentlemans_agreement: false,
        }
    }

    #[test]
    fn full_game_one_flow_rolls_into_game_two() {
        let mut state = MatchState::new();
        exec(&mut state, MatchAction::setup(alice_bob_config())).unwrap();

        // Strike 7 stages following the game-1 order.
        let stages = catalog::all_stages();
        for (turn, stage) in stages.iter().take(7).enumerate() {
            let expected_seat = state.ban_order()[turn];
            exec(&mut state, MatchAction::ban(stage.id)).unwrap();
            assert_eq!(state.stage_bans().struck_by(stage.id), Some(expected_seat));
        }
        assert_eq!(state.phase(), Phase::Selecting);

        // Two candidates remain; pick the first of them.
        let remaining = catalog::available_stages(state.stage_bans());
        assert_eq!(remaining.len(), 2);
        let pick = remaining[0].id;
        exec(&mut state, MatchAction::select(pick)).unwrap();
        assert_eq!(state.phase(), Phase::WinnerSelect);

        exec(&mut state, MatchAction::declare_winner(PlayerIdx::P1)).unwrap();
        assert_eq!(state.player(PlayerIdx::P1).score, 1);
        assert_eq!(state.player(PlayerIdx::P2).score, 0);
        assert_eq!(state.phase(), Phase::Banning);
        assert_eq!(state.current_game(), 2);
        assert_eq!(
            state.ban_order(),
            order::games2_plus_order(PlayerIdx::P1).as_slice()
        );
    }

    #[test]
    fn rejected_actions_leave_state_untouched() {
        let mut state = MatchState::new();
        exec(&mut state, MatchAction::setup(alice_bob_config())).unwrap();
        exec(&mut state, MatchAction::ban("battlefield")).unwrap();
        let before = state.clone();

        let err = exec(&mut state, MatchAction::ban("battlefield")).unwrap_err();
        assert_eq!(err.code(), "stage_already_banned");
        assert!(err.is_recoverable());
        assert_eq!(state, before);

        let err = exec(&mut state, MatchAction::select("smashville")).unwrap_err();
        assert_eq!(err.code(), "phase_mismatch");
        assert_eq!(state, before);
    }

    #[test]
    fn gentlemans_cycle_round_trips_through_selecting() {
        let mut state = MatchState::new();
        exec(&mut state, MatchAction::setup(alice_bob_config())).unwrap();
        exec(&mut state, MatchAction::ban("battlefield")).unwrap();
        exec(&mut state, MatchAction::ban("smashville")).unwrap();

        exec(&mut state, MatchAction::enable_gentlemans()).unwrap();
        assert_eq!(state.phase(), Phase::Selecting);
        assert!(state.stage_bans().is_empty());

        exec(&mut state, MatchAction::disable_gentlemans()).unwrap();
        assert_eq!(state.phase(), Phase::Banning);
        assert_eq!(
            state.ban_order(),
            order::game1_order(PlayerIdx::P1).as_slice()
        );
        assert_eq!(state.current_ban_index(), 0);
    }

    #[test]
    fn set_runs_to_completion_and_stays_terminal() {
        let mut state = MatchState::new();
        let mut config = alice_bob_config();
        config.gentlemans_agreement = true;
        exec(&mut state, MatchAction::setup(config)).unwrap();

        for _ in 0..2 {
            exec(&mut state, MatchAction::select("hollow-bastion")).unwrap();
            exec(&mut state, MatchAction::declare_winner(PlayerIdx::P2)).unwrap();
        }
        assert_eq!(state.phase(), Phase::SetComplete);
        assert_eq!(state.set_winner(), Some(PlayerIdx::P2));

        // Terminal: game actions bounce, only reset/setup move on.
        assert!(exec(&mut state, MatchAction::select("battlefield")).is_err());
        assert!(exec(&mut state, MatchAction::ban("battlefield")).is_err());
        exec(&mut state, MatchAction::reset_match()).unwrap();
        assert_eq!(state.phase(), Phase::Setup);
    }

    #[test]
    fn manual_corrections_work_in_any_phase() {
        let mut state = MatchState::new();
        exec(&mut state, MatchAction::setup(alice_bob_config())).unwrap();
        exec(&mut state, MatchAction::update_name(PlayerIdx::P2, "Robert")).unwrap();
        exec(&mut state, MatchAction::update_score(PlayerIdx::P2, 1)).unwrap();

        assert_eq!(state.player(PlayerIdx::P2).name, "Robert");
        assert_eq!(state.player(PlayerIdx::P2).score, 1);
        assert_eq!(state.phase(), Phase::Banning);
    }
}
