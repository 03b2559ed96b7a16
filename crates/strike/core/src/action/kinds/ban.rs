use crate::action::error::ActionError;
use crate::action::transition::MatchTransition;
use crate::catalog;
use crate::state::{BanRecord, MatchState, Phase};

/// Strikes one stage for the seat whose turn it is.
///
/// The acting seat is `ban_order[current_ban_index]`; the machine enforces
/// phase and sequence legality only, never which participant pressed the
/// key (both players share one device and one state).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BanStageAction {
    pub stage: String,
}

impl BanStageAction {
    pub fn new(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
        }
    }
}

impl MatchTransition for BanStageAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        if state.phase() != Phase::Banning {
            return Err(ActionError::PhaseMismatch {
                operation: "ban_stage",
                expected: "banning",
                actual: state.phase(),
            });
        }
        if !catalog::is_known_stage(&self.stage) {
            return Err(ActionError::UnknownStage {
                stage: self.stage.clone(),
            });
        }
        if state.stage_bans().contains(&self.stage) {
            return Err(ActionError::StageAlreadyBanned {
                stage: self.stage.clone(),
            });
        }
        if state.current_ban_index() >= state.ban_order().len() {
            return Err(ActionError::BanOrderExhausted {
                game: state.current_game(),
                total: state.ban_order().len(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        let seat = state.ban_order[state.current_ban_index];
        state
            .stage_bans
            .push(BanRecord::new(self.stage.clone(), seat))
            .map_err(|_| ActionError::BanOrderExhausted {
                game: state.current_game,
                total: state.ban_order.len(),
            })?;
        state.current_ban_index += 1;

        if state.stage_bans.len() >= catalog::ban_count_for_game(state.current_game) {
            state.current_phase = Phase::Selecting;
        }
        Ok(())
    }
}

/// Undoes the single most recent strike.
///
/// Only the latest ledger entry may be retracted; undoing an older or
/// unrecorded ban is rejected. A successful undo always lands back in
/// `Banning`, covering the case where the undone strike had just completed
/// the striking phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnbanStageAction {
    pub stage: String,
}

impl UnbanStageAction {
    pub fn new(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
        }
    }
}

impl MatchTransition for UnbanStageAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        if !state.phase().allows_ban_edits() {
            return Err(ActionError::PhaseMismatch {
                operation: "unban_stage",
                expected: "banning or selecting",
                actual: state.phase(),
            });
        }
        match state.stage_bans().latest() {
            Some(latest) if latest.stage == self.stage => Ok(()),
            _ => Err(ActionError::NotMostRecentBan {
                stage: self.stage.clone(),
            }),
        }
    }

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        state.stage_bans.pop();
        state.current_ban_index = state.current_ban_index.saturating_sub(1);
        state.current_phase = Phase::Banning;
        Ok(())
    }
}

/// Wipes the current game's strikes and restarts its striking phase.
///
/// Always legal. Outside the striking phases this only empties the ledger;
/// from `Selecting` it additionally drops back to `Banning` unless the
/// gentleman's agreement is active (there is no striking to restart then).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClearBansAction;

impl MatchTransition for ClearBansAction {
    type Error = ActionError;

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        state.clear_current_bans();
        if state.current_phase == Phase::Selecting && !state.gentlemans_agreement {
            state.current_phase = Phase::Banning;
        }
        Ok(())
    }
}
