use crate::action::error::ActionError;
use crate::action::transition::MatchTransition;
use crate::catalog;
use crate::state::{MatchState, Phase};

/// Locks in the stage the current game will be played on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectStageAction {
    pub stage: String,
}

impl SelectStageAction {
    pub fn new(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
        }
    }
}

impl MatchTransition for SelectStageAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &MatchState) -> Result<(), Self::Error> {
        if state.phase() != Phase::Selecting {
            return Err(ActionError::PhaseMismatch {
                operation: "select_stage",
                expected: "selecting",
                actual: state.phase(),
            });
        }
        if !catalog::is_known_stage(&self.stage) {
            return Err(ActionError::UnknownStage {
                stage: self.stage.clone(),
            });
        }
        if state.stage_bans().contains(&self.stage) {
            return Err(ActionError::StageIsBanned {
                stage: self.stage.clone(),
            });
        }
        if state.selected_stage() == Some(self.stage.as_str()) {
            return Err(ActionError::StageAlreadySelected {
                stage: self.stage.clone(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        state.selected_stage = Some(self.stage.clone());
        state.current_phase = Phase::WinnerSelect;
        Ok(())
    }
}
