//! Match operations and their transition contracts.
//!
//! Every mutation of [`MatchState`](crate::state::MatchState) is expressed
//! as a [`MatchAction`] and executed by the engine, which drives each
//! variant's [`MatchTransition`] implementation (validate, then apply).
mod error;
pub mod kinds;
mod transition;

pub use error::ActionError;
pub use kinds::{
    BanStageAction, ClearBansAction, DeclareWinnerAction, DisableGentlemansAction,
    EnableGentlemansAction, MatchConfig, ResetMatchAction, ResetToSetupAction, SelectStageAction,
    SetupMatchAction, UnbanStageAction, UpdatePlayerNameAction, UpdatePlayerScoreAction,
};
pub use transition::MatchTransition;

use crate::state::PlayerIdx;

/// Any operation executable against a match state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchAction {
    SetupMatch(SetupMatchAction),
    BanStage(BanStageAction),
    UnbanStage(UnbanStageAction),
    SelectStage(SelectStageAction),
    DeclareWinner(DeclareWinnerAction),
    EnableGentlemans(EnableGentlemansAction),
    DisableGentlemans(DisableGentlemansAction),
    ResetMatch(ResetMatchAction),
    ResetToSetup(ResetToSetupAction),
    UpdatePlayerName(UpdatePlayerNameAction),
    UpdatePlayerScore(UpdatePlayerScoreAction),
    ClearBans(ClearBansAction),
}

impl MatchAction {
    // ===== Convenience constructors =====

    pub fn setup(config: MatchConfig) -> Self {
        MatchAction::SetupMatch(SetupMatchAction::new(config))
    }

    pub fn ban(stage: impl Into<String>) -> Self {
        MatchAction::BanStage(BanStageAction::new(stage))
    }

    pub fn unban(stage: impl Into<String>) -> Self {
        MatchAction::UnbanStage(UnbanStageAction::new(stage))
    }

    pub fn select(stage: impl Into<String>) -> Self {
        MatchAction::SelectStage(SelectStageAction::new(stage))
    }

    pub fn declare_winner(winner: PlayerIdx) -> Self {
        MatchAction::DeclareWinner(DeclareWinnerAction::new(winner))
    }

    pub fn enable_gentlemans() -> Self {
        MatchAction::EnableGentlemans(EnableGentlemansAction)
    }

    pub fn disable_gentlemans() -> Self {
        MatchAction::DisableGentlemans(DisableGentlemansAction)
    }

    pub fn reset_match() -> Self {
        MatchAction::ResetMatch(ResetMatchAction)
    }

    pub fn reset_to_setup() -> Self {
        MatchAction::ResetToSetup(ResetToSetupAction)
    }

    pub fn update_name(player: PlayerIdx, name: impl Into<String>) -> Self {
        MatchAction::UpdatePlayerName(UpdatePlayerNameAction::new(player, name))
    }

    pub fn update_score(player: PlayerIdx, score: u32) -> Self {
        MatchAction::UpdatePlayerScore(UpdatePlayerScoreAction::new(player, score))
    }

    pub fn clear_bans() -> Self {
        MatchAction::ClearBans(ClearBansAction)
    }

    /// Operation name, stable for logs.
    pub fn name(&self) -> &'static str {
        match self {
            MatchAction::SetupMatch(_) => "setup_match",
            MatchAction::BanStage(_) => "ban_stage",
            MatchAction::UnbanStage(_) => "unban_stage",
            MatchAction::SelectStage(_) => "select_stage",
            MatchAction::DeclareWinner(_) => "declare_winner",
            MatchAction::EnableGentlemans(_) => "enable_gentlemans_agreement",
            MatchAction::DisableGentlemans(_) => "disable_gentlemans_agreement",
            MatchAction::ResetMatch(_) => "reset_match",
            MatchAction::ResetToSetup(_) => "reset_to_setup",
            MatchAction::UpdatePlayerName(_) => "update_player_name",
            MatchAction::UpdatePlayerScore(_) => "update_player_score",
            MatchAction::ClearBans(_) => "clear_bans",
        }
    }
}
