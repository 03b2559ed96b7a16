use crate::state::Phase;

/// Rejection raised when an operation's precondition does not hold.
///
/// Every rejection is synchronous, leaves state untouched, and names the
/// offending stage or operation. None are fatal: callers translate them into
/// a no-op or a user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("{operation} requires phase {expected}, but the match is in {actual}")]
    PhaseMismatch {
        operation: &'static str,
        expected: &'static str,
        actual: Phase,
    },

    #[error("unknown stage '{stage}'")]
    UnknownStage { stage: String },

    #[error("stage '{stage}' is already banned")]
    StageAlreadyBanned { stage: String },

    #[error("all {total} bans for game {game} are already recorded")]
    BanOrderExhausted { game: u32, total: usize },

    #[error("cannot unban stage '{stage}': only the most recent ban can be undone")]
    NotMostRecentBan { stage: String },

    #[error("stage '{stage}' is banned and cannot be selected")]
    StageIsBanned { stage: String },

    #[error("stage '{stage}' is already the selected stage")]
    StageAlreadySelected { stage: String },
}

impl ActionError {
    /// Stable identifier for log correlation.
    pub fn code(&self) -> &'static str {
        match self {
            ActionError::PhaseMismatch { .. } => "phase_mismatch",
            ActionError::UnknownStage { .. } => "unknown_stage",
            ActionError::StageAlreadyBanned { .. } => "stage_already_banned",
            ActionError::BanOrderExhausted { .. } => "ban_order_exhausted",
            ActionError::NotMostRecentBan { .. } => "not_most_recent_ban",
            ActionError::StageIsBanned { .. } => "stage_is_banned",
            ActionError::StageAlreadySelected { .. } => "stage_already_selected",
        }
    }

    /// Whether the caller can continue with a different action after this
    /// rejection. Always true for precondition failures.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}
