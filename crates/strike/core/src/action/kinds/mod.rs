//! Concrete operation types, one transition per match operation.
pub mod ban;
pub mod reset;
pub mod roster;
pub mod rules;
pub mod select;
pub mod setup;
pub mod winner;

pub use ban::{BanStageAction, ClearBansAction, UnbanStageAction};
pub use reset::{ResetMatchAction, ResetToSetupAction};
pub use roster::{UpdatePlayerNameAction, UpdatePlayerScoreAction};
pub use rules::{DisableGentlemansAction, EnableGentlemansAction};
pub use select::SelectStageAction;
pub use setup::{MatchConfig, SetupMatchAction};
pub use winner::DeclareWinnerAction;
