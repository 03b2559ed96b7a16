//! Stage-striking rules for best-of sets between two players.
//!
//! `strike-core` defines the canonical match rules: the fixed stage catalog,
//! the ban-order tables of the striking protocol, the [`state::MatchState`]
//! aggregate, and the operations that move it through setup, striking,
//! selection, winner declaration, and set completion. All state mutation
//! flows through [`engine::MatchEngine`]; persistence layers depend on the
//! types re-exported here and, with the `serde` feature, on the wire codec
//! and the [`restore`] reconciler.
pub mod action;
pub mod catalog;
pub mod engine;
pub mod order;
#[cfg(feature = "serde")]
pub mod restore;
pub mod state;
pub mod views;

pub use action::{
    ActionError, BanStageAction, ClearBansAction, DeclareWinnerAction, DisableGentlemansAction,
    EnableGentlemansAction, MatchAction, MatchConfig, MatchTransition, ResetMatchAction,
    ResetToSetupAction, SelectStageAction, SetupMatchAction, UnbanStageAction,
    UpdatePlayerNameAction, UpdatePlayerScoreAction,
};
pub use catalog::{Stage, STAGE_COUNT};
pub use engine::MatchEngine;
pub use state::{
    BanLedger, BanOrder, BanRecord, GameResult, InvalidPlayerIdx, MatchFormat, MatchState,
    MAX_BANS_PER_GAME, Phase, Player, PlayerIdx,
};
pub use views::BanPhaseSummary;
