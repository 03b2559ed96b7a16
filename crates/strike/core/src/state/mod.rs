//! Authoritative match state representation.
//!
//! This module owns the data structures describing players, phase
//! bookkeeping, the ban ledger, and game history. Consumers read state
//! through the accessors here (or the derived views) and mutate it
//! exclusively through the engine.
mod history;
mod ledger;
mod phase;
mod player;

pub use history::GameResult;
pub use ledger::{BanLedger, BanOrder, BanRecord, MAX_BANS_PER_GAME};
pub use phase::{MatchFormat, Phase};
pub use player::{InvalidPlayerIdx, Player, PlayerIdx};

/// Canonical state of one best-of set, from setup to completion.
///
/// Fields are deliberately not public: the aggregate's contract is the
/// operation surface plus read-only accessors, so invariants (phase/ledger
/// agreement, score bounds, append-only history) cannot be broken from
/// outside the crate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    /// The two participants, seat 0 and seat 1.
    pub(crate) players: [Player; 2],
    /// Best-of format deciding the win threshold.
    pub(crate) match_format: MatchFormat,
    /// 1-based number of the game currently being struck/played.
    pub(crate) current_game: u32,
    /// Active phase of the state machine.
    pub(crate) current_phase: Phase,
    /// Seat turns for the current game's striking phase; empty under the
    /// gentleman's agreement.
    pub(crate) ban_order: BanOrder,
    /// Cursor into `ban_order`; always within `0..=ban_order.len()`.
    pub(crate) current_ban_index: usize,
    /// Strikes recorded for the current game.
    pub(crate) stage_bans: BanLedger,
    /// Stage locked in for the current game, set on leaving `Selecting`.
    pub(crate) selected_stage: Option<String>,
    /// When set, striking is skipped for this and subsequent games.
    pub(crate) gentlemans_agreement: bool,
    /// One record per decided game, append-only.
    pub(crate) game_history: Vec<GameResult>,
}

impl MatchState {
    /// Fresh state before any match has been configured: default players,
    /// best-of-3, game 1, `Setup` phase, everything else empty.
    pub fn new() -> Self {
        Self {
            players: Player::default_pair(),
            match_format: MatchFormat::default(),
            current_game: 1,
            current_phase: Phase::Setup,
            ban_order: BanOrder::new(),
            current_ban_index: 0,
            stage_bans: BanLedger::new(),
            selected_stage: None,
            gentlemans_agreement: false,
            game_history: Vec::new(),
        }
    }

    // ===== Read accessors =====

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, idx: PlayerIdx) -> &Player {
        &self.players[idx.index()]
    }

    pub fn match_format(&self) -> MatchFormat {
        self.match_format
    }

    pub fn current_game(&self) -> u32 {
        self.current_game
    }

    pub fn phase(&self) -> Phase {
        self.current_phase
    }

    pub fn ban_order(&self) -> &[PlayerIdx] {
        &self.ban_order
    }

    pub fn current_ban_index(&self) -> usize {
        self.current_ban_index
    }

    pub fn stage_bans(&self) -> &BanLedger {
        &self.stage_bans
    }

    pub fn selected_stage(&self) -> Option<&str> {
        self.selected_stage.as_deref()
    }

    pub fn gentlemans_agreement(&self) -> bool {
        self.gentlemans_agreement
    }

    pub fn game_history(&self) -> &[GameResult] {
        &self.game_history
    }

    // ===== Crate-internal mutation helpers =====

    /// Wipes the current game's strikes and rewinds the ban cursor.
    pub(crate) fn clear_current_bans(&mut self) {
        self.stage_bans.clear();
        self.current_ban_index = 0;
    }

    /// Starts a fresh striking phase with the given turn order.
    pub(crate) fn enter_banning(&mut self, order: BanOrder) {
        self.clear_current_bans();
        self.selected_stage = None;
        self.ban_order = order;
        self.current_phase = Phase::Banning;
    }

    /// Skips striking entirely and goes straight to stage selection.
    pub(crate) fn enter_selecting_unbanned(&mut self) {
        self.clear_current_bans();
        self.selected_stage = None;
        self.ban_order = BanOrder::new();
        self.current_phase = Phase::Selecting;
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
