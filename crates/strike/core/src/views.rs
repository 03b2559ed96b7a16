//! Derived read-only views over match state.
//!
//! Everything a UI needs beyond the raw accessors: whose turn it is, how far
//! striking has progressed, who (if anyone) has won the set, and who picks
//! the stage. All of it is recomputed from state on demand; nothing here is
//! stored or cached.

use crate::catalog;
use crate::state::{MatchState, Phase, PlayerIdx};

/// Snapshot of the striking phase for status displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BanPhaseSummary {
    /// Seat whose turn it is to strike; `None` outside the banning phase.
    pub current_player: Option<PlayerIdx>,
    /// Strikes still to be made in this game.
    pub remaining_bans: usize,
    /// Strikes this game requires in total.
    pub total_bans: usize,
    /// Phase the summary was taken in.
    pub phase: Phase,
}

impl MatchState {
    /// Game wins needed to take the set under the current format.
    pub fn win_threshold(&self) -> u32 {
        self.match_format().win_threshold()
    }

    /// Seat whose turn it is to strike, if the match is mid-banning.
    pub fn acting_player(&self) -> Option<PlayerIdx> {
        if self.phase() != Phase::Banning {
            return None;
        }
        self.ban_order().get(self.current_ban_index()).copied()
    }

    /// Whether a player has reached the win threshold.
    pub fn is_set_complete(&self) -> bool {
        self.players()
            .iter()
            .any(|player| player.score >= self.win_threshold())
    }

    /// The set winner, once a score has reached the threshold.
    pub fn set_winner(&self) -> Option<PlayerIdx> {
        self.players()
            .iter()
            .find(|player| player.score >= self.win_threshold())
            .map(|player| player.id)
    }

    /// Whether enough strikes exist to proceed to stage selection.
    pub fn ready_for_selection(&self) -> bool {
        self.stage_bans().len() >= catalog::ban_count_for_game(self.current_game())
    }

    /// Striking progress for the current game.
    pub fn ban_phase(&self) -> BanPhaseSummary {
        let total_bans = self.ban_order().len();
        BanPhaseSummary {
            current_player: self.acting_player(),
            remaining_bans: total_bans.saturating_sub(self.current_ban_index()),
            total_bans,
            phase: self.phase(),
        }
    }

    /// Seat that picks the stage once striking ends: the first banner in
    /// game 1, the previous game's loser afterwards.
    pub fn stage_selector(&self) -> PlayerIdx {
        if self.current_game() == 1 {
            return self
                .ban_order()
                .first()
                .copied()
                .unwrap_or(PlayerIdx::P1);
        }
        match self.game_history().last() {
            Some(last) => last.winner.opponent(),
            None => self
                .ban_order()
                .first()
                .map(|seat| seat.opponent())
                .unwrap_or(PlayerIdx::P1),
        }
    }

    /// Total strikes recorded across the whole set, finished games included.
    pub fn total_bans_in_set(&self) -> usize {
        let past: usize = self
            .game_history()
            .iter()
            .map(|result| result.stage_bans.len())
            .sum();
        past + self.stage_bans().len()
    }
}
