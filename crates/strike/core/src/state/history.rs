use super::PlayerIdx;

/// Immutable record of one decided game.
///
/// Appended to the match history when a winner is declared and never mutated
/// afterwards. The ban list is a frozen `(stage, seat)` snapshot of the
/// ledger at the moment the game ended, in strike order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    /// 1-based game number within the set.
    pub game_number: u32,
    /// Seat that won the game.
    pub winner: PlayerIdx,
    /// Catalog id of the stage the game was played on.
    pub selected_stage: String,
    /// Strikes made for this game, in order.
    pub stage_bans: Vec<(String, PlayerIdx)>,
}
