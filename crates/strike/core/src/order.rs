//! Ban-order calculation for the striking protocol.
//!
//! Pure functions of their single input; the engine stores the produced
//! order in state and walks it with the ban cursor.

use crate::catalog::{GAME1_BAN_COUNT, LATER_BAN_COUNT};
use crate::state::{BanOrder, PlayerIdx};

/// Turn sequence for game 1: 3-4-1 striking.
///
/// The first banner strikes three stages, the other player strikes four,
/// leaving two candidates for the first banner to choose from.
pub fn game1_order(first_banner: PlayerIdx) -> BanOrder {
    let mut order = BanOrder::new();
    for _ in 0..3 {
        order.push(first_banner);
    }
    for _ in 3..GAME1_BAN_COUNT {
        order.push(first_banner.opponent());
    }
    order
}

/// Turn sequence for games 2 and later: the previous game's winner strikes
/// three stages, and the loser picks from the remaining six.
pub fn games2_plus_order(winner: PlayerIdx) -> BanOrder {
    let mut order = BanOrder::new();
    for _ in 0..LATER_BAN_COUNT {
        order.push(winner);
    }
    order
}
