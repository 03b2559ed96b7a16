//! Fixed stage catalog and per-game striking counts.
//!
//! The catalog is static data: exactly nine legal stages in canonical order,
//! never created or destroyed at runtime. Rules code depends only on id
//! membership and counts; display names are carried for UI layers.

use crate::state::BanLedger;

/// A tournament-legal stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    /// Stable identifier used in state, history, and on the wire.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Carried for catalog fidelity; every entry ships legal.
    pub is_legal: bool,
}

/// Number of stages in the catalog.
pub const STAGE_COUNT: usize = 9;

/// Strikes required in game 1 (3-4-1 striking over the full catalog).
pub const GAME1_BAN_COUNT: usize = 7;

/// Strikes required in games 2 and later (winner bans 3).
pub const LATER_BAN_COUNT: usize = 3;

static STAGES: [Stage; STAGE_COUNT] = [
    Stage {
        id: "battlefield",
        name: "Battlefield",
        is_legal: true,
    },
    Stage {
        id: "final-destination",
        name: "Final Destination",
        is_legal: true,
    },
    Stage {
        id: "small-battlefield",
        name: "Small Battlefield",
        is_legal: true,
    },
    Stage {
        id: "pokemon-stadium-2",
        name: "Pokémon Stadium 2",
        is_legal: true,
    },
    Stage {
        id: "smashville",
        name: "Smashville",
        is_legal: true,
    },
    Stage {
        id: "town-and-city",
        name: "Town and City",
        is_legal: true,
    },
    Stage {
        id: "kalos-pokemon-league",
        name: "Kalos Pokémon League",
        is_legal: true,
    },
    Stage {
        id: "hollow-bastion",
        name: "Hollow Bastion",
        is_legal: true,
    },
    Stage {
        id: "yoshis-story",
        name: "Yoshi's Story",
        is_legal: true,
    },
];

/// All stages in canonical order.
pub fn all_stages() -> &'static [Stage; STAGE_COUNT] {
    &STAGES
}

/// Looks up a stage by its id.
pub fn stage_by_id(id: &str) -> Option<&'static Stage> {
    STAGES.iter().find(|stage| stage.id == id)
}

/// Whether the id names a catalog stage.
pub fn is_known_stage(id: &str) -> bool {
    stage_by_id(id).is_some()
}

/// Display name for an id, falling back to the id itself for unknown stages.
pub fn stage_name(id: &str) -> &str {
    match stage_by_id(id) {
        Some(stage) => stage.name,
        None => id,
    }
}

/// Catalog stages not struck in the given ledger, in canonical order.
pub fn available_stages(bans: &BanLedger) -> Vec<&'static Stage> {
    STAGES
        .iter()
        .filter(|stage| !bans.contains(stage.id))
        .collect()
}

/// Catalog stages struck in the given ledger, in canonical order.
pub fn banned_stages(bans: &BanLedger) -> Vec<&'static Stage> {
    STAGES
        .iter()
        .filter(|stage| bans.contains(stage.id))
        .collect()
}

/// Strikes required for the given 1-based game number.
pub const fn ban_count_for_game(game_number: u32) -> usize {
    if game_number == 1 {
        GAME1_BAN_COUNT
    } else {
        LATER_BAN_COUNT
    }
}

/// How many stages the selector picks from once striking ends. Informational;
/// the rules only ever enforce ban counts.
pub const fn selection_count_for_game(game_number: u32) -> usize {
    STAGE_COUNT - ban_count_for_game(game_number)
}
