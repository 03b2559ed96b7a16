/// Phase of the stage-selection state machine.
///
/// Exactly one phase is active at any observable point. `SetComplete` is
/// terminal for the set; a new match restarts at `Setup`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Phase {
    /// Collecting match configuration; no game in progress.
    Setup,
    /// Players are striking stages in ban-order sequence.
    Banning,
    /// Striking is done (or skipped); the stage for the game is chosen here.
    Selecting,
    /// A stage is locked in; waiting for the game's winner.
    WinnerSelect,
    /// A player reached the win threshold; the set is over.
    SetComplete,
}

impl Phase {
    /// Whether bans can exist in this phase (current-game ledger non-empty).
    pub fn allows_ban_edits(self) -> bool {
        matches!(self, Phase::Banning | Phase::Selecting)
    }

    /// Whether the set has finished.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::SetComplete)
    }
}

/// Best-of format for the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MatchFormat {
    /// Best of 3: first to 2 game wins.
    Bo3,
    /// Best of 5: first to 3 game wins.
    Bo5,
}

impl MatchFormat {
    /// Number of game wins that ends the set.
    pub const fn win_threshold(self) -> u32 {
        match self {
            MatchFormat::Bo3 => 2,
            MatchFormat::Bo5 => 3,
        }
    }

    /// Human-readable label ("Best of 3").
    pub const fn label(self) -> &'static str {
        match self {
            MatchFormat::Bo3 => "Best of 3",
            MatchFormat::Bo5 => "Best of 5",
        }
    }
}

impl Default for MatchFormat {
    fn default() -> Self {
        MatchFormat::Bo3
    }
}
