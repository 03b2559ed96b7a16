use core::fmt;

/// Seat index for one of the two players in a match.
///
/// Exactly two seats exist for the lifetime of a match. The index doubles as
/// the wire representation (0 or 1), so conversions from untrusted numbers go
/// through [`PlayerIdx::new`] / `TryFrom<u8>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct PlayerIdx(u8);

impl PlayerIdx {
    /// First seat (index 0).
    pub const P1: PlayerIdx = PlayerIdx(0);
    /// Second seat (index 1).
    pub const P2: PlayerIdx = PlayerIdx(1);

    /// Builds a seat index from a raw number, rejecting anything but 0 or 1.
    pub const fn new(raw: u8) -> Option<Self> {
        match raw {
            0 | 1 => Some(PlayerIdx(raw)),
            _ => None,
        }
    }

    /// The other seat.
    pub const fn opponent(self) -> Self {
        PlayerIdx(1 - self.0)
    }

    /// Raw index value (0 or 1).
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Index usable for slot lookups in the two-player array.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Error for out-of-range seat numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("player index {0} out of range (expected 0 or 1)")]
pub struct InvalidPlayerIdx(pub u8);

impl TryFrom<u8> for PlayerIdx {
    type Error = InvalidPlayerIdx;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        PlayerIdx::new(raw).ok_or(InvalidPlayerIdx(raw))
    }
}

impl From<PlayerIdx> for u8 {
    fn from(idx: PlayerIdx) -> Self {
        idx.0
    }
}

/// One of the two participants in a match.
///
/// Identity (`id`) is fixed at the seat; `name` and `score` are the only
/// mutable parts and change exclusively through match operations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Seat this player occupies. Never changes.
    pub id: PlayerIdx,
    /// Display name, editable at any time.
    pub name: String,
    /// Games won in the current set.
    pub score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(id: PlayerIdx, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }

    /// Default pair used before any match has been configured.
    pub fn default_pair() -> [Player; 2] {
        [
            Player::new(PlayerIdx::P1, "Player 1"),
            Player::new(PlayerIdx::P2, "Player 2"),
        ]
    }
}
