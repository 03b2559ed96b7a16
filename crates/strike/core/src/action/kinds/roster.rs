use crate::action::error::ActionError;
use crate::action::transition::MatchTransition;
use crate::state::{MatchState, PlayerIdx};

/// Overwrites one player's display name. Legal in any phase; used for
/// manual correction mid-set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdatePlayerNameAction {
    pub player: PlayerIdx,
    pub name: String,
}

impl UpdatePlayerNameAction {
    pub fn new(player: PlayerIdx, name: impl Into<String>) -> Self {
        Self {
            player,
            name: name.into(),
        }
    }
}

impl MatchTransition for UpdatePlayerNameAction {
    type Error = ActionError;

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        state.players[self.player.index()].name = self.name.clone();
        Ok(())
    }
}

/// Writes an absolute score for one player. Legal in any phase.
///
/// The unsigned type keeps scores at zero or above; set completion is never
/// decided here, only by declaring a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdatePlayerScoreAction {
    pub player: PlayerIdx,
    pub score: u32,
}

impl UpdatePlayerScoreAction {
    pub fn new(player: PlayerIdx, score: u32) -> Self {
        Self { player, score }
    }
}

impl MatchTransition for UpdatePlayerScoreAction {
    type Error = ActionError;

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        state.players[self.player.index()].score = self.score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;

    #[test]
    fn updates_write_through_in_any_phase() {
        let mut state = MatchState::new();
        assert_eq!(state.phase(), Phase::Setup);

        UpdatePlayerNameAction::new(PlayerIdx::P2, "Carol")
            .apply(&mut state)
            .unwrap();
        UpdatePlayerScoreAction::new(PlayerIdx::P2, 2)
            .apply(&mut state)
            .unwrap();

        assert_eq!(state.player(PlayerIdx::P2).name, "Carol");
        assert_eq!(state.player(PlayerIdx::P2).score, 2);
        assert_eq!(state.player(PlayerIdx::P1).score, 0);
    }
}
