use crate::action::error::ActionError;
use crate::action::transition::MatchTransition;
use crate::order;
use crate::state::{MatchFormat, MatchState, Phase, Player, PlayerIdx};

/// Everything the setup form collects to start a set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    pub player1_name: String,
    pub player2_name: String,
    pub match_format: MatchFormat,
    /// Seat that strikes first in game 1. Ignored under the gentleman's
    /// agreement, where no striking happens.
    pub first_banner: PlayerIdx,
    pub gentlemans_agreement: bool,
}

/// Starts (or restarts) a set from the given configuration.
///
/// Always legal; any prior match is overwritten. Scores reset to zero,
/// history clears, and the state lands either in `Banning` with the game-1
/// order or directly in `Selecting` when striking is skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupMatchAction {
    pub config: MatchConfig,
}

impl SetupMatchAction {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }
}

impl MatchTransition for SetupMatchAction {
    type Error = ActionError;

    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error> {
        let config = &self.config;
        state.players = [
            Player::new(PlayerIdx::P1, config.player1_name.clone()),
            Player::new(PlayerIdx::P2, config.player2_name.clone()),
        ];
        state.match_format = config.match_format;
        state.current_game = 1;
        state.game_history.clear();
        state.gentlemans_agreement = config.gentlemans_agreement;

        if config.gentlemans_agreement {
            state.enter_selecting_unbanned();
        } else {
            state.enter_banning(order::game1_order(config.first_banner));
        }
        Ok(())
    }
}
