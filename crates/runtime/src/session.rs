//! Stateful façade over the match engine with persistence attached.
//!
//! [`MatchSession`] owns the live [`MatchState`] and a [`MatchStore`]. Every
//! successful action is followed by an autosave, and launch goes through a
//! restore path that repairs whatever the stored document got wrong instead
//! of refusing to start.

use strike_core::restore::{self, FieldRepair, RepairedField};
use strike_core::{ActionError, MatchAction, MatchConfig, MatchEngine, MatchState, PlayerIdx};

use crate::repository::{InMemoryMatchStore, MatchStore};

/// A running match bound to a persistence backend.
pub struct MatchSession {
    state: MatchState,
    store: Box<dyn MatchStore>,
    pending_repairs: Vec<FieldRepair>,
}

impl MatchSession {
    /// Create a session with a fresh match over the given store.
    pub fn new(store: Box<dyn MatchStore>) -> Self {
        Self {
            state: MatchState::new(),
            store,
            pending_repairs: Vec::new(),
        }
    }

    /// Create a session backed by an in-memory store.
    ///
    /// Nothing outlives the process; used for ephemeral runs and tests.
    pub fn ephemeral() -> Self {
        Self::new(Box::new(InMemoryMatchStore::new()))
    }

    /// Current match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    // ===== Restore =====

    /// Adopt the stored document, repairing whatever does not hold up.
    ///
    /// Returns `true` when a stored document was found. Storage failures
    /// degrade to a fresh match rather than erroring, so launch always
    /// produces a usable session. Repairs are held until
    /// [`validate_restored_state`](Self::validate_restored_state) reports
    /// them.
    pub fn restore(&mut self) -> bool {
        match self.store.load_raw() {
            Ok(Some(document)) => {
                let (state, repairs) = restore::reconcile_document(document);
                self.state = state;
                if !repairs.is_empty() {
                    // Persist the repaired shape so the next launch is clean.
                    self.autosave();
                }
                tracing::info!(
                    "Restored match state ({} field(s) repaired)",
                    repairs.len()
                );
                self.pending_repairs = repairs;
                true
            }
            Ok(None) => {
                tracing::debug!("No stored match state, starting fresh");
                false
            }
            Err(err) => {
                tracing::warn!("Stored match state unreadable, starting fresh: {err}");
                self.state = MatchState::new();
                self.pending_repairs = vec![FieldRepair {
                    field: RepairedField::Document,
                    reason: format!("stored document unreadable: {err}"),
                }];
                true
            }
        }
    }

    /// Re-audit the restored state and drain every repair applied so far.
    ///
    /// The browser build ran this pass on a short delay after rehydration;
    /// callers here schedule it the same way, once the UI is up. Each repair
    /// is logged at warn level. A clean restore drains nothing.
    pub fn validate_restored_state(&mut self) -> Vec<FieldRepair> {
        let late = restore::audit_state(&mut self.state);
        if !late.is_empty() {
            self.autosave();
        }
        self.pending_repairs.extend(late);

        let repairs = std::mem::take(&mut self.pending_repairs);
        for repair in &repairs {
            tracing::warn!("Repaired restored state field {repair}");
        }
        repairs
    }

    /// Drop the persisted document. The in-memory state is untouched.
    pub fn reset_storage(&self) -> crate::repository::Result<()> {
        self.store.clear()
    }

    // ===== Match operations =====

    /// Start a match from the setup form values.
    pub fn setup_match(&mut self, config: MatchConfig) -> Result<(), ActionError> {
        self.execute(MatchAction::setup(config))
    }

    /// Strike a stage for the player whose turn it is.
    pub fn ban_stage(&mut self, stage: impl Into<String>) -> Result<(), ActionError> {
        self.execute(MatchAction::ban(stage))
    }

    /// Undo the most recent strike.
    pub fn unban_stage(&mut self, stage: impl Into<String>) -> Result<(), ActionError> {
        self.execute(MatchAction::unban(stage))
    }

    /// Pick the stage the game will be played on.
    pub fn select_stage(&mut self, stage: impl Into<String>) -> Result<(), ActionError> {
        self.execute(MatchAction::select(stage))
    }

    /// Record the winner of the current game and advance the set.
    pub fn declare_winner(&mut self, winner: PlayerIdx) -> Result<(), ActionError> {
        self.execute(MatchAction::declare_winner(winner))
    }

    /// Switch to gentleman's agreement: free pick, no striking.
    pub fn enable_gentlemans_agreement(&mut self) -> Result<(), ActionError> {
        self.execute(MatchAction::enable_gentlemans())
    }

    /// Return from gentleman's agreement to the striking protocol.
    pub fn disable_gentlemans_agreement(&mut self) -> Result<(), ActionError> {
        self.execute(MatchAction::disable_gentlemans())
    }

    /// Wipe current-game strikes without leaving the striking flow.
    pub fn clear_bans(&mut self) -> Result<(), ActionError> {
        self.execute(MatchAction::clear_bans())
    }

    /// Rename a player.
    pub fn update_player_name(
        &mut self,
        player: PlayerIdx,
        name: impl Into<String>,
    ) -> Result<(), ActionError> {
        self.execute(MatchAction::update_name(player, name))
    }

    /// Overwrite a player's score.
    pub fn update_player_score(&mut self, player: PlayerIdx, score: u32) -> Result<(), ActionError> {
        self.execute(MatchAction::update_score(player, score))
    }

    /// Reset scores and history and go back to setup.
    pub fn reset_match(&mut self) -> Result<(), ActionError> {
        self.execute(MatchAction::reset_match())
    }

    /// Go back to setup keeping scores and history.
    pub fn reset_to_setup(&mut self) -> Result<(), ActionError> {
        self.execute(MatchAction::reset_to_setup())
    }

    // ===== Internals =====

    fn execute(&mut self, action: MatchAction) -> Result<(), ActionError> {
        let name = action.name();
        match MatchEngine::new(&mut self.state).execute(&action) {
            Ok(()) => {
                tracing::debug!("Applied {} (phase: {})", name, self.state.phase());
                self.autosave();
                Ok(())
            }
            Err(err) => {
                tracing::debug!("Rejected {} ({})", name, err.code());
                Err(err)
            }
        }
    }

    fn autosave(&self) {
        if let Err(err) = self.store.save(&self.state) {
            tracing::warn!("Autosave failed: {err}");
        }
    }
}
