//! Store contract for the persisted match document.

use serde_json::Value;
use strike_core::MatchState;

use super::Result;

/// Persistence backend holding the single current-match document.
///
/// Loading hands back raw JSON rather than a decoded state: stored documents
/// may predate the current build or have been damaged on disk, so callers
/// run them through `strike_core::restore` instead of failing on decode.
pub trait MatchStore: Send + Sync {
    /// Persist the match state, replacing any previous document.
    fn save(&self, state: &MatchState) -> Result<()>;

    /// Load the stored document as raw JSON.
    fn load_raw(&self) -> Result<Option<Value>>;

    /// Remove the stored document.
    fn clear(&self) -> Result<()>;

    /// Check whether a stored document exists.
    fn exists(&self) -> bool;
}
