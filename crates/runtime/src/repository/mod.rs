//! Store layer for the persisted match document.
//!
//! Stores hold exactly one document: the latest match state. The static
//! stage catalog lives in `strike_core::catalog` and is never persisted.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{Result, StoreError};
pub use file::{FileMatchStore, STORAGE_KEY};
pub use memory::InMemoryMatchStore;
pub use traits::MatchStore;
