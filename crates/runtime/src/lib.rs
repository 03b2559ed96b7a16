//! Session and persistence layer for stage-striking matches.
//!
//! This crate wraps the pure rules in `strike_core` with what a front end
//! needs at runtime:
//! - [`session`] hosts [`MatchSession`], which executes actions and
//!   autosaves after each one
//! - [`repository`] provides [`MatchStore`] backends keeping the current
//!   match on disk or in memory
pub mod repository;
pub mod session;

pub use repository::{
    FileMatchStore, InMemoryMatchStore, MatchStore, Result, STORAGE_KEY, StoreError,
};
pub use session::MatchSession;
