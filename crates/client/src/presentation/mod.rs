//! Terminal presentation components for the striking client.
pub mod event_loop;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use event_loop::EventLoop;
