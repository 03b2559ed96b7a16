//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the [`UiFrame`] snapshot and
//! draws into a terminal frame. No widget mutates state or talks to the
//! session directly.
//!
//! [`UiFrame`]: crate::view_model::UiFrame

pub mod footer;
pub mod score_adjust;
pub mod scoreboard;
pub mod set_complete;
pub mod setup_form;
pub mod stage_grid;
pub mod status_panel;
pub mod winner_dialog;
