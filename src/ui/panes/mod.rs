//! TUI pane rendering modules
//!
//! Stateless render functions for the visible panes, one module per pane:
//!
//! - [`controls`]: the partition/request input fields and the policy selector
//! - [`results`]: the per-request allocation table and final capacities row
//! - [`status`]: status bar with keybindings and the active policy
//!
//! Each module exports a single `render_*` function taking a [`Frame`],
//! the target [`Rect`], and the state it displays; all state lives in
//! [`crate::ui::app::App`].
//!
//! [`Frame`]: ratatui::Frame
//! [`Rect`]: ratatui::layout::Rect

pub mod controls;
pub mod results;
pub mod status;

pub use controls::render_controls_pane;
pub use results::render_results_pane;
pub use status::render_status_bar;
