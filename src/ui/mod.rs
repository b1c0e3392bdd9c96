//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, control focus
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (inputs, allocation table, status bar)
//! - **[`textfield`]** — the editable, character-filtered line widget used
//!   for the two number lists
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the initial
//! input text and policy and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod textfield;
pub mod theme;

pub use app::App;
