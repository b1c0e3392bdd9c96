//! # Introduction
//!
//! memfit is an interactive terminal demo of the three classic
//! contiguous-memory allocation strategies: first-fit, worst-fit, and
//! best-fit. Two free-form number lists (partition capacities and request
//! sizes) are edited live; every frame they are re-parsed and the whole
//! allocation run is replayed and rendered as a table through a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Input text → parse_number_list → run_allocations → TUI table
//! ```
//!
//! 1. [`input`] — parses the comma/space-delimited lists.
//! 2. [`alloc`] — the core: [`alloc::FitPolicy`] selection functions and
//!    the [`alloc::run_allocations`] driver, which records one
//!    [`alloc::AllocationStep`] per request.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! The run is single-threaded and synchronous: each request is processed
//! strictly in order, and the capacity reduction it makes is visible to
//! the next request's selection. An unsatisfiable request is a normal
//! outcome (`None` placement), never an error.

pub mod alloc;
pub mod input;
pub mod ui;
