//! # Introduction
//!
//! Selection Studio walks through selection sort one step at a time. The whole
//! run is recorded up front as a list of steps, each holding a full copy of the
//! array, and a terminal UI built with [ratatui](https://docs.rs/ratatui) moves
//! a cursor back and forth over that list.
//!
//! ## Pipeline
//!
//! ```text
//! Text / file / ?data= → Validator → Array → Step Generator → StepTrace → Player → TUI
//! ```
//!
//! 1. [`input`] — validates user data (10 integers in 1..=99 by default),
//!    reads data files, encodes share strings and produces random arrays.
//! 2. [`trace`] — the step generator: a pure function from an array to a
//!    [`trace::StepTrace`], plus narrative text in English or Japanese.
//! 3. [`listing`] — the reference listing that steps point into.
//! 4. [`playback`] — cursor and auto-play state machine.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 6. [`report`] — human and JSON renderings of a trace for the CLI.
//!
//! [`config`], [`logging`] and [`error`] carry the supporting plumbing for the
//! binary.

pub mod config;
pub mod error;
pub mod input;
pub mod listing;
pub mod logging;
pub mod playback;
pub mod report;
pub mod trace;
pub mod ui;
