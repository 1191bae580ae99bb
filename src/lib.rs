//! `distviz` library crate.
//!
//! The binary (`distviz`) is a thin wrapper around this library so that:
//!
//! - the numeric routines are testable without spawning processes
//! - modules are reusable (e.g., future exports, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod domain;
pub mod error;
pub mod plot;
pub mod report;
pub mod stats;
pub mod tui;
