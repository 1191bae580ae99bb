//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - builds the demonstration config
//! - runs the panel pipeline
//! - hands the results to a renderer (TUI when interactive, ASCII otherwise)

use std::io::IsTerminal;

use crate::domain::DemoConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `distviz` binary.
///
/// Exercises every numeric routine with the fixed demonstration constants
/// and forwards the resulting panels to the plotting collaborator. There are
/// no flags: all knobs live in `DemoConfig`.
pub fn run() -> Result<(), AppError> {
    let config = DemoConfig::default();

    if std::io::stdout().is_terminal() {
        return crate::tui::run(config);
    }

    // Non-interactive stdout (pipe, CI log): print the summary and a
    // deterministic ASCII rendering instead of taking over the terminal.
    let panels = pipeline::build_panels(&config)?;
    println!("{}", crate::report::format_summary(&panels));
    println!("{}", crate::plot::render_ascii_panels(&panels, 72, 14));
    Ok(())
}
