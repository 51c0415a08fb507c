//! Presentation layer for name-picker
//!
//! This crate contains the CLI definition, console formatting, the draw
//! spinner and the interactive REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::DrawReporter;
pub use repl::{PickerRepl, ReplPresenter, TerminalConfirmation};
