//! REPL Presenter - Renders UiEvents to the terminal
//!
//! All println!/colored output is concentrated here, separating display
//! from picker logic (which lives in PickerController in the application layer).

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::DrawReporter;
use colored::Colorize;
use picker_application::{StatusKind, UiEvent};

/// Renders UiEvents to the terminal for the REPL
pub struct ReplPresenter {
    reporter: DrawReporter,
    quiet: bool,
}

impl Default for ReplPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplPresenter {
    pub fn new() -> Self {
        Self {
            reporter: DrawReporter::new(),
            quiet: false,
        }
    }

    /// Presenter honoring color, animation and quiet settings
    pub fn from_config(config: &OutputConfig) -> Self {
        if !config.color {
            colored::control::set_override(false);
        }
        let reporter = if config.animate && !config.quiet {
            DrawReporter::new()
        } else {
            DrawReporter::hidden()
        };
        Self {
            reporter,
            quiet: config.quiet,
        }
    }

    pub fn reporter(&self) -> &DrawReporter {
        &self.reporter
    }

    /// Render a single UiEvent to the terminal
    pub fn render(&self, event: &UiEvent) {
        match event {
            UiEvent::DrawStarted { pool_size, steps } => {
                self.reporter.on_draw_start(*pool_size, *steps)
            }
            UiEvent::Highlight(highlight) => self.reporter.on_highlight(&highlight.name),
            UiEvent::Winner(_) | UiEvent::Exit => self.reporter.on_finish(),
            _ => {}
        }

        if let Some(text) = self.text_for(event) {
            println!("{}", text);
        }
    }

    /// Text printed for an event, or `None` when it renders nothing.
    ///
    /// Quiet mode drops informational output but never errors, draw results
    /// or output the user explicitly asked for.
    fn text_for(&self, event: &UiEvent) -> Option<String> {
        let text = match event {
            UiEvent::Welcome(info) if !self.quiet => ConsoleFormatter::welcome(info),
            UiEvent::Help => ConsoleFormatter::help(),
            UiEvent::SettingsDisplay(snapshot) => ConsoleFormatter::settings(snapshot),
            UiEvent::PoolChanged(snapshot) if !self.quiet => ConsoleFormatter::pool(snapshot),
            UiEvent::PoolListed(snapshot) => ConsoleFormatter::pool(snapshot),
            UiEvent::Status { message, kind } if *kind == StatusKind::Error || !self.quiet => {
                ConsoleFormatter::status(message, *kind)
            }
            UiEvent::Winner(winner) => ConsoleFormatter::winner(winner),
            UiEvent::QuestionChanged { display, is_set } if !self.quiet => {
                ConsoleFormatter::question(display, *is_set)
                    .trim_end()
                    .to_string()
            }
            UiEvent::SettingsChanged(snapshot) if !self.quiet => {
                ConsoleFormatter::settings(snapshot)
            }
            UiEvent::CommandError { message } => format!(
                "{} {}\nType {} for available commands.",
                "Error:".red().bold(),
                message,
                "/help".cyan()
            ),
            UiEvent::Exit => "Bye!".to_string(),
            _ => return None,
        };
        Some(text)
    }
}
