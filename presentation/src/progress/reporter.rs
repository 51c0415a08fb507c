//! Spinner shown while a draw is animating

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Renders the reveal animation as an indicatif spinner.
///
/// Each highlight replaces the spinner message; the winner clears it so the
/// announcement prints on a clean line.
pub struct DrawReporter {
    bar: Mutex<Option<ProgressBar>>,
    enabled: bool,
}

impl DrawReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            enabled: true,
        }
    }

    /// Reporter that renders nothing (`--no-animation`, `--quiet`)
    pub fn hidden() -> Self {
        Self {
            bar: Mutex::new(None),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn on_draw_start(&self, pool_size: usize, steps: u32) {
        if !self.enabled || steps == 0 {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("Drawing from {} names", pool_size));
        pb.set_message("...");

        if let Ok(mut guard) = self.bar.lock() {
            if let Some(previous) = guard.take() {
                previous.finish_and_clear();
            }
            *guard = Some(pb);
        }
    }

    pub fn on_highlight(&self, name: &str) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            pb.set_message(name.yellow().bold().to_string());
            pb.tick();
        }
    }

    pub fn on_finish(&self) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }

    /// Whether a spinner is currently shown
    pub fn is_active(&self) -> bool {
        self.bar.lock().map(|g| g.is_some()).unwrap_or(false)
    }
}

impl Default for DrawReporter {
    fn default() -> Self {
        Self::new()
    }
}
