//! Interactive yes/no prompt on stdin

use colored::Colorize;
use picker_application::ConfirmationPort;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Asks on the terminal before destructive commands
pub struct TerminalConfirmation;

impl TerminalConfirmation {
    pub fn new() -> Self {
        Self
    }

    /// Only an explicit yes counts
    fn is_yes(answer: &str) -> bool {
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn read_answer(prompt: &str) -> io::Result<String> {
        print!("{} {} ", prompt, "[y/N]".dimmed());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input)
    }
}

impl Default for TerminalConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationPort for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        match Self::read_answer(prompt) {
            Ok(answer) => Self::is_yes(&answer),
            Err(e) => {
                warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(TerminalConfirmation::is_yes("y\n"));
        assert!(TerminalConfirmation::is_yes(" YES "));
        assert!(!TerminalConfirmation::is_yes("\n"));
        assert!(!TerminalConfirmation::is_yes("n"));
        assert!(!TerminalConfirmation::is_yes("yep"));
    }
}
