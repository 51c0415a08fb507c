//! Console formatting for picker state

use colored::Colorize;
use picker_application::{PoolSnapshot, SettingsSnapshot, StatusKind, WelcomeInfo, WinnerEvent};
use picker_domain::NO_QUESTION_PLACEHOLDER;

/// Formats pool, settings and draw results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Numbered pool listing, 1-based to match `/remove`
    pub fn pool(snapshot: &PoolSnapshot) -> String {
        let mut output = Self::section_header(&format!("Names ({})", snapshot.count));

        if snapshot.names.is_empty() {
            output.push_str(&format!("{}\n", "  (empty) add a name to get started".dimmed()));
            return output;
        }

        let width = snapshot.count.to_string().len();
        for (i, name) in snapshot.names.iter().enumerate() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:>width$}.", i + 1, width = width).dimmed(),
                name
            ));
        }
        output
    }

    /// Current switches
    pub fn settings(snapshot: &SettingsSnapshot) -> String {
        let mut output = Self::section_header("Options");
        output.push_str(&format!(
            "  {:<20} {}\n",
            "Save names:",
            Self::on_off(snapshot.persist)
        ));
        output.push_str(&format!(
            "  {:<20} {}\n",
            "Allow duplicates:",
            Self::on_off(snapshot.allow_duplicates)
        ));
        output.push_str(&format!(
            "  {:<20} {}\n",
            "Remove after pick:",
            Self::on_off(snapshot.remove_after_pick)
        ));
        output.push_str(&format!(
            "  {:<20} {}\n",
            "Animation steps:", snapshot.animation_steps
        ));
        output
    }

    /// Command reference
    pub fn help() -> String {
        let mut output = Self::section_header("Commands");
        let rows = [
            ("<name>", "Add a name to the pool"),
            ("/add <name>", "Add a name (also for names starting with /)"),
            ("/batch <a, b, c>", "Add 3-10 names separated by commas"),
            ("/remove <n>", "Remove the name at position n"),
            ("/clear", "Remove every name (asks first)"),
            ("/list", "Show the pool"),
            ("/draw", "Pick a random winner"),
            ("/question <text>", "Set the question shown with the draw"),
            ("/unquestion", "Clear the question"),
            ("/persist [on|off]", "Save names between sessions"),
            ("/dups [on|off]", "Allow the same name more than once"),
            ("/autoremove [on|off]", "Remove winners from the pool"),
            ("/options", "Show current options"),
            ("/help", "Show this help"),
            ("/quit", "Exit"),
        ];
        for (command, description) in rows {
            output.push_str(&format!("  {:<22} {}\n", command.cyan(), description));
        }
        output
    }

    /// Startup screen
    pub fn welcome(info: &WelcomeInfo) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Name Picker"));
        output.push('\n');
        let is_set = info.question != NO_QUESTION_PLACEHOLDER;
        output.push_str(&Self::question(&info.question, is_set));
        output.push_str(&Self::pool(&info.pool));
        output.push_str(&format!(
            "\n{} {} to draw, {} for all commands\n",
            "Type".dimmed(),
            "/draw".cyan(),
            "/help".cyan()
        ));
        output
    }

    /// Question line
    pub fn question(display: &str, is_set: bool) -> String {
        if is_set {
            format!("{} {}\n", "Question:".cyan().bold(), display)
        } else {
            format!("{} {}\n", "Question:".cyan().bold(), display.dimmed())
        }
    }

    /// Winner announcement
    pub fn winner(event: &WinnerEvent) -> String {
        let mut output = format!(
            "\n{} {}\n",
            "Winner:".green().bold(),
            event.name.bold()
        );
        if event.removed {
            output.push_str(&format!("{}\n", "(removed from the pool)".dimmed()));
        }
        output
    }

    /// Status line
    pub fn status(message: &str, kind: StatusKind) -> String {
        match kind {
            StatusKind::Info => format!("{}", message.yellow()),
            StatusKind::Error => format!("{} {}", "Error:".red().bold(), message),
        }
    }

    fn on_off(enabled: bool) -> String {
        if enabled {
            "on".green().to_string()
        } else {
            "off".dimmed().to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(44);
        format!("{}\n{:^44}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn settings() -> SettingsSnapshot {
        SettingsSnapshot {
            persist: true,
            allow_duplicates: false,
            remove_after_pick: true,
            animation_steps: 24,
        }
    }

    #[test]
    fn test_pool_is_numbered_from_one() {
        plain();
        let names = vec!["Alice".to_string(), "Bob".to_string()];
        let output = ConsoleFormatter::pool(&PoolSnapshot::new(&names));

        assert!(output.contains("Names (2)"));
        assert!(output.contains("1. Alice"));
        assert!(output.contains("2. Bob"));
    }

    #[test]
    fn test_pool_pads_numbers_for_ten_or_more() {
        plain();
        let names: Vec<String> = (1..=10).map(|i| format!("N{i}")).collect();
        let output = ConsoleFormatter::pool(&PoolSnapshot::new(&names));

        assert!(output.contains(" 1. N1\n"));
        assert!(output.contains("10. N10\n"));
    }

    #[test]
    fn test_empty_pool_hint() {
        plain();
        let output = ConsoleFormatter::pool(&PoolSnapshot::new(&[]));
        assert!(output.contains("Names (0)"));
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_settings_lists_every_switch() {
        plain();
        let output = ConsoleFormatter::settings(&settings());
        assert!(output.contains("Save names:"));
        assert!(output.contains("Allow duplicates:    off"));
        assert!(output.contains("Remove after pick:   on"));
        assert!(output.contains("Animation steps:     24"));
    }

    #[test]
    fn test_winner_mentions_removal() {
        plain();
        let kept = ConsoleFormatter::winner(&WinnerEvent {
            name: "Bob".to_string(),
            index: 1,
            removed: false,
        });
        assert!(kept.contains("Winner: Bob"));
        assert!(!kept.contains("removed"));

        let removed = ConsoleFormatter::winner(&WinnerEvent {
            name: "Bob".to_string(),
            index: 1,
            removed: true,
        });
        assert!(removed.contains("removed from the pool"));
    }

    #[test]
    fn test_welcome_shows_question_and_pool() {
        plain();
        let info = WelcomeInfo {
            pool: PoolSnapshot::new(&["Alice".to_string()]),
            question: "Who brings snacks?".to_string(),
            settings: settings(),
        };
        let output = ConsoleFormatter::welcome(&info);
        assert!(output.contains("Name Picker"));
        assert!(output.contains("Question: Who brings snacks?"));
        assert!(output.contains("1. Alice"));
    }

    #[test]
    fn test_status_kinds() {
        plain();
        assert_eq!(
            ConsoleFormatter::status("Clear cancelled.", StatusKind::Info),
            "Clear cancelled."
        );
        assert_eq!(
            ConsoleFormatter::status("Enter a non-empty name.", StatusKind::Error),
            "Error: Enter a non-empty name."
        );
    }

    #[test]
    fn test_help_covers_draw_and_quit() {
        plain();
        let output = ConsoleFormatter::help();
        assert!(output.contains("/draw"));
        assert!(output.contains("/batch"));
        assert!(output.contains("/quit"));
    }
}
