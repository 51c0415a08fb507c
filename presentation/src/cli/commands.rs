//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for name-picker
#[derive(Parser, Debug)]
#[command(name = "name-picker")]
#[command(author, version, about = "Keep a pool of names and draw one at random")]
#[command(long_about = r#"
Name Picker keeps a pool of names and draws a random winner with a short
reveal animation. The pool and an optional question are saved between runs.

Type a name to add it, or use slash commands such as /batch, /draw and
/remove. Run /help inside the session for the full list.

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. ./name-picker.toml         Project-level config
3. ~/.config/name-picker/config.toml   Global config

Example:
  name-picker
  name-picker --batch "Alice, Bob, Carol" --draw
  name-picker --no-persist --remove-after-pick
"#)]
pub struct Cli {
    /// Save the pool between sessions (overrides config)
    #[arg(long, overrides_with = "no_persist")]
    pub persist: bool,

    /// Do not save the pool between sessions
    #[arg(long, overrides_with = "persist")]
    pub no_persist: bool,

    /// Allow the same name more than once
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Remove each winner from the pool
    #[arg(long)]
    pub remove_after_pick: bool,

    /// Path to the store file
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Add 3-10 comma separated names before starting
    #[arg(short, long, value_name = "TEXT")]
    pub batch: Option<String>,

    /// Draw one winner and exit
    #[arg(short, long)]
    pub draw: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Reveal the winner without the animation
    #[arg(long)]
    pub no_animation: bool,

    /// Append picker events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome screen and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Persistence requested on the command line, if any
    pub fn persist_override(&self) -> Option<bool> {
        if self.no_persist {
            Some(false)
        } else if self.persist {
            Some(true)
        } else {
            None
        }
    }
}
