//! Presentation-level configuration
//!
//! Configuration for output rendering and REPL behavior.

use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show the reveal spinner during a draw
    pub animate: bool,
    /// Skip the welcome screen and informational output
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            animate: true,
            quiet: false,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplConfig {
    /// Path to history file; `None` uses the data directory
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    /// History file location, falling back to `$XDG_DATA_HOME/name-picker/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("name-picker").join("history.txt")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_file_wins() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/picker-history.txt")),
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/picker-history.txt"))
        );
    }

    #[test]
    fn test_output_defaults() {
        let config = OutputConfig::default();
        assert!(config.color);
        assert!(config.animate);
        assert!(!config.quiet);
    }
}
