//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types.

mod animation;
mod logging;
mod output;
mod picker;
mod repl;
mod storage;

pub use animation::FileAnimationConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use picker::FilePickerConfig;
pub use repl::FileReplConfig;
pub use storage::FileStorageConfig;

use picker_application::PickerConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("animation.max_delay_ms ({max}) cannot be less than animation.initial_delay_ms ({initial})")]
    DelayCapBelowInitial { initial: u64, max: u64 },

    #[error("storage.path cannot be empty")]
    EmptyStoragePath,

    #[error("logging.{0} cannot be empty")]
    EmptyLogPath(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Pool behavior and persistence
    pub picker: FilePickerConfig,
    /// Reveal animation timing
    pub animation: FileAnimationConfig,
    /// Store location
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Diagnostic and event logs
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.animation.max_delay_ms < self.animation.initial_delay_ms {
            return Err(ConfigValidationError::DelayCapBelowInitial {
                initial: self.animation.initial_delay_ms,
                max: self.animation.max_delay_ms,
            });
        }
        if self
            .storage
            .path
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ConfigValidationError::EmptyStoragePath);
        }
        if self.logging.file.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyLogPath("file"));
        }
        if self
            .logging
            .event_log
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ConfigValidationError::EmptyLogPath("event_log"));
        }
        Ok(())
    }

    /// Settings the controller starts with
    pub fn to_picker_config(&self) -> PickerConfig {
        PickerConfig {
            options: self.picker.pool_options(),
            persist: self.picker.persist,
            schedule: self.animation.to_schedule(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[picker]
allow_duplicates = true
remove_after_pick = true
persist = false

[animation]
steps = 10
initial_delay_ms = 50
delay_increment_ms = 20
max_delay_ms = 250
reveal_hold_ms = 0

[storage]
path = "/tmp/picker.json"

[output]
color = false

[repl]
history_file = "~/.local/share/name-picker/history.txt"

[logging]
event_log = "/tmp/picker-events.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.picker.allow_duplicates);
        assert!(config.picker.remove_after_pick);
        assert!(!config.picker.persist);
        assert_eq!(config.animation.steps, 10);
        assert_eq!(config.storage.path.as_deref(), Some("/tmp/picker.json"));
        assert!(!config.output.color);
        assert!(config.repl.history_file.is_some());
        assert!(config.logging.file.is_none());
        assert!(config.validate().is_ok());

        let picker = config.to_picker_config();
        assert!(!picker.persist);
        assert!(picker.options.remove_after_pick);
        assert_eq!(picker.schedule.delay_for(1), Duration::from_millis(70));
        assert_eq!(picker.schedule.reveal_hold, Duration::ZERO);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[animation]
steps = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.animation.steps, 0);
        // Defaults should apply
        assert_eq!(config.animation.initial_delay_ms, 80);
        assert!(config.picker.persist);
        assert!(!config.picker.allow_duplicates);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.to_picker_config(), PickerConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_delay_cap() {
        let mut config = FileConfig::default();
        config.animation.initial_delay_ms = 400;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::DelayCapBelowInitial {
                initial: 400,
                max: 300
            })
        );
    }

    #[test]
    fn test_validate_empty_paths() {
        let mut config = FileConfig::default();
        config.storage.path = Some("  ".to_string());
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyStoragePath));

        let mut config = FileConfig::default();
        config.logging.event_log = Some(String::new());
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyLogPath("event_log"))
        );
    }
}
