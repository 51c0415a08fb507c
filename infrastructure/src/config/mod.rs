//! Configuration file loading for name-picker
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./name-picker.toml` or `./.name-picker.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/name-picker/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnimationConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FilePickerConfig, FileReplConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
