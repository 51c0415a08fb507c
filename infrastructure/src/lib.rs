//! Infrastructure layer for name-picker
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod random;
pub mod scheduler;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAnimationConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FilePickerConfig, FileReplConfig, FileStorageConfig,
};
pub use logging::JsonlEventLogger;
pub use random::SystemRandomSource;
pub use scheduler::TokioScheduler;
pub use storage::{JsonFileStore, MemoryStore};
