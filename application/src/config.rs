//! Application-level configuration.
//!
//! Resolved settings the controller starts with, after config files and
//! command-line flags have been merged.

use picker_domain::{DrawSchedule, PoolOptions};

/// Picker behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    /// Duplicate and removal rules for the pool
    pub options: PoolOptions,
    /// Mirror state into the key-value store
    pub persist: bool,
    /// Reveal animation timing
    pub schedule: DrawSchedule,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            options: PoolOptions::default(),
            persist: true,
            schedule: DrawSchedule::default(),
        }
    }
}

impl PickerConfig {
    pub fn with_options(mut self, options: PoolOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn with_schedule(mut self, schedule: DrawSchedule) -> Self {
        self.schedule = schedule;
        self
    }
}
