//! Application layer for name-picker
//!
//! This crate contains the controller, command parsing, persistence and
//! port definitions. It depends only on the domain layer.

pub mod commands;
pub mod config;
pub mod persistence;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use commands::{CommandParseError, PickerCommand};
pub use config::PickerConfig;
pub use persistence::{NAMES_KEY, PickerStorage, QUESTION_KEY};
pub use ports::{
    confirmation::{AutoConfirm, AutoDecline, ConfirmationPort},
    event_logger::{EventLogger, NoEventLogger, PickerEvent},
    key_value_store::{KeyValueStore, StoreError},
    random_source::RandomSource,
    scheduler::{NoDelay, Scheduler},
    ui_event::{
        HighlightEvent, PoolSnapshot, SettingsSnapshot, StatusKind, UiEvent, WelcomeInfo,
        WinnerEvent,
    },
};
pub use use_cases::picker_controller::{CommandAction, PickerController};
