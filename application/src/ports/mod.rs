//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod confirmation;
pub mod event_logger;
pub mod key_value_store;
pub mod random_source;
pub mod scheduler;
pub mod ui_event;
