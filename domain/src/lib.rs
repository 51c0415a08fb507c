//! Domain layer for name-picker
//!
//! This crate contains the core rules and entities.
//! It has no dependencies on storage, randomness or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Pool
//!
//! The ordered list of candidate names. Names are trimmed, never empty, and
//! unique unless duplicates are explicitly allowed.
//!
//! ## Draw
//!
//! Picking one name at random. A draw runs through a small state machine
//! (`Idle → Animating → Finalizing → Idle`) that locks the pool while the
//! reveal animation plays.
//!
//! ## Question
//!
//! An optional note describing what the draw decides.

pub mod core;
pub mod draw;
pub mod note;
pub mod pool;

// Re-export commonly used types
pub use crate::core::error::{PoolError, ValidationError};
pub use draw::{
    machine::{DrawMachine, DrawPhase},
    schedule::DrawSchedule,
};
pub use note::{NO_QUESTION_PLACEHOLDER, QuestionNote};
pub use pool::{
    batch::{BATCH_MAX, BATCH_MIN, parse_batch},
    entities::{DrawOutcome, NamePool, PoolOptions},
};
