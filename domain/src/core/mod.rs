//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`]: rejected user input
//! - [`error::PoolError`]: pool and draw failures

pub mod error;
