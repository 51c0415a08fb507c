//! Scheduler port
//!
//! The only suspension points of a draw are the pauses between animation
//! steps. Routing them through this port lets tests run a full draw without
//! real time passing.

use async_trait::async_trait;
use std::time::Duration;

/// Source of timed pauses
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Suspend for `duration`
    async fn delay(&self, duration: Duration);
}

/// Scheduler that never waits
pub struct NoDelay;

#[async_trait]
impl Scheduler for NoDelay {
    async fn delay(&self, _duration: Duration) {}
}
