//! Tokio-backed scheduler

use async_trait::async_trait;
use picker_application::ports::scheduler::Scheduler;
use std::time::Duration;

/// Scheduler that sleeps on the tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
