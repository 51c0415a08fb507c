//! Animation timing for a draw

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Deceleration schedule for the highlight animation.
///
/// The delay before step `k` is `initial_delay + k * delay_increment`,
/// capped at `max_delay`, so the flicker slows down and never speeds up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSchedule {
    /// Number of highlight steps before the winner is chosen
    pub steps: u32,
    pub initial_delay: Duration,
    pub delay_increment: Duration,
    pub max_delay: Duration,
    /// Pause between announcing a removed winner and showing the shrunk pool
    pub reveal_hold: Duration,
}

impl Default for DrawSchedule {
    fn default() -> Self {
        Self {
            steps: 24,
            initial_delay: Duration::from_millis(80),
            delay_increment: Duration::from_millis(12),
            max_delay: Duration::from_millis(300),
            reveal_hold: Duration::from_millis(600),
        }
    }
}

impl DrawSchedule {
    /// Schedule with no animation: the winner is drawn immediately
    pub fn instant() -> Self {
        Self {
            steps: 0,
            initial_delay: Duration::ZERO,
            delay_increment: Duration::ZERO,
            max_delay: Duration::ZERO,
            reveal_hold: Duration::ZERO,
        }
    }

    /// Delay before the given 0-based step
    pub fn delay_for(&self, step: u32) -> Duration {
        self.initial_delay
            .saturating_add(self.delay_increment.saturating_mul(step))
            .min(self.max_delay)
    }

    /// Iterate over the delay of every step in order
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        (0..self.steps).map(|step| self.delay_for(step))
    }

    /// Wall-clock length of the whole animation
    pub fn total_duration(&self) -> Duration {
        self.delays().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_decelerates_and_caps() {
        let schedule = DrawSchedule::default();
        let delays: Vec<_> = schedule.delays().collect();
        assert_eq!(delays.len(), 24);
        assert_eq!(delays[0], Duration::from_millis(80));
        assert_eq!(delays[1], Duration::from_millis(92));
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*delays.last().unwrap(), Duration::from_millis(300));
    }

    #[test]
    fn test_cap_applies_to_first_step() {
        let schedule = DrawSchedule {
            initial_delay: Duration::from_millis(500),
            ..DrawSchedule::default()
        };
        assert_eq!(schedule.delay_for(0), Duration::from_millis(300));
    }

    #[test]
    fn test_instant_schedule() {
        let schedule = DrawSchedule::instant();
        assert_eq!(schedule.delays().count(), 0);
        assert_eq!(schedule.total_duration(), Duration::ZERO);
    }
}
