//! Reveal animation timing from TOML (`[animation]` section)

use picker_domain::DrawSchedule;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw animation configuration from TOML, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnimationConfig {
    /// Highlight steps before the winner (0 disables the animation)
    pub steps: u32,
    pub initial_delay_ms: u64,
    pub delay_increment_ms: u64,
    pub max_delay_ms: u64,
    /// Pause before a removed winner disappears from the list
    pub reveal_hold_ms: u64,
}

impl Default for FileAnimationConfig {
    fn default() -> Self {
        let schedule = DrawSchedule::default();
        Self {
            steps: schedule.steps,
            initial_delay_ms: schedule.initial_delay.as_millis() as u64,
            delay_increment_ms: schedule.delay_increment.as_millis() as u64,
            max_delay_ms: schedule.max_delay.as_millis() as u64,
            reveal_hold_ms: schedule.reveal_hold.as_millis() as u64,
        }
    }
}

impl FileAnimationConfig {
    pub fn to_schedule(&self) -> DrawSchedule {
        DrawSchedule {
            steps: self.steps,
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            delay_increment: Duration::from_millis(self.delay_increment_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
            reveal_hold: Duration::from_millis(self.reveal_hold_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_schedule() {
        assert_eq!(
            FileAnimationConfig::default().to_schedule(),
            DrawSchedule::default()
        );
    }
}
