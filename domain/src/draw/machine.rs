//! Draw state machine
//!
//! `Idle → Animating → Finalizing → Idle`. The machine only tracks where a
//! draw is; the caller performs the sampling and waiting at each step.

use super::schedule::DrawSchedule;
use crate::core::error::PoolError;
use std::time::Duration;

/// Where an in-flight draw currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPhase {
    /// No draw running; the pool accepts edits
    #[default]
    Idle,
    /// Cosmetic highlighting; `step` is the next step to run (0-based)
    Animating { step: u32 },
    /// Animation done; the authoritative draw is pending
    Finalizing,
}

impl DrawPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawPhase::Idle => "idle",
            DrawPhase::Animating { .. } => "animating",
            DrawPhase::Finalizing => "finalizing",
        }
    }
}

impl std::fmt::Display for DrawPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Finite-state machine for a single draw at a time
#[derive(Debug, Clone, Default)]
pub struct DrawMachine {
    schedule: DrawSchedule,
    phase: DrawPhase,
}

impl DrawMachine {
    pub fn new(schedule: DrawSchedule) -> Self {
        Self {
            schedule,
            phase: DrawPhase::Idle,
        }
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    pub fn schedule(&self) -> &DrawSchedule {
        &self.schedule
    }

    /// Replace the schedule; takes effect from the next draw
    pub fn set_schedule(&mut self, schedule: DrawSchedule) {
        self.schedule = schedule;
    }

    /// True while a draw holds the pool
    pub fn is_busy(&self) -> bool {
        self.phase != DrawPhase::Idle
    }

    /// Begin a draw over a pool of `pool_len` names.
    ///
    /// Fails without changing state if a draw is already running or the
    /// pool is empty. A zero-step schedule goes straight to `Finalizing`.
    pub fn start(&mut self, pool_len: usize) -> Result<(), PoolError> {
        if self.is_busy() {
            return Err(PoolError::DrawInProgress);
        }
        if pool_len == 0 {
            return Err(PoolError::EmptyPool);
        }
        self.phase = if self.schedule.steps == 0 {
            DrawPhase::Finalizing
        } else {
            DrawPhase::Animating { step: 0 }
        };
        Ok(())
    }

    /// Delay to wait before the next animation step, if one is due
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            DrawPhase::Animating { step } => Some(self.schedule.delay_for(step)),
            _ => None,
        }
    }

    /// Mark the current animation step as done and return its index.
    ///
    /// After the last step the machine moves to `Finalizing`. Outside
    /// `Animating` this does nothing and returns `None`.
    pub fn complete_step(&mut self) -> Option<u32> {
        let DrawPhase::Animating { step } = self.phase else {
            return None;
        };
        let next = step + 1;
        self.phase = if next >= self.schedule.steps {
            DrawPhase::Finalizing
        } else {
            DrawPhase::Animating { step: next }
        };
        Some(step)
    }

    /// Release the pool after the winner has been settled.
    ///
    /// Returns `false` (and changes nothing) unless the machine was
    /// `Finalizing`.
    pub fn finish(&mut self) -> bool {
        if self.phase != DrawPhase::Finalizing {
            return false;
        }
        self.phase = DrawPhase::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(steps: u32) -> DrawMachine {
        DrawMachine::new(DrawSchedule {
            steps,
            ..DrawSchedule::default()
        })
    }

    #[test]
    fn test_full_cycle() {
        let mut m = machine(3);
        assert!(!m.is_busy());
        m.start(5).unwrap();
        assert_eq!(m.phase(), DrawPhase::Animating { step: 0 });

        let mut completed = Vec::new();
        while m.next_delay().is_some() {
            completed.push(m.complete_step().unwrap());
        }
        assert_eq!(completed, vec![0, 1, 2]);
        assert_eq!(m.phase(), DrawPhase::Finalizing);
        assert!(m.is_busy());

        assert!(m.finish());
        assert_eq!(m.phase(), DrawPhase::Idle);
    }

    #[test]
    fn test_start_rejects_empty_pool() {
        let mut m = machine(3);
        assert_eq!(m.start(0), Err(PoolError::EmptyPool));
        assert_eq!(m.phase(), DrawPhase::Idle);
    }

    #[test]
    fn test_start_rejects_second_draw() {
        let mut m = machine(3);
        m.start(2).unwrap();
        assert_eq!(m.start(2), Err(PoolError::DrawInProgress));
        assert_eq!(m.phase(), DrawPhase::Animating { step: 0 });
    }

    #[test]
    fn test_zero_steps_skips_animation() {
        let mut m = machine(0);
        m.start(1).unwrap();
        assert_eq!(m.phase(), DrawPhase::Finalizing);
        assert_eq!(m.next_delay(), None);
    }

    #[test]
    fn test_finish_only_from_finalizing() {
        let mut m = machine(2);
        assert!(!m.finish());
        m.start(1).unwrap();
        assert!(!m.finish());
        assert!(m.is_busy());
    }

    #[test]
    fn test_delays_follow_schedule() {
        let mut m = machine(4);
        m.start(1).unwrap();
        let mut delays = Vec::new();
        while let Some(delay) = m.next_delay() {
            delays.push(delay);
            m.complete_step();
        }
        let expected: Vec<_> = m.schedule().delays().collect();
        assert_eq!(delays, expected);
    }
}
