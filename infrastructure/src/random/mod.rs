//! Random source adapter
//!
//! Draws come from the operating system CSPRNG. If the OS source ever fails,
//! the adapter switches to a seeded [`SmallRng`] for the rest of the process.

use picker_application::ports::random_source::RandomSource;
use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, SeedableRng, TryRngCore};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Uniform index source backed by the OS, with a non-cryptographic fallback
pub struct SystemRandomSource {
    fallback: Mutex<Option<SmallRng>>,
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self {
            fallback: Mutex::new(None),
        }
    }

    /// Map a 64-bit sample onto `[0, n)`.
    ///
    /// Plain modulo. The bias is below `n / 2^64`, far too small to matter
    /// for pools of a few dozen names.
    fn reduce(sample: u64, n: usize) -> usize {
        (sample % n as u64) as usize
    }

    fn fallback_int(&self, n: usize) -> usize {
        let mut guard = match self.fallback.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let rng = guard.get_or_insert_with(|| {
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default();
            SmallRng::seed_from_u64(seed ^ u64::from(std::process::id()))
        });
        rng.random_range(0..n)
    }
}

impl RandomSource for SystemRandomSource {
    fn uniform_int(&self, n: usize) -> usize {
        debug_assert!(n > 0, "uniform_int requires a non-empty range");
        if n <= 1 {
            return 0;
        }
        match OsRng.try_next_u64() {
            Ok(sample) => Self::reduce(sample, n),
            Err(e) => {
                warn!("OS random source failed, using fallback generator: {}", e);
                self.fallback_int(n)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chi-square critical value for 4 degrees of freedom at p = 0.001
    const CHI_SQUARE_4_DOF_999: f64 = 18.467;

    #[test]
    fn test_values_in_range() {
        let source = SystemRandomSource::new();
        for n in 1..20 {
            for _ in 0..50 {
                assert!(source.uniform_int(n) < n);
            }
        }
    }

    #[test]
    fn test_distribution_is_uniform() {
        let source = SystemRandomSource::new();
        let n = 5;
        let draws = 10_000;
        let mut counts = [0usize; 5];
        for _ in 0..draws {
            counts[source.uniform_int(n)] += 1;
        }

        let expected = draws as f64 / n as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(
            chi_square < CHI_SQUARE_4_DOF_999,
            "chi-square {chi_square} too large for counts {counts:?}"
        );
    }

    #[tokio::test]
    async fn test_draws_through_controller_are_uniform() {
        use crate::storage::MemoryStore;
        use picker_application::{NoDelay, PickerConfig, PickerController};
        use picker_domain::DrawSchedule;
        use std::sync::Arc;
        use tokio::sync::mpsc;

        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut controller = PickerController::new(
            PickerConfig::default()
                .with_persist(false)
                .with_schedule(DrawSchedule::instant()),
            Arc::new(MemoryStore::new()),
            Arc::new(SystemRandomSource::new()),
            Arc::new(NoDelay),
            tx,
        );
        controller.add_batch("Ann,Ben,Cy,Dee,Eve").unwrap();

        let draws = 10_000;
        let mut counts = [0usize; 5];
        for _ in 0..draws {
            let outcome = controller.draw().await.unwrap();
            counts[outcome.index] += 1;
        }

        let expected = draws as f64 / 5.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        assert!(chi_square < CHI_SQUARE_4_DOF_999, "counts {counts:?}");
    }

    #[test]
    fn test_fallback_in_range() {
        let source = SystemRandomSource::new();
        for _ in 0..100 {
            assert!(source.fallback_int(7) < 7);
        }
    }
}
