//! Random source port

/// Source of uniformly distributed indices
///
/// Production adapters prefer a cryptographically strong generator and fall
/// back to a seeded one when it is unavailable.
pub trait RandomSource: Send + Sync {
    /// Return an integer in `[0, n)`. `n` must be non-zero.
    fn uniform_int(&self, n: usize) -> usize;
}
