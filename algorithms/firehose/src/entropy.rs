//! True-randomness plumbing.
//!
//! The generator consumes unpredictable bytes at exactly three points:
//! seed pool initialization, state initialization, and each reseed tick.
//! A failing source is a correctness-critical fault — running on stale or
//! uninitialized entropy silently voids the only safety property the
//! generator has — so every failure is surfaced as a hard error and never
//! retried or downgraded.

use core::fmt;
use std::error;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Error for an unavailable or failing true-randomness source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntropyError {
    detail: String,
}

impl EntropyError {
    /// Create a new `EntropyError` describing the source failure.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entropy source unavailable: {}", self.detail)
    }
}

impl error::Error for EntropyError {}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Provider of unpredictable bytes.
///
/// Modeled as a trait so generators can be seeded and reseeded from a
/// scripted source in tests; production code uses [`OsEntropy`].
pub trait EntropySource {
    /// Fill `dest` entirely with fresh entropy.
    ///
    /// # Errors
    /// Returns [`EntropyError`] if the source cannot satisfy the request.
    /// Callers must treat this as fatal.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Operating-system randomness via the `getrandom` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|e| EntropyError::new(e.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
