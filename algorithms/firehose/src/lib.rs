//! # Firehose
//!
//! A fixed-state, permutation-based byte-stream generator with periodic
//! partial reseeding, built for raw throughput measurement.
//!
//! Firehose is NOT a cryptographically secure generator and claims no
//! keystream-indistinguishability or key-recovery resistance. It produces
//! deterministic, seed-dependent bytes as fast as possible: 16 bytes per
//! step of a five-round ARX permutation over four 64-bit words, with one
//! word per step drawn from a 128-entry entropy pool that is refreshed
//! wholesale from the operating system every 100 ms of streaming.
//!
//! # Usage
//! ```rust
//! use firehose::{Generator, SeedPool};
//!
//! // Deterministic construction (tests, reproducible runs).
//! let pool = SeedPool::from_words([7; firehose::POOL_WORDS]);
//! let mut generator = Generator::from_parts([1, 2, 3, 4, 5], 6, 7, [8, 9], 10, pool);
//! let block = generator.next_block();
//! assert_eq!(block.len(), 16);
//!
//! // OS-seeded construction (benchmarks).
//! use firehose::{EntropySource, OsEntropy};
//! let mut generator = Generator::from_entropy(&mut OsEntropy)?;
//! let mut buf = [0u8; 64];
//! generator.fill(&mut buf);
//! # Ok::<(), firehose::EntropyError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod constants;
mod entropy;
mod generator;
mod stream;

// =============================================================================
// EXPORTS
// =============================================================================

pub use rand_core;

pub use constants::{BLOCK_LEN, OUT_BUF_LEN, POOL_WORDS, RESEED_INTERVAL};
pub use entropy::{EntropyError, EntropySource, OsEntropy};
pub use generator::{Generator, SeedPool};
pub use stream::{StreamStats, Streamer};
