//! Firehose Generator Constants
//!
//! Pool geometry, round count, and stream-loop cadence. The pool index is
//! always the top 7 bits of the 32-bit position (`pos >> 25`), so the pool
//! size and the index shift must move together.

use core::time::Duration;

// =============================================================================
// SEED POOL
// =============================================================================

/// Number of 64-bit words in the seed pool (1024 bytes).
pub const POOL_WORDS: usize = 128;

/// Right shift extracting the pool index from the 32-bit position.
/// 32 - 7 bits, since the pool holds 2^7 entries.
pub const POOL_INDEX_SHIFT: u32 = 25;

// =============================================================================
// PERMUTATION
// =============================================================================

/// ARX rounds per permutation step.
pub const ROUNDS: usize = 5;

/// Multiplier of the position recurrence `pos = pos*9 + 1` (mod 2^32).
pub const POS_MULT: u32 = 9;

/// Increment of the position recurrence.
pub const POS_INC: u32 = 1;

// =============================================================================
// OUTPUT
// =============================================================================

/// Output bytes produced per permutation step (two 64-bit words).
pub const BLOCK_LEN: usize = 16;

/// Capacity of the stream loop's output buffer (the unit of flush).
pub const OUT_BUF_LEN: usize = 1024 * 1024;

// Every buffer fill must be a whole number of steps.
const _: () = assert!(OUT_BUF_LEN % BLOCK_LEN == 0);

// =============================================================================
// RESEEDING
// =============================================================================

/// Wall-clock interval between wholesale seed pool refreshes, sampled
/// after each full-buffer flush rather than on a timer interrupt.
pub const RESEED_INTERVAL: Duration = Duration::from_millis(100);

/// Bytes drawn from the entropy source to initialize the generator state:
/// nine 64-bit words followed by the 32-bit position.
pub const STATE_SEED_LEN: usize = 9 * 8 + 4;
