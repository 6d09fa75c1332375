//! The seed pool and the permutation-step generator.
//!
//! One step advances the 32-bit position by `pos*9 + 1`, folds one pool
//! word (selected by the new position's top 7 bits), the identity word,
//! and the running counter into the mixing words, then runs five rounds
//! of the SipHash ARX network over them. Two of the post-step words,
//! XORed with the whitening words, are the step's 16 bytes of output.

use crate::constants::{
    BLOCK_LEN, POOL_INDEX_SHIFT, POOL_WORDS, POS_INC, POS_MULT, ROUNDS, STATE_SEED_LEN,
};
use crate::entropy::{EntropyError, EntropySource};
use rand_core::RngCore;

// =============================================================================
// SEED POOL
// =============================================================================

/// Ordered table of [`POOL_WORDS`] entropy words.
///
/// Filled from true randomness at startup and overwritten wholesale on
/// every reseed; read-only within a permutation step. Owned by its
/// generator so independent instances can coexist and be tested in
/// isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPool {
    words: [u64; POOL_WORDS],
}

impl SeedPool {
    /// Build a pool from explicit words (deterministic construction).
    #[must_use]
    pub const fn from_words(words: [u64; POOL_WORDS]) -> Self {
        Self { words }
    }

    /// Draw a fully populated pool from the entropy source.
    ///
    /// # Errors
    /// Returns [`EntropyError`] if the source fails; the pool is not
    /// usable in that case.
    pub fn from_entropy(source: &mut impl EntropySource) -> Result<Self, EntropyError> {
        let mut pool = Self {
            words: [0; POOL_WORDS],
        };
        pool.refill(source)?;
        Ok(pool)
    }

    /// Overwrite all [`POOL_WORDS`] words with fresh entropy.
    ///
    /// # Errors
    /// Returns [`EntropyError`] if the source fails. The pool contents
    /// are unspecified after a failed refill; callers abort.
    pub fn refill(&mut self, source: &mut impl EntropySource) -> Result<(), EntropyError> {
        let mut raw = [0u8; POOL_WORDS * 8];
        source.fill(&mut raw)?;
        for (word, chunk) in self.words.iter_mut().zip(raw.chunks_exact(8)) {
            let mut le = [0u8; 8];
            le.copy_from_slice(chunk);
            *word = u64::from_le_bytes(le);
        }
        Ok(())
    }

    #[inline]
    fn word(&self, index: usize) -> u64 {
        self.words[index]
    }
}

// =============================================================================
// ROUND FUNCTION
// =============================================================================

/// One round of the ARX network: wraparound adds, 64-bit rotations, XORs.
#[inline]
const fn arx_round(mut v0: u64, mut v1: u64, mut v2: u64, mut v3: u64) -> (u64, u64, u64, u64) {
    v0 = v0.wrapping_add(v1);
    v1 = v1.rotate_left(13);
    v1 ^= v0;
    v0 = v0.rotate_left(32);

    v2 = v2.wrapping_add(v3);
    v3 = v3.rotate_left(16);
    v3 ^= v2;

    v0 = v0.wrapping_add(v3);
    v3 = v3.rotate_left(21);
    v3 ^= v0;

    v2 = v2.wrapping_add(v1);
    v1 = v1.rotate_left(17);
    v1 ^= v2;
    v2 = v2.rotate_left(32);

    (v0, v1, v2, v3)
}

// =============================================================================
// GENERATOR
// =============================================================================

/// The fixed-state byte-stream generator.
///
/// Holds five mixing words (`v4` is a documented inert field: populated
/// at initialization, never read or written by a step), an identity
/// word, a running counter, two output-whitening words, the 32-bit
/// position, and its own seed pool. Initialized once from true
/// randomness; mutated in place by every step; never copied or shared.
#[derive(Debug, Clone)]
pub struct Generator {
    v0: u64,
    v1: u64,
    v2: u64,
    v3: u64,
    // Inert fifth mixing word, carried but untouched by `step`.
    v4: u64,
    id: u64,
    cnt: u64,
    w0: u64,
    w1: u64,
    pos: u32,
    pool: SeedPool,
}

impl Generator {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Deterministic construction from explicit state words.
    ///
    /// `mixing` populates `v0..v4` (the fifth word is inert),
    /// `whitening` populates the two output-whitening words.
    #[must_use]
    pub const fn from_parts(
        mixing: [u64; 5],
        id: u64,
        cnt: u64,
        whitening: [u64; 2],
        pos: u32,
        pool: SeedPool,
    ) -> Self {
        Self {
            v0: mixing[0],
            v1: mixing[1],
            v2: mixing[2],
            v3: mixing[3],
            v4: mixing[4],
            id,
            cnt,
            w0: whitening[0],
            w1: whitening[1],
            pos,
            pool,
        }
    }

    /// Initialize pool and state from the entropy source.
    ///
    /// Draws exactly twice: once for the seed pool, once for the state.
    ///
    /// # Errors
    /// Returns [`EntropyError`] if the source fails. Callers must treat
    /// this as fatal rather than run with degraded entropy.
    pub fn from_entropy(source: &mut impl EntropySource) -> Result<Self, EntropyError> {
        let pool = SeedPool::from_entropy(source)?;
        let mut raw = [0u8; STATE_SEED_LEN];
        source.fill(&mut raw)?;

        let word = |index: usize| {
            let mut le = [0u8; 8];
            le.copy_from_slice(&raw[index * 8..index * 8 + 8]);
            u64::from_le_bytes(le)
        };
        let mut last = [0u8; 4];
        last.copy_from_slice(&raw[9 * 8..]);

        Ok(Self::from_parts(
            [word(0), word(1), word(2), word(3), word(4)],
            word(5),
            word(6),
            [word(7), word(8)],
            u32::from_le_bytes(last),
            pool,
        ))
    }

    // =========================================================================
    // PERMUTATION STEP
    // =========================================================================

    /// Advance the state by exactly one step.
    ///
    /// The position is advanced before it is used: the new position
    /// selects this step's pool entry and is the value accumulated into
    /// the running counter. Cannot fail; the sole effect is the in-place
    /// state mutation.
    #[allow(clippy::cast_possible_truncation)]
    pub fn step(&mut self) {
        self.pos = self.pos.wrapping_mul(POS_MULT).wrapping_add(POS_INC);

        let mut v0 = self.v0 ^ self.pool.word((self.pos >> POOL_INDEX_SHIFT) as usize);
        let mut v1 = self.v1 ^ self.id;
        let mut v2 = self.v2;
        let mut v3 = self.v3 ^ self.cnt;
        self.cnt = self.cnt.wrapping_add(u64::from(self.pos));

        for _ in 0..ROUNDS {
            (v0, v1, v2, v3) = arx_round(v0, v1, v2, v3);
        }

        self.v0 = v0;
        self.v1 = v1;
        self.v2 = v2;
        self.v3 = v3;
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// The current step's 16 output bytes: `v1 ^ w0` then `v3 ^ w1`,
    /// each serialized little-endian so the stream is host-independent.
    #[must_use]
    pub fn output(&self) -> [u8; BLOCK_LEN] {
        let mut out = [0u8; BLOCK_LEN];
        out[..8].copy_from_slice(&(self.v1 ^ self.w0).to_le_bytes());
        out[8..].copy_from_slice(&(self.v3 ^ self.w1).to_le_bytes());
        out
    }

    /// Advance one step and return its output block.
    pub fn next_block(&mut self) -> [u8; BLOCK_LEN] {
        self.step();
        self.output()
    }

    /// Fill `dest` with generator output, one step per 16 bytes.
    ///
    /// A trailing partial block costs a full step and discards the
    /// unused tail bytes.
    pub fn fill(&mut self, dest: &mut [u8]) {
        let mut blocks = dest.chunks_exact_mut(BLOCK_LEN);
        for block in &mut blocks {
            self.step();
            block.copy_from_slice(&self.output());
        }
        let tail = blocks.into_remainder();
        if !tail.is_empty() {
            let block = self.next_block();
            tail.copy_from_slice(&block[..tail.len()]);
        }
    }

    // =========================================================================
    // RESEEDING & INTROSPECTION
    // =========================================================================

    /// Replace the seed pool wholesale with fresh entropy.
    ///
    /// The mixing words, identity, counter, whitening words, and
    /// position are never refreshed after startup — only the pool.
    ///
    /// # Errors
    /// Returns [`EntropyError`] if the source fails; fatal.
    pub fn reseed(&mut self, source: &mut impl EntropySource) -> Result<(), EntropyError> {
        self.pool.refill(source)
    }

    /// The 32-bit position after the most recent step.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.pos
    }

    /// The running counter after the most recent step.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.cnt
    }
}

// =============================================================================
// RAND_CORE INTEGRATION
// =============================================================================

impl RngCore for Generator {
    /// One full step per call; returns the first output word (`v1 ^ w0`).
    fn next_u64(&mut self) -> u64 {
        self.step();
        self.v1 ^ self.w0
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }
}

// =============================================================================
// TESTS
// =============================================================================
