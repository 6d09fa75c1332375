//! The stream loop: fill, flush, reseed on a wall-clock cadence.
//!
//! Single-threaded and fully synchronous. The sink is the only external
//! actor; its write failure is the one and only termination trigger and
//! is not an error — it is how a throughput run ordinarily ends (the
//! consumer hangs up). An entropy failure during a reseed, by contrast,
//! is fatal and aborts the run.

use crate::constants::{BLOCK_LEN, OUT_BUF_LEN, RESEED_INTERVAL};
use crate::entropy::{EntropyError, EntropySource};
use crate::generator::Generator;
use std::io::Write;
use std::time::{Duration, Instant};

// =============================================================================
// RUN STATISTICS
// =============================================================================

/// Counters accumulated by [`Streamer::run`] until the sink rejects a
/// write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Flush attempts, including the final failed one.
    pub flushes: u64,
    /// Permutation steps performed (`OUT_BUF_LEN / 16` per buffer fill).
    pub steps: u64,
    /// Bytes accepted by the sink.
    pub bytes: u64,
    /// Seed pool refreshes performed.
    pub reseeds: u64,
    /// Wall-clock time from loop start to termination.
    pub elapsed: Duration,
}

// =============================================================================
// STREAM LOOP
// =============================================================================

/// Drives a [`Generator`] into a byte sink as fast as possible.
///
/// Repeatedly fills a fixed 1 MiB buffer (one permutation step per 16
/// bytes), flushes it, and refreshes the seed pool whenever more than the
/// reseed interval has elapsed since the previous refresh. The elapsed
/// check runs after each full-buffer flush, so the cadence is advisory
/// and best-effort, never a timer interrupt.
pub struct Streamer<W, E> {
    generator: Generator,
    sink: W,
    entropy: E,
    reseed_interval: Duration,
    buffer: Box<[u8]>,
}

impl<W: Write, E: EntropySource> Streamer<W, E> {
    /// Initialize generator state and seed pool from `entropy`, then
    /// bind the loop to `sink`.
    ///
    /// # Errors
    /// Returns [`EntropyError`] if the source fails during
    /// initialization; fatal.
    pub fn new(sink: W, mut entropy: E) -> Result<Self, EntropyError> {
        let generator = Generator::from_entropy(&mut entropy)?;
        Ok(Self::with_generator(generator, sink, entropy))
    }

    /// Bind an already-initialized generator to a sink (deterministic
    /// construction for tests and reproducible runs).
    #[must_use]
    pub fn with_generator(generator: Generator, sink: W, entropy: E) -> Self {
        Self {
            generator,
            sink,
            entropy,
            reseed_interval: RESEED_INTERVAL,
            buffer: vec![0u8; OUT_BUF_LEN].into_boxed_slice(),
        }
    }

    /// Override the reseed cadence (the default is 100 ms). Tests pass
    /// [`Duration::ZERO`] to force a refresh after every flush.
    #[must_use]
    pub fn with_reseed_interval(mut self, interval: Duration) -> Self {
        self.reseed_interval = interval;
        self
    }

    /// Run until the sink rejects a write.
    ///
    /// # Errors
    /// Returns [`EntropyError`] only if a reseed draw fails; a sink
    /// failure terminates the loop cleanly with `Ok(stats)` and no
    /// record of why the write failed.
    pub fn run(mut self) -> Result<StreamStats, EntropyError> {
        let started = Instant::now();
        let mut last_reseed = started;
        let mut stats = StreamStats::default();

        loop {
            self.generator.fill(&mut self.buffer);
            stats.steps += (OUT_BUF_LEN / BLOCK_LEN) as u64;

            stats.flushes += 1;
            if self.sink.write_all(&self.buffer).is_err() {
                break;
            }
            stats.bytes += OUT_BUF_LEN as u64;

            if last_reseed.elapsed() > self.reseed_interval {
                self.generator.reseed(&mut self.entropy)?;
                last_reseed = Instant::now();
                stats.reseeds += 1;
            }
        }

        stats.elapsed = started.elapsed();
        Ok(stats)
    }
}
