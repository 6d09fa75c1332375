//! # Firehose Stream Generator
//!
//! Pumps the bespoke permutation generator into standard output as fast
//! as possible, for throughput comparison against `chacha-stream` (pipe
//! into `pv > /dev/null` or a PractRand reader). Exits cleanly when the
//! consumer hangs up; prints a throughput summary to stderr.

use anyhow::Result;
use firehose::{OsEntropy, Streamer};
use std::io;

fn main() -> Result<()> {
    let stdout = io::stdout();
    let stats = Streamer::new(stdout.lock(), OsEntropy)?.run()?;

    #[allow(clippy::cast_precision_loss)]
    let mib = stats.bytes as f64 / (1024.0 * 1024.0);
    let secs = stats.elapsed.as_secs_f64();
    eprintln!(
        "{mib:.0} MiB in {secs:.2}s ({:.0} MiB/s), {} reseeds",
        mib / secs.max(f64::EPSILON),
        stats.reseeds
    );
    Ok(())
}
