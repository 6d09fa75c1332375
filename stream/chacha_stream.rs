//! # ChaCha20 Stream Generator
//!
//! The comparison half of the benchmark pair: a thin wrapper over the
//! ChaCha20 stream cipher (8-byte-nonce "legacy" variant, as libsodium's
//! `crypto_stream_chacha20`) writing 1 MiB of fresh keystream per nonce
//! to standard output until the consumer hangs up.

use anyhow::Result;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::ChaCha20Legacy;
use firehose::{EntropySource, OsEntropy, OUT_BUF_LEN};
use std::io::{self, Write};

fn main() -> Result<()> {
    let mut key = [0u8; 32];
    OsEntropy.fill(&mut key)?;

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    let mut buffer = vec![0u8; OUT_BUF_LEN];
    let mut nonce: u64 = 0;

    loop {
        // Keystream for this nonce: encrypt an all-zero buffer.
        buffer.fill(0);
        let mut cipher = ChaCha20Legacy::new(&key.into(), &nonce.to_le_bytes().into());
        cipher.apply_keystream(&mut buffer);

        if sink.write_all(&buffer).is_err() {
            break;
        }
        nonce = nonce.wrapping_add(1);
    }

    Ok(())
}
