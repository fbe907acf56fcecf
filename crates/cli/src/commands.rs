//! The demo drivers behind each subcommand
//!
//! Each driver calls the public engine API, times whole calls through
//! [`crate::timing`], and returns a report for the binary to print. Keys,
//! state words and keystream are never logged.

use std::time::Duration;

use anyhow::{bail, Context};
use streamcore_algorithms::error::to_core_result;
use streamcore_algorithms::stream::chacha::chacha20::{self, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};
use streamcore_algorithms::stream::salsa::salsa20;
use streamcore_algorithms::Rc4;
use streamcore_api::validate;

use crate::timing::{self, TimingStats};

/// Key 00 01 .. 1f
pub const DEFAULT_CHACHA20_KEY: &str =
    "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

/// Nonce of the RFC 8439 encryption example
pub const DEFAULT_CHACHA20_NONCE: &str = "000000000000004a00000000";

/// Decode a hex string into a fixed-size array
pub fn parse_hex_array<const N: usize>(label: &'static str, input: &str) -> anyhow::Result<[u8; N]> {
    let bytes = hex::decode(input.trim()).with_context(|| format!("Decoding {label} as hex"))?;
    validate::length(label, bytes.len(), N)?;

    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Result of a ChaCha20 encrypt/decrypt run
#[derive(Debug)]
pub struct ChaCha20Report {
    /// Ciphertext of the last trial
    pub ciphertext: Vec<u8>,
    /// Timing of encrypt + decrypt per trial
    pub stats: TimingStats,
}

/// Encrypt then decrypt `plaintext` `trials` times, verifying the round trip
pub fn run_chacha20(
    key: &[u8; CHACHA20_KEY_SIZE],
    nonce: &[u8; CHACHA20_NONCE_SIZE],
    counter: u32,
    plaintext: &[u8],
    trials: u32,
) -> anyhow::Result<ChaCha20Report> {
    if trials == 0 {
        bail!("At least one trial is required");
    }

    let blocks = plaintext.len().div_ceil(chacha20::CHACHA20_BLOCK_SIZE);
    log::info!(
        "ChaCha20: {} bytes, {} blocks, initial counter {}, {} trials",
        plaintext.len(),
        blocks,
        counter,
        trials
    );

    let mut stats = TimingStats::default();
    let mut ciphertext = Vec::new();
    for trial in 0..trials {
        let (ct, pt) = stats.time(|| {
            let ct = chacha20::xcrypt(plaintext, key, nonce, counter);
            let pt = chacha20::xcrypt(&ct, key, nonce, counter);
            (ct, pt)
        });

        if pt != plaintext {
            bail!("Decryption failed on trial {trial}: plaintext does not match decrypted text");
        }
        ciphertext = ct;
    }

    log::debug!("ChaCha20 timing: {stats}");
    Ok(ChaCha20Report { ciphertext, stats })
}

/// Time the raw Salsa20 block function on the all-zero state
pub fn run_salsa20_core(runs: u32) -> anyhow::Result<TimingStats> {
    if runs == 0 {
        bail!("At least one run is required");
    }

    log::info!("Salsa20 core: {runs} runs on the all-zero state");
    let input = [0u32; 16];
    let mut stats = TimingStats::default();
    for _ in 0..runs {
        let output = stats.time(|| salsa20::block(std::hint::black_box(&input)));
        std::hint::black_box(output);
    }

    log::debug!("Salsa20 core timing: {stats}");
    Ok(stats)
}

/// Result of an RC4 encryption run
#[derive(Debug)]
pub struct Rc4Report {
    /// Ciphertext
    pub ciphertext: Vec<u8>,
    /// Time spent generating and applying keystream
    pub elapsed: Duration,
}

impl Rc4Report {
    /// Keystream cost per input byte, in nanoseconds
    pub fn nanos_per_byte(&self) -> f64 {
        if self.ciphertext.is_empty() {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.ciphertext.len() as f64
    }
}

/// Encrypt `plaintext` under `key`
pub fn run_rc4(key: &[u8], plaintext: &[u8]) -> anyhow::Result<Rc4Report> {
    let mut rc4 = to_core_result(Rc4::new(key), "RC4 key")?;
    log::info!("RC4: {}-byte key, {} bytes", key.len(), plaintext.len());

    let mut ciphertext = plaintext.to_vec();
    let ((), elapsed) = timing::measure(|| rc4.encrypt(&mut ciphertext));

    Ok(Rc4Report {
        ciphertext,
        elapsed,
    })
}
