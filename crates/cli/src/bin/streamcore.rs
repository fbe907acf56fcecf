use anyhow::Context;
use clap::{Parser, Subcommand};
use streamcore_cli::commands::{self, DEFAULT_CHACHA20_KEY, DEFAULT_CHACHA20_NONCE};

/// Stream cipher demos with timing
#[derive(Parser)]
struct Cli {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt then decrypt TEXT with ChaCha20 and verify the round trip
    Chacha20 {
        /// 32-byte key, hex
        #[clap(long, default_value = DEFAULT_CHACHA20_KEY)]
        key: String,
        /// 12-byte nonce, hex
        #[clap(long, default_value = DEFAULT_CHACHA20_NONCE)]
        nonce: String,
        /// Initial block counter
        #[clap(long, default_value_t = 1)]
        counter: u32,
        /// Number of timed encrypt/decrypt trials
        #[clap(long, default_value_t = 1)]
        trials: u32,
        /// Plaintext
        text: String,
    },

    /// Time the Salsa20 block function on the all-zero state
    Salsa20Core {
        /// Number of timed runs
        #[clap(long, default_value_t = 100_000)]
        runs: u32,
    },

    /// Encrypt TEXT under an ASCII KEY with RC4
    Rc4 {
        /// Key, 1 to 256 bytes
        key: String,
        /// Plaintext
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    let Cli { cmd } = Cli::parse();
    match cmd {
        Command::Chacha20 {
            key,
            nonce,
            counter,
            trials,
            text,
        } => {
            let key = commands::parse_hex_array::<32>("ChaCha20 key", &key)?;
            let nonce = commands::parse_hex_array::<12>("ChaCha20 nonce", &nonce)?;
            let report = commands::run_chacha20(&key, &nonce, counter, text.as_bytes(), trials)
                .context("Running ChaCha20")?;

            println!("Plaintext:  {text}");
            println!("Ciphertext (hex): {}", hex::encode(&report.ciphertext));
            println!("Decryption successful: plaintext matches decrypted text.");
            println!(
                "Time per trial: avg {:?}, min {:?}, max {:?}",
                report.stats.average(),
                report.stats.min(),
                report.stats.max
            );
        }
        Command::Salsa20Core { runs } => {
            let stats = commands::run_salsa20_core(runs).context("Timing Salsa20 core")?;
            println!("Average time per run: {:?}", stats.average());
            println!("Minimum time: {:?}", stats.min());
            println!("Maximum time: {:?}", stats.max);
        }
        Command::Rc4 { key, text } => {
            let report = commands::run_rc4(key.as_bytes(), text.as_bytes())?;
            println!("Ciphertext: {}", hex::encode_upper(&report.ciphertext));
            println!(
                "PRGA time: {:?} ({:.2} ns/byte)",
                report.elapsed,
                report.nanos_per_byte()
            );
        }
    }

    Ok(())
}
