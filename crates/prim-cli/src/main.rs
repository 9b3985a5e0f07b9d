//! Command-line interface for the AES-128, OCB and Grøstl-256 crates.

#![forbid(unsafe_code)]

mod selftest;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use aes128_ocb::{Aes128Ocb, Nonce, NONCE_LEN};
use aes_core::{Aes128Key, Block};
use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// AES-128 / OCB / Grøstl-256 CLI.
#[derive(Parser)]
#[command(
    name = "prim",
    version,
    author,
    about = "AES-128 block encryption, OCB-AES-128 and Grøstl-256"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a single 16-byte block.
    Aes {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Encrypt whole 16-byte blocks with OCB and append the tag.
    #[command(group(ArgGroup::new("message").required(true).args(["plaintext_hex", "input"])))]
    Ocb {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// 96-bit nonce as 24 hex characters; drawn at random when omitted.
        #[arg(long, value_name = "HEX", conflicts_with = "seed")]
        nonce_hex: Option<String>,
        /// RNG seed for a reproducible random nonce.
        #[arg(long)]
        seed: Option<u64>,
        /// Plaintext as hex (length a multiple of 32 hex characters).
        #[arg(long, value_name = "HEX")]
        plaintext_hex: Option<String>,
        /// Plaintext file (length a multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Write `ciphertext || tag` here instead of printing hex.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Hash a file (or stdin) with Grøstl-256.
    Hash {
        /// Input file; stdin when omitted.
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Run the built-in known-answer tests.
    Selftest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Aes { key_hex, block_hex } => cmd_aes(&key_hex, &block_hex),
        Commands::Ocb {
            key_hex,
            nonce_hex,
            seed,
            plaintext_hex,
            input,
            output,
        } => cmd_ocb(
            &key_hex,
            nonce_hex.as_deref(),
            seed,
            plaintext_hex.as_deref(),
            input.as_deref(),
            output.as_deref(),
        ),
        Commands::Hash { input } => cmd_hash(input.as_deref()),
        Commands::Selftest => selftest::run(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_aes(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block: Block = parse_fixed_hex(block_hex, "plaintext block")?;
    let mut ciphertext = [0u8; 16];
    aes_core::encrypt_into(&mut ciphertext, &block, &key);
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_ocb(
    key_hex: &str,
    nonce_hex: Option<&str>,
    seed: Option<u64>,
    plaintext_hex: Option<&str>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let nonce: Nonce = match nonce_hex {
        Some(hex_str) => parse_fixed_hex(hex_str, "nonce")?,
        None => {
            let mut nonce = [0u8; NONCE_LEN];
            seeded_rng(seed).fill_bytes(&mut nonce);
            nonce
        }
    };
    let plaintext = match (plaintext_hex, input) {
        (Some(hex_str), _) => hex::decode(hex_str.trim()).context("decode plaintext hex")?,
        (None, Some(path)) => fs::read(path).with_context(|| format!("read {}", path.display()))?,
        (None, None) => bail!("either --plaintext-hex or --input is required"),
    };
    debug!(len = plaintext.len(), "ocb plaintext loaded");

    let sealed = Aes128Ocb::new(&key)
        .encrypt(&nonce, &plaintext)
        .context("ocb encrypt")?;

    println!("nonce: {}", hex::encode(nonce));
    match output {
        Some(path) => {
            fs::write(path, &sealed).with_context(|| format!("write {}", path.display()))?
        }
        None => println!("sealed: {}", hex::encode(&sealed)),
    }
    Ok(())
}

fn cmd_hash(input: Option<&Path>) -> Result<()> {
    let message = match input {
        Some(path) => fs::read(path).with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("read stdin")?;
            buf
        }
    };
    let digest = groestl256::hash(&message).context("hash")?;
    println!("{}", hex::encode(digest));
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes: [u8; 16] = parse_fixed_hex(hex_str, "AES-128 key")?;
    Ok(Aes128Key::from(bytes))
}

fn parse_fixed_hex<const N: usize>(hex_str: &str, what: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))?;
    if bytes.len() != N {
        bail!("{what} must be {N} bytes ({} hex characters)", N * 2);
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
