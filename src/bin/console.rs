//! eepromkv Console Binary
//!
//! Interactive READ/WRITE/FORGET/PRINT/CLEAR prompt over an image file.

use std::io::{self, BufWriter};

use clap::Parser;
use eepromkv::config::{CorruptionPolicy, SyncStrategy};
use eepromkv::console::Session;
use eepromkv::{Config, FileMedium, KeyStore};
use tracing_subscriber::{fmt, EnvFilter};

/// eepromkv Console
#[derive(Parser, Debug)]
#[command(name = "eepromkv-console")]
#[command(about = "Key-value console over an emulated EEPROM image")]
#[command(version)]
struct Args {
    /// Image file (created erased if missing)
    #[arg(short, long, default_value = "./eeprom.bin")]
    image: String,

    /// Medium size in bytes
    #[arg(short, long, default_value = "1024")]
    capacity: usize,

    /// Maximum key length
    #[arg(long, default_value = "32")]
    max_key_len: usize,

    /// Maximum value length
    #[arg(long, default_value = "32")]
    max_value_len: usize,

    /// fsync after every byte instead of once per command
    #[arg(long)]
    sync_every_write: bool,

    /// Refuse to operate past corrupted records instead of treating them as the end of the log
    #[arg(long)]
    strict: bool,
}

fn main() {
    // Logs go to stderr; stdout carries only console output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,eepromkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("eepromkv console v{}", eepromkv::VERSION);
    tracing::info!("Image: {} ({} bytes)", args.image, args.capacity);

    let config = Config::builder()
        .image_path(&args.image)
        .capacity(args.capacity)
        .max_key_len(args.max_key_len)
        .max_value_len(args.max_value_len)
        .sync_strategy(if args.sync_every_write {
            SyncStrategy::EveryWrite
        } else {
            SyncStrategy::EveryOperation
        })
        .corruption_policy(if args.strict {
            CorruptionPolicy::Reject
        } else {
            CorruptionPolicy::TreatAsEnd
        })
        .build();

    let medium = match FileMedium::open(&config.image_path, config.capacity, config.sync_strategy)
    {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Failed to open image: {}", e);
            std::process::exit(1);
        }
    };

    let mut store = match KeyStore::open(medium, config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&mut store, stdin.lock(), BufWriter::new(stdout.lock()));

    match session.run() {
        Ok(count) => tracing::info!("Session closed after {} commands", count),
        Err(e) => {
            tracing::error!("Console error: {}", e);
            std::process::exit(1);
        }
    }
}
