//! eepromkv CLI
//!
//! One-shot commands against an image file.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eepromkv::protocol::{Command, Response};
use eepromkv::{Config, FileMedium, KeyStore, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// eepromkv CLI
#[derive(Parser, Debug)]
#[command(name = "eepromkv-cli")]
#[command(about = "CLI for an eepromkv image file")]
struct Args {
    /// Image file
    #[arg(short, long, default_value = "./eeprom.bin")]
    image: String,

    /// Medium size in bytes
    #[arg(short, long, default_value = "1024")]
    capacity: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the value stored under a key
    Read {
        /// The key to read
        key: String,
    },

    /// Store a new key-value pair
    Write {
        /// The key to write
        key: String,

        /// The value to write
        value: String,
    },

    /// Delete a key
    Forget {
        /// The key to forget
        key: String,
    },

    /// Hex dump of the used region
    Print {
        /// Dump the whole medium instead
        #[arg(short, long)]
        all: bool,
    },

    /// Erase the medium
    Clear,

    /// Walk the log and report its state
    Verify,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::builder()
        .image_path(&args.image)
        .capacity(args.capacity)
        .build();
    let medium = FileMedium::open(&config.image_path, config.capacity, config.sync_strategy)?;
    let mut store = KeyStore::open(medium, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let response = match args.command {
        Commands::Read { key } => store.execute(Command::Read { key: key.into_bytes() })?,
        Commands::Write { key, value } => store.execute(Command::Write {
            key: key.into_bytes(),
            value: value.into_bytes(),
        })?,
        Commands::Forget { key } => store.execute(Command::Forget { key: key.into_bytes() })?,
        Commands::Print { all: false } => store.execute(Command::Print)?,
        Commands::Print { all: true } => Response::Dump(store.dump_all()?),
        Commands::Clear => store.execute(Command::Clear)?,
        Commands::Verify => {
            let report = store.verify()?;
            writeln!(
                out,
                "active records:     {} ({} bytes)",
                report.active_records, report.active_bytes
            )?;
            writeln!(
                out,
                "tombstoned records: {} ({} bytes)",
                report.tombstoned_records, report.tombstoned_bytes
            )?;
            writeln!(out, "high-water mark:    0x{:04x}", report.high_water)?;
            writeln!(out, "free bytes:         {}", report.free_bytes)?;
            match report.corruption {
                Some((addr, cause)) => writeln!(out, "corrupted at 0x{:04x}: {}", addr, cause)?,
                None => writeln!(out, "log is clean")?,
            }
            return Ok(());
        }
    };

    response.write_to(&mut out)?;
    Ok(())
}
