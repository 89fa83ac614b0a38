//! trirow: lay out a row described in TOML and print the result as JSON.
//!
//! Run with:  `RUST_LOG=debug trirow rows/phone.toml`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod report;

#[derive(Debug, Parser)]
#[command(version, about = "Lay out a three-slot or two-slot row")]
struct Args {
    /// Row description file
    path: PathBuf,

    /// Override the row's max width
    #[arg(long)]
    width: Option<u32>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!("trirow v{} starting", env!("CARGO_PKG_VERSION"));

    let mut file = config::load(&args.path)?;
    if let Some(width) = args.width {
        file.row.max_width = Some(width);
        file.validate()?;
    }

    let report = report::run(&file)
        .with_context(|| format!("cannot lay out '{}'", args.path.display()))?;

    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{json}");

    Ok(())
}
