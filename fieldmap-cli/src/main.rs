//! fieldmap: print a content model's search index field mapping.
//!
//! Usage:
//!   fieldmap model.json --config fieldmap.toml --pretty
//!
//! The mapping goes to stdout as JSON; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use fieldmap_cli::{Args, run};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let json = run(&args)?;
    println!("{json}");
    Ok(())
}
