//! `ical-unclutter` — fold expanded calendar occurrences back into recurring events.
//!
//! ## Usage
//!
//! ```sh
//! # Compact a calendar export, writing to stdout
//! ical-unclutter export.ics
//!
//! # Write to a file instead
//! ical-unclutter export.ics -o compact.ics
//!
//! # Accept exports that are not sorted by date, and double-check every rule
//! ical-unclutter export.ics --sort --verify
//!
//! # Print what happened as JSON on stderr
//! ical-unclutter export.ics -o compact.ics --stats
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use recurrence_engine::CompactOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ical-unclutter",
    version,
    about = "Merge repeated calendar occurrences into RRULE/EXDATE recurring events"
)]
struct Cli {
    /// iCalendar file that needs uncluttering
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Refactored iCalendar file (writes to stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Sort occurrences by start time before grouping
    #[arg(long)]
    sort: bool,

    /// Expand every synthesized rule and check it reproduces the input dates
    #[arg(long)]
    verify: bool,

    /// Print compaction statistics as JSON on stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!(input = %cli.input.display(), "reading calendar");
    let input = read_input(&cli.input)?;
    let options = CompactOptions {
        sort_occurrences: cli.sort,
        verify: cli.verify,
    };

    // Nothing is written until the whole calendar has been rebuilt.
    let (output, stats) = recurrence_engine::compact_ics(&input, &options)
        .with_context(|| format!("Failed to unclutter {}", cli.input.display()))?;

    write_output(cli.output.as_deref(), &output)?;
    if let Some(path) = &cli.output {
        info!(output = %path.display(), bytes = output.len(), "wrote calendar");
    }

    if cli.stats {
        eprintln!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
