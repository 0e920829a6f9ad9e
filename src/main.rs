use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use freqtable::{Probing, Table, prime, words::words};
use tracing_subscriber::EnvFilter;

/// Count word frequencies read from stdin with an open-addressing hash table.
#[derive(Parser, Debug)]
#[command(name = "freqtable", version)]
struct Args {
    /// Spellcheck FILE against the words read from stdin.
    #[arg(short = 'c', long = "check", value_name = "FILE")]
    check: Option<PathBuf>,
    /// Resolve collisions with double hashing instead of linear probing.
    #[arg(short = 'd', long = "double-hashing")]
    double_hashing: bool,
    /// Print every slot of the table.
    #[arg(short = 'e', long = "entire-table")]
    entire_table: bool,
    /// Print collision statistics instead of word frequencies.
    #[arg(short = 'p', long = "print-stats")]
    print_stats: bool,
    /// Number of statistics snapshots.
    #[arg(short = 's', long = "snapshots", default_value_t = 10)]
    snapshots: usize,
    /// Table size; the first prime at least this large is used.
    #[arg(short = 't', long = "table-size", default_value_t = 113)]
    table_size: usize,
}

impl Args {
    fn probing(&self) -> Probing {
        if self.double_hashing {
            Probing::Double
        } else {
            Probing::Linear
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    run(&args, io::stdin().lock(), io::stdout().lock(), io::stderr().lock())
}

fn run(
    args: &Args,
    mut input: impl Read,
    mut out: impl Write,
    mut err: impl Write,
) -> anyhow::Result<()> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read words from stdin")?;

    let capacity = prime::next_prime(args.table_size)
        .with_context(|| format!("no prime table size at or above {}", args.table_size))?;
    let mut table = Table::new(capacity, args.probing())?;
    let fill_time = fill(&mut table, &text);

    if args.entire_table {
        table.print_entire_table(&mut out)?;
    }

    if let Some(path) = &args.check {
        let target = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let start = Instant::now();
        let mut unknown = 0;
        for word in words(&target) {
            if !table.contains(&word) {
                writeln!(err, "{word}")?;
                unknown += 1;
            }
        }
        let search_time = start.elapsed();
        writeln!(out, "Fill time     : {:.6}", fill_time.as_secs_f64())?;
        writeln!(out, "Search time   : {:.6}", search_time.as_secs_f64())?;
        writeln!(out, "Unknown words = {unknown}")?;
    } else if args.print_stats {
        table.print_stats(&mut out, args.snapshots)?;
    } else {
        table.print(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn fill(table: &mut Table, text: &str) -> Duration {
    let start = Instant::now();
    let mut dropped = 0usize;
    for word in words(text) {
        if table.insert(&word).is_err() {
            dropped += 1;
        }
    }
    if dropped > 0 {
        tracing::warn!(
            dropped,
            capacity = table.capacity(),
            "words did not fit in the table"
        );
    }
    start.elapsed()
}
