use biobloom::{
    BloomFilter, BloomFilterOps, BloomFilterStats, InputFormat,
    common::bits2hr,
    input::{load_elements, load_queries, normalize_line},
};
use clap::Parser;
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Instant,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const QUIT_COMMAND: &str = ":Q";

/// Load sequences into a Bloom filter and query them.
///
/// Without a query file, queries are read interactively until `:Q`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Treat input files as FASTA and skip `>` header lines
    #[arg(short, long)]
    fasta: bool,

    /// Treat input files as FASTA and join each record's sequence lines
    /// into one element
    #[arg(short, long, conflicts_with = "fasta")]
    records: bool,

    /// False positive rate, overrides a `?` header in the element file
    #[arg(short = 'p', long)]
    fpr: Option<f64>,

    /// File with one element per line
    elements: PathBuf,

    /// File with one query per line
    queries: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = if cli.records {
        InputFormat::FastaRecords
    } else if cli.fasta {
        InputFormat::Fasta
    } else {
        InputFormat::Plain
    };

    println!("Processing file...");
    let started = Instant::now();
    let set = load_elements(&cli.elements, format)?;
    let filter = set.build_filter(cli.fpr)?;
    info!(
        elapsed = ?started.elapsed(),
        elements = filter.insert_count(),
        "filter array built"
    );

    println!("Filter parameters:");
    println!("  Bit array size: {}", filter.size());
    println!("  Hash functions: {}", filter.hash_count());
    println!("  Memory: {}", bits2hr(filter.size()));
    println!(
        "  Estimated false positive rate: {:.4}",
        filter.estimated_false_positive_rate()
    );

    match &cli.queries {
        Some(path) => {
            println!("\nProcessing queries...");
            for query in load_queries(path, format)? {
                report(&filter, &query);
            }
        }
        None => interactive(&filter)?,
    }

    Ok(())
}

fn report(filter: &BloomFilter, query: &[u8]) {
    let started = Instant::now();
    let present = filter.contains(query);
    info!(elapsed = ?started.elapsed(), "query finished");

    let query = String::from_utf8_lossy(query);
    if present {
        println!("Element {query} is probably here!");
    } else {
        println!("Element {query} is not here");
    }
}

fn interactive(filter: &BloomFilter) -> io::Result<()> {
    println!(
        "\nFilter array is ready, please enter the query, or {QUIT_COMMAND} to quit.\n"
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().split(b'\n');
    loop {
        print!("Query: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let query = normalize_line(&line);
        if query == QUIT_COMMAND.as_bytes() {
            break;
        }
        if !query.is_empty() {
            report(filter, query);
        }
    }
    Ok(())
}
