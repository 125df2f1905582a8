use std::path::PathBuf;

use clap::Parser;
use log::info;

use rivest_rs::alphabet::{Alphabet, DEFAULT_SYMBOLS};
use rivest_rs::catalog::Catalog;
use rivest_rs::search::{search, search_catalog, SearchConfig, DEFAULT_LENGTH};

#[derive(Debug, Parser)]
#[command(author, version)]
#[command(about = "Search for cyclic (Rivest) circuits over a catalog of boolean functions")]
struct Cli {
    /// Number of functions in a valid cycle.
    #[arg(short, long, value_name = "INT", default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Literal alphabet: lowercase letters are variables, uppercase their complements.
    #[arg(short, long, value_name = "STR", default_value = DEFAULT_SYMBOLS)]
    symbols: String,

    /// Catalog file with one expression per line (default: built-in catalog).
    #[arg(short, long, value_name = "FILE")]
    functions: Option<PathBuf>,

    /// Show duplicate edges in the graph section.
    #[arg(long)]
    keep_duplicates: bool,

    /// Write the dependency graph in DOT format.
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let mut report = match &args.functions {
        Some(path) => {
            let alphabet = Alphabet::new(&args.symbols)?;
            let catalog = Catalog::load(alphabet, path)?;
            info!("Loaded {} functions from {}", catalog.len(), path.display());
            search_catalog(catalog, args.length)?
        }
        None => {
            let config = SearchConfig {
                symbols: args.symbols.clone(),
                length: args.length,
                ..SearchConfig::default()
            };
            search(&config)?
        }
    };
    report.keep_duplicates = args.keep_duplicates;

    print!("{}", report);

    if let Some(path) = &args.dot {
        std::fs::write(path, report.to_dot()?)?;
        info!("Dependency graph written to {}", path.display());
    }

    let time_total = time_total.elapsed();
    info!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
