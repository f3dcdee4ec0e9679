//! Interactive spelling suggestions on the terminal.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use autocorrect::{Dictionary, OutputFormat, Repl, Result, SuggestionEngine};

/// Suggest dictionary words close to what you type
#[derive(Parser, Debug)]
#[command(name = "autocorrect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Word list: one word per line, optionally preceded by a word count
    #[arg(
        short,
        long,
        env = "AUTOCORRECT_DICTIONARY",
        default_value = "dictionaries/large.txt"
    )]
    dictionary: PathBuf,

    /// Largest edit distance a suggestion may have
    #[arg(short, long, env = "AUTOCORRECT_THRESHOLD", default_value_t = 3)]
    threshold: usize,

    /// Show at most this many suggestions (0 = all)
    #[arg(short, long, default_value_t = 0)]
    limit: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Verbosity level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Effective verbosity: 0 = quiet, 1 = normal (default), 2+ = more.
    fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let dictionary = Dictionary::from_file(&args.dictionary)?;
    let engine = SuggestionEngine::new(dictionary, args.threshold)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(&engine, args.format)
        .with_limit(args.limit)
        .run(stdin.lock(), stdout.lock())
}

fn main() {
    let args = Args::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
