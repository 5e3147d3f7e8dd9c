use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use frontend::{errors::errors::Error, lexer::lexer::tokenize, source::buffer::SourceBuffer};
use tracing_subscriber::EnvFilter;

/// Tokenizes a source file and prints one token per line.
#[derive(Parser, Debug)]
#[command(name = "frontend", version)]
struct Cli {
    /// Source file to tokenize
    path: PathBuf,

    /// Prefix every token with its `line:column`
    #[arg(short, long)]
    locations: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "frontend=debug" } else { "frontend=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("FATAL ERROR: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let start = Instant::now();

    let buffer = SourceBuffer::load(&cli.path)?;
    let tokens = tokenize(&buffer)?;

    tracing::debug!(elapsed = ?start.elapsed(), "tokenized {}", cli.path.display());

    for token in &tokens {
        if cli.locations {
            let location = token.location();
            println!("{}:{}\t{}", location.line(), location.column(), token);
        } else {
            println!("{}", token);
        }
    }

    Ok(())
}
