mod case;
mod cli;
mod error_handling;
mod export;
mod extreme;
mod generator;
mod grammar;
mod metrics;
mod mutator;

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Cli;
use crate::error_handling::{Error, ErrorType};
use crate::export::Report;

#[derive(Debug)]
pub enum RunErrorType {
    // Reading the grammar or writing the report failed
    FileError(std::io::Error),
    // The report could not be serialized
    ExportError(serde_json::Error),
}

impl ErrorType for RunErrorType {}

impl Display for RunErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunErrorType::FileError(e) => write!(f, "File error: {}", e),
            RunErrorType::ExportError(e) => write!(f, "Export error: {}", e),
        }
    }
}

pub type RunError = Error<RunErrorType>;

fn file_error(error: std::io::Error, file: PathBuf) -> RunError {
    Error {
        file,
        error: RunErrorType::FileError(error),
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let text = fs::read_to_string(&cli.file).map_err(|e| file_error(e, cli.file.clone()))?;

    let mut grammar = grammar::parse(&text);
    if let Some(start) = &cli.start {
        grammar.start = start.clone();
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let started = Instant::now();
    let valid = generator::generate_valid(&grammar, cli.valid, cli.max_depth, &mut rng);
    let elapsed = started.elapsed();
    eprintln!("Derived {} valid cases in {:.2?}", valid.len(), elapsed);

    let invalid = mutator::generate_invalid(&valid, cli.invalid, &mut rng);
    let extremes =
        extreme::generate_extreme(&grammar, cli.extreme, cli.max_depth, cli.max_length, &mut rng);

    // Invalid ids already continue the valid batch, but extreme ids restart
    // at 1 and are offset past everything merged so far
    let mut cases = valid;
    cases.extend(invalid);
    let offset = cases.len();
    cases.extend(extremes.into_iter().map(|mut case| {
        case.id += offset;
        case
    }));

    let mut metrics = metrics::calculate(&cases);
    metrics.avg_execution_time = elapsed.as_secs_f64() * 1000.0 / cli.valid.max(1) as f64;

    let report = Report { cases, metrics };
    let json = export::to_json(&report).map_err(|e| Error {
        file: cli.file.clone(),
        error: RunErrorType::ExportError(e),
    })?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &json).map_err(|e| file_error(e, path.clone()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }

    return Ok(());
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
