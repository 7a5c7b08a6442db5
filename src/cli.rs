use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar
    pub file: PathBuf,

    /// Start symbol (default: first in the file)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Amount of valid cases to derive
    #[arg(short = 'n', long, value_name = "AMOUNT", default_value_t = 10)]
    pub valid: usize,

    /// Amount of invalid cases to mutate out of the valid ones
    #[arg(short, long, value_name = "AMOUNT", default_value_t = 5)]
    pub invalid: usize,

    /// Amount of extreme cases to assemble
    #[arg(short, long, value_name = "AMOUNT", default_value_t = 2)]
    pub extreme: usize,

    /// Maximum derivation depth
    #[arg(short = 'd', long, value_name = "DEPTH", default_value_t = 8)]
    pub max_depth: usize,

    /// Target length for extreme cases
    #[arg(short = 'l', long, value_name = "LENGTH", default_value_t = 200)]
    pub max_length: usize,

    /// Seed for reproducible output (default: from entropy)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
