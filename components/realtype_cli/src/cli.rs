//! Command-line arguments

use clap::{Parser, ValueEnum};

/// Classify JavaScript-like values by basic and real type
#[derive(Parser, Debug)]
#[command(name = "realtype", version)]
pub struct Cli {
    /// Read an array literal from a file
    #[arg(short, long, conflicts_with = "eval")]
    pub file: Option<String>,

    /// Classify an inline array literal
    #[arg(short, long)]
    pub eval: Option<String>,

    /// What to compute for the input values
    #[arg(short, long, value_enum, default_value_t = Mode::Real)]
    pub mode: Mode,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Run the built-in assertion suite
    #[arg(long)]
    pub self_check: bool,
}

/// Classification to run over the input values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Basic (`typeof`) type of each value
    Basic,
    /// Real type of each value
    Real,
    /// Count of values per real type
    Count,
    /// Whether no two values share a real type
    Unique,
    /// Whether all values share one basic type
    Same,
}
