//! Command line interface for memokit.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// memokit - memoized combinatorics and version comparison.
#[derive(Parser, Debug)]
#[command(name = "memokit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = "memokit.toml")]
    pub config: PathBuf,

    /// Verbose mode.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Writes a default configuration file.
    Init {
        /// Target directory (default: current directory).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Computes the n-th Fibonacci number.
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Computes the binomial coefficient C(n, m).
    Binom {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        #[arg(allow_negative_numbers = true)]
        m: i64,
    },

    /// Computes the greatest common divisor of two numbers.
    Gcd { a: u64, b: u64 },

    /// Compares two versions and prints -1, 0 or 1.
    Compare { lhs: String, rhs: String },

    /// Shows version.
    Version,
}
