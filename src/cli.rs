use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with section headers
    Terminal,
    /// JSON array of per-symbol reports
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "symfold")]
#[command(about = "Collapses and word-wraps long demangled symbol names", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format symbol names for a fixed-width display
    Format {
        /// Symbol names to format; reads stdin when empty and no input file
        symbols: Vec<String>,

        /// Read symbol names from a file, one per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat input as already demangled
        #[arg(long = "no-demangle")]
        no_demangle: bool,
    },
}
