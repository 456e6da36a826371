use anyhow::Result;
use clap::Parser;
use symfold::cli::{Cli, Commands};
use symfold::commands::format::{format_symbols, FormatConfig};

fn main() -> Result<()> {
    env_logger::init();
    log::debug!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            symbols,
            input,
            format,
            output,
            no_demangle,
        } => format_symbols(FormatConfig {
            symbols,
            input,
            format,
            output,
            no_demangle,
        }),
    }
}
