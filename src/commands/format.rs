//! Handler for the `format` subcommand.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use crate::cli;
use crate::io;
use crate::io::output::{self, OutputFormat};
use crate::report::SymbolReport;

pub struct FormatConfig {
    pub symbols: Vec<String>,
    pub input: Option<PathBuf>,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub no_demangle: bool,
}

pub fn format_symbols(config: FormatConfig) -> Result<()> {
    let symbols = gather_symbols(&config)?;
    log::debug!("formatting {} symbol(s)", symbols.len());

    let reports: Vec<SymbolReport> = symbols
        .iter()
        .map(|symbol| SymbolReport::build(symbol, !config.no_demangle))
        .collect();

    let format = map_output_format(config.format);
    match config.output {
        Some(path) => {
            let content = output::render_to_string(&reports, format)?;
            io::write_file(&path, &content)?;
        }
        None => {
            let mut writer = output::create_writer(format);
            writer.write_reports(&reports)?;
        }
    }
    Ok(())
}

fn gather_symbols(config: &FormatConfig) -> Result<Vec<String>> {
    if !config.symbols.is_empty() {
        return Ok(config.symbols.clone());
    }

    match &config.input {
        Some(path) => io::read_symbol_lines(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(io::split_symbol_lines(&buffer))
        }
    }
}

fn map_output_format(format: cli::OutputFormat) -> OutputFormat {
    match format {
        cli::OutputFormat::Terminal => OutputFormat::Terminal,
        cli::OutputFormat::Json => OutputFormat::Json,
    }
}
