//! Report writers for the supported output formats.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::collapse::COLLAPSED_HEADER;
use crate::formatter::FORMATTED_HEADER;
use crate::report::SymbolReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait ReportWriter {
    fn write_reports(&mut self, reports: &[SymbolReport]) -> Result<()>;
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[SymbolReport]) -> Result<()> {
        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                writeln!(self.writer)?;
            }
            for line in &report.lines {
                if line == COLLAPSED_HEADER || line == FORMATTED_HEADER {
                    writeln!(self.writer, "{}", line.cyan())?;
                } else {
                    writeln!(self.writer, "{line}")?;
                }
            }
        }
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_reports(&mut self, reports: &[SymbolReport]) -> Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Writer for the chosen format, backed by stdout.
pub fn create_writer(format: OutputFormat) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout())),
    }
}

/// Render reports to a string instead of a stream, for `--output` files.
pub fn render_to_string(reports: &[SymbolReport], format: OutputFormat) -> Result<String> {
    let mut buffer: Vec<u8> = Vec::new();
    match format {
        OutputFormat::Json => JsonWriter::new(&mut buffer).write_reports(reports)?,
        OutputFormat::Terminal => TerminalWriter::new(&mut buffer).write_reports(reports)?,
    }
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reports() -> Vec<SymbolReport> {
        vec![
            SymbolReport::build("int", true),
            SymbolReport::build("foo::bar(int, float)", true),
        ]
    }

    #[test]
    fn test_terminal_writer_separates_reports() {
        colored::control::set_override(false);
        let rendered = render_to_string(&sample_reports(), OutputFormat::Terminal).unwrap();

        assert!(rendered.contains(FORMATTED_HEADER));
        assert!(rendered.contains("\n\n"));
        assert!(rendered.contains("  int,"));
    }

    #[test]
    fn test_json_writer_round_trips() {
        let rendered = render_to_string(&sample_reports(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let reports = parsed.as_array().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["symbol"], "int");
        assert!(reports[1]["lines"].as_array().unwrap().len() > 1);
    }
}
