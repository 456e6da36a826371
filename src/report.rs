//! Per-symbol formatting results.

use serde::Serialize;

use crate::demangle::demangle_symbol;
use crate::formatter::format_label;

/// One formatted symbol: the raw input, the label that was actually
/// formatted, and the display lines in emission order.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolReport {
    pub symbol: String,
    pub label: String,
    pub lines: Vec<String>,
}

impl SymbolReport {
    /// Format `symbol` into a report, demangling it first unless the
    /// caller says the input is already readable.
    pub fn build(symbol: &str, demangle: bool) -> Self {
        let label = if demangle {
            demangle_symbol(symbol)
        } else {
            symbol.to_string()
        };

        let mut lines: Vec<String> = Vec::new();
        format_label(&label, &mut lines);

        Self {
            symbol: symbol.to_string(),
            label,
            lines,
        }
    }

}
