// Export modules for library usage
pub mod cli;
pub mod collapse;
pub mod commands;
pub mod demangle;
pub mod formatter;
pub mod io;
pub mod report;
pub mod sink;
pub mod wrap;

// Re-export commonly used types
pub use crate::collapse::{
    collapse_namespaces, collapse_templates, emit_collapsed_label, COLLAPSED_HEADER,
    COLLAPSE_TARGET_WIDTH,
};
pub use crate::demangle::demangle_symbol;
pub use crate::formatter::{format_label, FORMATTED_HEADER};
pub use crate::report::SymbolReport;
pub use crate::sink::LineSink;
pub use crate::wrap::{build_lines, tokenize, Token, TokenKind};
