//! Word-wrap layout: tokenize a label, then reflow it across indented
//! lines, one top-level argument per line.

pub mod line_builder;
pub mod tokenizer;

pub use line_builder::build_lines;
pub use tokenizer::{tokenize, Token, TokenKind};
