//! Layout state machine: turns a token sequence into indented lines.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokenizer::{Token, TokenKind};
use crate::sink::LineSink;

// Trailing type qualifiers stay attached to a line ending in `>`, which
// keeps spans like `x<y> const &` together.
static QUALIFIERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ *((const|volatile|[*&]) *)+$").unwrap());

// A lone `const` after `)` is a method modifier; `method(...) const`
// stays together the same way.
static METHOD_MODIFIERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ *const *$").unwrap());

const INDENT_WIDTH: usize = 2;

/// Lay `tokens` out as display lines, pushing each finished line to `sink`.
///
/// A line becomes pending after a comma or a bracket delimiter, but is not
/// finalized until the next token is seen: commas, closing delimiters, and
/// trailing qualifiers glue onto the pending line instead of opening a new
/// one. Indentation is two spaces per unclosed bracket; stray closers clamp
/// the depth at zero rather than underflowing.
pub fn build_lines(tokens: &[Token<'_>], sink: &mut dyn LineSink) {
    let mut line = String::new();
    let mut line_ready = false;
    let mut indent_level = 0usize;

    for token in tokens {
        let text = token.text;

        if line_ready {
            match token.kind {
                TokenKind::CloseParen | TokenKind::CloseAngle => {
                    line.push_str(text);
                    indent_level = indent_level.saturating_sub(1);
                    continue;
                }
                TokenKind::Comma => {
                    line.push_str(text);
                    continue;
                }
                TokenKind::Run
                    if (line.ends_with('>') && QUALIFIERS.is_match(text))
                        || (line.ends_with(')') && METHOD_MODIFIERS.is_match(text)) =>
                {
                    line.push_str(text);
                    continue;
                }
                _ => {
                    sink.push_line(&line);
                    line.clear();
                    line_ready = false;
                }
            }
        }

        if line.is_empty() {
            // Whitespace between arguments carries nothing at line start.
            let trimmed = text.trim_start_matches(' ');
            if trimmed.is_empty() {
                continue;
            }

            if indent_level > 0 {
                line.push_str(&" ".repeat(indent_level * INDENT_WIDTH));
            }
            line.push_str(trimmed);
        } else {
            line.push_str(text);
        }

        match token.kind {
            TokenKind::Comma => {
                line_ready = true;
            }
            TokenKind::CloseParen | TokenKind::CloseAngle => {
                line_ready = true;
                indent_level = indent_level.saturating_sub(1);
            }
            TokenKind::OpenParen | TokenKind::OpenAngle => {
                line_ready = true;
                indent_level += 1;
            }
            _ => {}
        }
    }

    if !line.is_empty() {
        sink.push_line(&line);
    }
}
