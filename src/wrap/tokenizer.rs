//! Splits a label into the spans the line builder lays out.

use once_cell::sync::Lazy;
use regex::Regex;

/// Classification of one tokenized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    OpenAngle,
    CloseAngle,
    Comma,
    /// A short bracketed group kept indivisible despite its brackets,
    /// e.g. `(unsigned int *)` or `<1337>`.
    AtomicGroup,
    /// Any other maximal span, including whitespace-bearing qualifier text.
    Run,
}

/// One span of the label. Spans are contiguous and cover the whole label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

// Alternatives are tried in order: atomic bracketed groups win over bare
// delimiters so spans like `fn(unsigned int *)` and `T<1337>` stay whole.
// The restricted class (identifiers, spaces, `*`, `&`) keeps anything with
// internal structure, commas in particular, out of the atomic alternatives.
static DELIMITERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\([a-zA-Z0-9_*& ]+\)|<[a-zA-Z0-9_*& ]+>|[,<>()]|[^,<>()]+").unwrap()
});

/// Tokenize `label` into an ordered span sequence.
///
/// Total and lossless: concatenating the spans in order reproduces the
/// label exactly.
pub fn tokenize(label: &str) -> Vec<Token<'_>> {
    DELIMITERS
        .find_iter(label)
        .map(|m| {
            let text = m.as_str();
            Token {
                text,
                kind: classify(text),
            }
        })
        .collect()
}

fn classify(text: &str) -> TokenKind {
    match text {
        "(" => TokenKind::OpenParen,
        ")" => TokenKind::CloseParen,
        "<" => TokenKind::OpenAngle,
        ">" => TokenKind::CloseAngle,
        "," => TokenKind::Comma,
        _ if text.len() > 1 && (text.starts_with('(') || text.starts_with('<')) => {
            TokenKind::AtomicGroup
        }
        _ => TokenKind::Run,
    }
}
