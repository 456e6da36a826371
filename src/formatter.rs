//! Top-level formatting entry point.

use crate::collapse;
use crate::sink::LineSink;
use crate::wrap;

/// Header emitted before the word-wrapped form of a label.
pub const FORMATTED_HEADER: &str = "-- formatted symbol --";

/// Format one label into display lines, pushed to `sink` in order.
///
/// Two independent views of the same label: a single collapsed line when
/// the label is long enough to warrant one, then an indented multi-line
/// layout that is always produced.
pub fn format_label(label: &str, sink: &mut dyn LineSink) {
    collapse::emit_collapsed_label(label, sink);

    sink.push_line(FORMATTED_HEADER);
    let tokens = wrap::tokenize(label);
    wrap::build_lines(&tokens, sink);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collapse::COLLAPSED_HEADER;

    #[test]
    fn test_short_label_skips_collapse_phase() {
        let mut sink: Vec<String> = Vec::new();
        format_label("int", &mut sink);

        assert_eq!(sink, vec![FORMATTED_HEADER.to_string(), "int".to_string()]);
    }

    #[test]
    fn test_long_label_gets_both_phases() {
        let arg = "x".repeat(90);
        let label = format!("Function<{arg}>(int)");

        let mut sink: Vec<String> = Vec::new();
        format_label(&label, &mut sink);

        assert_eq!(sink[0], COLLAPSED_HEADER);
        assert_eq!(sink[1], "Function<...>(int)");
        assert_eq!(sink[2], FORMATTED_HEADER);
        assert!(sink.len() > 3);
    }

    #[test]
    fn test_wrap_phase_uses_uncollapsed_label() {
        let arg = "x".repeat(90);
        let label = format!("f({arg}, int)");

        let mut sink: Vec<String> = Vec::new();
        format_label(&label, &mut sink);

        // The word-wrapped view keeps the full argument text.
        assert!(sink.iter().any(|line| line.contains(&arg)));
    }
}
