//! Label collapsing: pattern-based rewrites that shorten a symbol label
//! until it fits the display width budget.
//!
//! Two rewrites are available: replacing a template-argument list with
//! `<...>` and replacing a chain of namespace qualifiers with `[...]::`.
//! The template rewrite only ever matches innermost bracket pairs, so each
//! pass peels exactly one level of nesting; the namespace rewrite collapses
//! a whole qualifier chain in one pass because chains do not nest.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sink::LineSink;

/// Collapsed labels are considered short enough at this many characters.
pub const COLLAPSE_TARGET_WIDTH: usize = 80;

/// Header emitted before the collapsed form of a label.
pub const COLLAPSED_HEADER: &str = "-- collapsed symbol --";

// Innermost angle-bracket pairs only: a previously inserted `<...>` marker
// counts as an opaque atom, anything else between the brackets must not be
// a bracket itself.
static TEMPLATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(<\.\.\.>|[^<>])*>").unwrap());

// One or more `segment::` qualifiers. A segment may contain collapsed
// template markers, so `Vec<...>::push` collapses as a whole.
static NAMESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z_](<\.\.\.>|[a-zA-Z0-9_])*::)+").unwrap());

/// Replace every non-overlapping match of `pattern` with `replacement`,
/// returning `None` when the rewrite leaves the label unchanged.
///
/// Unchanged is judged on the output text, not on whether a match occurred:
/// an already collapsed `<...>` still matches the template pattern but
/// rewrites to itself, and that must read as a fixpoint.
fn collapse(pattern: &Regex, replacement: &str, label: &str) -> Option<String> {
    let collapsed = pattern.replace_all(label, replacement);
    if collapsed == label {
        None
    } else {
        Some(collapsed.into_owned())
    }
}

/// Collapse one level of template-argument nesting to `<...>`.
///
/// `None` means no further collapsing is possible.
pub fn collapse_templates(label: &str) -> Option<String> {
    collapse(&TEMPLATE_PATTERN, "<...>", label)
}

/// Collapse every chain of namespace qualifiers to `[...]::`.
///
/// Applied once per label; qualifier chains do not nest, so iterating this
/// rewrite would gain nothing.
pub fn collapse_namespaces(label: &str) -> Option<String> {
    collapse(&NAMESPACE_PATTERN, "[...]::", label)
}

/// Emit a single best-effort collapsed form of `label`, when it is long
/// enough to warrant one.
///
/// Labels within the width budget produce no output at all. Longer labels
/// get the collapsed-symbol header followed by the first form that fits:
/// template collapsing is iterated to success or fixpoint, then namespace
/// collapsing is tried once, and whatever is left is emitted as-is even if
/// it still exceeds the budget.
pub fn emit_collapsed_label(label: &str, sink: &mut dyn LineSink) {
    if label.chars().count() <= COLLAPSE_TARGET_WIDTH {
        return;
    }

    sink.push_line(COLLAPSED_HEADER);

    let mut label = label.to_string();
    while let Some(collapsed) = collapse_templates(&label) {
        label = collapsed;
        if label.chars().count() <= COLLAPSE_TARGET_WIDTH {
            sink.push_line(&label);
            return;
        }
    }

    if let Some(collapsed) = collapse_namespaces(&label) {
        label = collapsed;
        if label.chars().count() <= COLLAPSE_TARGET_WIDTH {
            sink.push_line(&label);
            return;
        }
    }

    log::debug!(
        "label still exceeds {} chars after collapsing",
        COLLAPSE_TARGET_WIDTH
    );
    sink.push_line(&label);
}
