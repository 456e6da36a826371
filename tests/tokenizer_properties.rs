//! Property-based tests for the label engine.
//!
//! These verify invariants that should hold for all inputs:
//! - Tokenization loses no characters
//! - Template collapsing always reaches a fixpoint
//! - Collapsing a non-trivial argument list strictly shrinks the label

use proptest::prelude::*;
use symfold::{collapse_namespaces, collapse_templates, tokenize};

proptest! {
    /// Concatenating the token spans reproduces the input exactly.
    #[test]
    fn prop_tokenization_is_lossless(label in "[a-zA-Z0-9_:<>(),*& ]{0,80}") {
        let reassembled: String = tokenize(&label).iter().map(|t| t.text).collect();
        prop_assert_eq!(reassembled, label);
    }

    /// Repeated template collapsing terminates, and once it reports
    /// unchanged it stays unchanged.
    #[test]
    fn prop_template_collapsing_reaches_fixpoint(label in "[a-zA-Z0-9_:<>(),]{0,60}") {
        let mut current = label.clone();
        let mut passes = 0usize;
        while let Some(next) = collapse_templates(&current) {
            current = next;
            passes += 1;
            prop_assert!(
                passes <= label.len() + 1,
                "no fixpoint after {} passes on {:?}",
                passes,
                label
            );
        }
        prop_assert_eq!(collapse_templates(&current), None);
    }

    /// One pass over a flat, non-trivial argument list strictly shrinks
    /// the label.
    #[test]
    fn prop_collapsing_flat_arguments_shrinks(
        name in "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        args in "[a-zA-Z0-9_, ]{4,24}",
    ) {
        let label = format!("{name}<{args}>");
        let collapsed = collapse_templates(&label).expect("argument list should collapse");

        prop_assert_eq!(&collapsed, &format!("{}<...>", name));
        prop_assert!(collapsed.chars().count() < label.chars().count());
    }

    /// Namespace collapsing is a no-op on its own output when the chain
    /// was fully collapsed.
    #[test]
    fn prop_namespace_collapse_settles(
        segments in prop::collection::vec("[a-zA-Z_][a-zA-Z0-9_]{0,8}", 1..5),
        tail in "[a-z][a-z0-9_]{0,8}",
    ) {
        let label = format!("{}::{}()", segments.join("::"), tail);
        let collapsed = collapse_namespaces(&label).expect("qualified name should collapse");

        prop_assert_eq!(&collapsed, &format!("[...]::{}()", tail));
        prop_assert_eq!(collapse_namespaces(&collapsed), None);
    }
}
