//! Sequential substitution engine
//!
//! Applies a grammar's rules, in declared order, to a text buffer. Each
//! rule rewrites the whole buffer with a global left-to-right
//! non-overlapping substitution, so a rule sees the cumulative output of
//! every rule before it. O(rules x buffer length); rule counts are small
//! and inputs are code-block sized.

use regex::Captures;

use super::grammar::Grammar;
use super::rules::Transform;

/// Apply a grammar to text, producing decorated text
///
/// Total and deterministic: a pattern that matches nothing is a no-op,
/// a grammar with zero rules is the identity, and no input raises an
/// error.
pub fn apply(grammar: &Grammar, text: &str) -> String {
    let mut buffer = text.to_string();
    for rule in grammar.rules() {
        buffer = match &rule.transform {
            Transform::Template(replacement) => rule
                .pattern
                .replace_all(&buffer, replacement.as_str())
                .into_owned(),
            Transform::Function(transform) => rule
                .pattern
                .replace_all(&buffer, |caps: &Captures| transform(caps))
                .into_owned(),
        };
    }
    buffer
}
