//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types used to match and decorate
//! source code, plus the reusable transform constructors.

use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::{Captures, Regex};

/// A dynamic transform: matched captures to replacement text
pub type TransformFn = Arc<dyn Fn(&Captures) -> String + Send + Sync>;

/// Replacement applied to every match of a rule's pattern
pub enum Transform {
    /// Static replacement string with `$n` back-references
    Template(String),
    /// Arbitrary substring-to-substring mapping
    Function(TransformFn),
}

impl Transform {
    /// Create a static template transform
    pub fn template(replacement: &str) -> Self {
        Transform::Template(replacement.to_string())
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Transform::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// A single highlighting rule
///
/// Pairs a regex pattern with the transform applied to each match.
/// Rules are applied in grammar declaration order, each one rewriting
/// the cumulative output of all rules before it.
#[derive(Debug)]
pub struct Rule {
    /// Name for debugging and load-time error reporting
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Replacement for each match
    pub transform: Transform,
}

impl Rule {
    /// Create a new rule
    ///
    /// Returns `None` if the pattern does not compile; pattern validity
    /// is a construction-time concern, never a run-time one.
    pub fn new(name: &str, pattern: &str, transform: Transform) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            transform,
        })
    }
}

/// Matches any engine-inserted wrapper span, capturing its inner text.
/// Only works because wrap classes are unquoted and `acc-` prefixed.
const WRAPPER_PATTERN: &str = r"<span class=acc-[\w-]*>(.*?)</span>";

fn wrapper_regex() -> &'static Regex {
    static WRAPPER: OnceLock<Regex> = OnceLock::new();
    // constant pattern, always compiles; built once for all reclaim rules
    WRAPPER.get_or_init(|| Regex::new(WRAPPER_PATTERN).unwrap())
}

/// Transform that surrounds each match in a style-tagged span
///
/// For token classes that can never overlap previously-applied markup
/// (keywords, operators, numeric literals, known globals).
pub fn wrap(class: &str) -> Transform {
    let open = format!("<span class={}>", class);
    Transform::Function(Arc::new(move |caps: &Captures| {
        format!("{}{}</span>", open, &caps[0])
    }))
}

/// Transform that strips any markup already inside the match, then wraps it
///
/// String, comment, and regexp-literal rules must own everything inside
/// their span even when an earlier rule already tagged a keyword-looking
/// token sitting inside it. Always ordered after the rules whose false
/// positives it erases: rule order encodes override priority.
pub fn reclaim(class: &str) -> Transform {
    let strip = wrapper_regex();
    let open = format!("<span class={}>", class);
    Transform::Function(Arc::new(move |caps: &Captures| {
        let plain = strip.replace_all(&caps[0], "$1");
        format!("{}{}</span>", open, plain)
    }))
}

/// Transform that replaces every match with a fixed string
///
/// Used for the escape rule that must run first in every grammar, so a
/// literal `<` in the source is never mistaken for an engine wrapper.
pub fn escape_with(replacement: &str) -> Transform {
    let replacement = replacement.to_string();
    Transform::Function(Arc::new(move |_: &Captures| replacement.clone()))
}
