//! Built-in language grammars

mod javascript;

use super::grammar::Grammar;

/// Get all built-in grammars
pub fn all_grammars() -> Vec<Grammar> {
    vec![javascript::javascript_grammar()]
}
