//! Grammars and the grammar table
//!
//! A grammar is an ordered list of rules for one language. Order is both
//! a priority list and a pipeline: each rule rewrites the cumulative
//! output of the rules before it, and a later reclaim rule can revoke
//! markup inserted by an earlier wrap rule.

use std::collections::HashMap;

use super::builtin;
use super::rules::Rule;

/// An ordered sequence of rules for one language
#[derive(Debug)]
pub struct Grammar {
    name: String,
    rules: Vec<Rule>,
}

impl Grammar {
    /// Create a new empty grammar
    ///
    /// A grammar with zero rules is valid and acts as the identity
    /// transform.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    /// Append a rule
    ///
    /// Rules apply in insertion order; there is no reordering after
    /// construction.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Language name this grammar highlights
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Lookup table from language name to grammar
///
/// An explicitly constructed value handed to the driver, not an implicit
/// global, so test fixtures can carry their own tables.
pub struct GrammarTable {
    grammars: HashMap<String, Grammar>,
}

impl GrammarTable {
    /// Create a table preloaded with the built-in grammars
    pub fn new() -> Self {
        let mut table = Self::empty();
        for grammar in builtin::all_grammars() {
            table.add_grammar(grammar);
        }
        table
    }

    /// Create a table with no grammars
    pub fn empty() -> Self {
        Self {
            grammars: HashMap::new(),
        }
    }

    /// Register a grammar under its language name
    pub fn add_grammar(&mut self, grammar: Grammar) {
        self.grammars.insert(grammar.name().to_string(), grammar);
    }

    /// Get a grammar by language name
    pub fn lookup(&self, name: &str) -> Option<&Grammar> {
        self.grammars.get(name)
    }

    /// List registered languages, sorted
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.grammars.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for GrammarTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::wrap;

    #[test]
    fn test_lookup_builtin() {
        let table = GrammarTable::new();
        assert!(table.lookup("javascript").is_some());
        assert!(table.lookup("lolcode").is_none());
    }

    #[test]
    fn test_empty_table_has_no_languages() {
        let table = GrammarTable::empty();
        assert!(table.lookup("javascript").is_none());
        assert!(table.list_languages().is_empty());
    }

    #[test]
    fn test_add_grammar_registers_by_name() {
        let mut table = GrammarTable::empty();
        table.add_grammar(Grammar::new("test"));
        assert_eq!(table.lookup("test").map(|g| g.name()), Some("test"));
    }

    #[test]
    fn test_rules_keep_insertion_order() {
        let mut grammar = Grammar::new("test");
        grammar.add_rule(Rule::new("first", r"\ba\b", wrap("acc-t-a")).unwrap());
        grammar.add_rule(Rule::new("second", r"\bb\b", wrap("acc-t-b")).unwrap());
        let names: Vec<_> = grammar.rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_grammar_is_debug_formattable() {
        let mut grammar = Grammar::new("test");
        grammar.add_rule(Rule::new("keyword", r"\bif\b", wrap("acc-t-keyword")).unwrap());
        let rendered = format!("{:?}", grammar);
        assert!(rendered.contains("test"));
        assert!(rendered.contains("keyword"));
    }

    #[test]
    fn test_list_languages_sorted() {
        let mut table = GrammarTable::empty();
        table.add_grammar(Grammar::new("zig"));
        table.add_grammar(Grammar::new("ada"));
        assert_eq!(table.list_languages(), ["ada", "zig"]);
    }
}
