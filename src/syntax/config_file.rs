//! User-defined grammars loaded from TOML
//!
//! A grammar file declares a language and an ordered list of rules:
//!
//! ```toml
//! language = "lolcode"
//! prefix = "lol"
//!
//! [[rules]]
//! name = "keyword"
//! pattern = "\\b(HAI|KTHXBYE|VISIBLE)\\b"
//! class = "keyword"
//!
//! [[rules]]
//! name = "string"
//! pattern = "\".*?\""
//! class = "string"
//! mode = "reclaim"
//! ```
//!
//! Rule order in the file is application order: reclaim rules belong
//! after the wrap rules whose false positives they must erase. The
//! mandatory escape rule is prepended automatically, so loaded grammars
//! keep the escaping-first invariant. Pattern validity is checked here,
//! at load time, never during highlighting.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AccentError, Result};
use super::grammar::Grammar;
use super::rules::{escape_with, reclaim, wrap, Rule, Transform};

/// Top-level grammar file structure
#[derive(Deserialize)]
pub struct GrammarFile {
    /// Language name the grammar registers under
    pub language: String,
    /// Short tag used in style classes (defaults to the language name)
    pub prefix: Option<String>,
    /// Rules in application order
    pub rules: Vec<RuleEntry>,
}

/// One rule entry in a grammar file
#[derive(Deserialize)]
pub struct RuleEntry {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub mode: RuleMode,
    /// Token class, required for wrap and reclaim modes
    pub class: Option<String>,
    /// Replacement string, required for template mode
    pub replacement: Option<String>,
}

/// How a rule's matches are rewritten
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleMode {
    #[default]
    Wrap,
    Reclaim,
    Template,
}

/// Load a grammar from a TOML file
pub fn load_grammar(path: &Path) -> Result<Grammar> {
    let contents = fs::read_to_string(path)?;
    parse_grammar(&contents)
}

/// Parse a grammar from TOML text
pub fn parse_grammar(contents: &str) -> Result<Grammar> {
    let file: GrammarFile = toml::from_str(contents)?;
    let tag = file.prefix.as_deref().unwrap_or(&file.language);

    let mut grammar = Grammar::new(&file.language);

    // literal '<' from the source must never read as an engine wrapper
    if let Some(rule) = Rule::new("escape_html_open", "<", escape_with("&lt;")) {
        grammar.add_rule(rule);
    }

    for entry in &file.rules {
        let transform = build_transform(entry, tag)?;
        let rule = Rule::new(&entry.name, &entry.pattern, transform)
            .ok_or_else(|| AccentError::BadRule(entry.name.clone()))?;
        grammar.add_rule(rule);
    }

    Ok(grammar)
}

fn build_transform(entry: &RuleEntry, tag: &str) -> Result<Transform> {
    match entry.mode {
        RuleMode::Wrap => Ok(wrap(&style_class(tag, require_class(entry)?))),
        RuleMode::Reclaim => Ok(reclaim(&style_class(tag, require_class(entry)?))),
        RuleMode::Template => {
            let replacement = entry
                .replacement
                .as_deref()
                .ok_or_else(|| AccentError::BadRule(entry.name.clone()))?;
            Ok(Transform::template(replacement))
        }
    }
}

fn require_class<'a>(entry: &'a RuleEntry) -> Result<&'a str> {
    entry
        .class
        .as_deref()
        .ok_or_else(|| AccentError::BadRule(entry.name.clone()))
}

fn style_class(tag: &str, class: &str) -> String {
    format!("acc-{}-{}", tag, class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::engine;

    const LOLCODE: &str = r#"
language = "lolcode"
prefix = "lol"

[[rules]]
name = "keyword"
pattern = "\\b(HAI|KTHXBYE|VISIBLE)\\b"
class = "keyword"

[[rules]]
name = "string"
pattern = "\".*?\""
class = "string"
mode = "reclaim"
"#;

    #[test]
    fn test_parse_grammar() {
        let grammar = parse_grammar(LOLCODE).unwrap();
        assert_eq!(grammar.name(), "lolcode");
        // escape rule + two declared rules
        assert_eq!(grammar.rules().len(), 3);
        assert_eq!(grammar.rules()[0].name, "escape_html_open");
    }

    #[test]
    fn test_loaded_grammar_highlights() {
        let grammar = parse_grammar(LOLCODE).unwrap();
        let out = engine::apply(&grammar, r#"VISIBLE "HAI THERE""#);
        assert!(out.contains("<span class=acc-lol-keyword>VISIBLE</span>"));
        // reclaim erased the keyword tagged inside the string
        assert!(out.contains(r#"<span class=acc-lol-string>"HAI THERE"</span>"#));
    }

    #[test]
    fn test_prefix_defaults_to_language_name() {
        let grammar = parse_grammar(
            r#"
language = "ini"

[[rules]]
name = "section"
pattern = "\\[.*?\\]"
class = "section"
"#,
        )
        .unwrap();
        let out = engine::apply(&grammar, "[core]");
        assert!(out.contains("<span class=acc-ini-section>[core]</span>"));
    }

    #[test]
    fn test_template_mode() {
        let grammar = parse_grammar(
            r#"
language = "shouty"

[[rules]]
name = "shout"
pattern = "(\\w+)!"
mode = "template"
replacement = "<span class=acc-shouty-shout>$1!</span>"
"#,
        )
        .unwrap();
        let out = engine::apply(&grammar, "wow! ok");
        assert!(out.contains("<span class=acc-shouty-shout>wow!</span>"));
    }

    #[test]
    fn test_bad_pattern_reported_by_rule_name() {
        let err = parse_grammar(
            r#"
language = "broken"

[[rules]]
name = "unclosed"
pattern = "("
class = "x"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, AccentError::BadRule(name) if name == "unclosed"));
    }

    #[test]
    fn test_missing_class_is_an_error() {
        let err = parse_grammar(
            r#"
language = "broken"

[[rules]]
name = "classless"
pattern = "x"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, AccentError::BadRule(name) if name == "classless"));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = parse_grammar("language = ").unwrap_err();
        assert!(matches!(err, AccentError::GrammarParse(_)));
    }
}
