//! JavaScript grammar

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::{escape_with, reclaim, wrap, Rule, Transform};

/// Create the JavaScript grammar
///
/// Rule order is load-bearing: the escape rule must come first so a
/// literal `<` from the source is never read as an engine wrapper, and
/// the string/comment reclaim rules come last so they can revoke
/// keyword-looking tokens tagged inside their spans.
pub fn javascript_grammar() -> Grammar {
    let mut lang = Grammar::new("javascript");

    // escape open html tag
    if let Some(rule) = Rule::new("escape_html_open", "<", escape_with("&lt;")) {
        lang.add_rule(rule);
    }

    // regexp literals
    if let Some(rule) = Rule::new(
        "regexp",
        r"(/.+?/(\s|,|\]|;|/|g|i|m|y))",
        Transform::template("<span class=acc-js-regexp>$1</span>"),
    ) {
        lang.add_rule(rule);
    }

    // common language operators such as conditionals and loops
    if let Some(rule) = Rule::new(
        "operation",
        r"\b(if|else|continue|switch|case|default|break|return|for|try|catch|throw)\b",
        wrap("acc-js-operation"),
    ) {
        lang.add_rule(rule);
    }

    // variable assignment keywords
    if let Some(rule) = Rule::new(
        "declaration",
        r"\b(function|var|const|in|new|this|prototype)\b",
        wrap("acc-js-declaration"),
    ) {
        lang.add_rule(rule);
    }

    // frequently used methods
    if let Some(rule) = Rule::new(
        "special",
        r"\b(getElementById|getElementsByClassName|getElementsByTagName|getElementsByName|typeof|instanceof|hasOwnProperty)\b",
        wrap("acc-js-special"),
    ) {
        lang.add_rule(rule);
    }

    // common dom methods
    if let Some(rule) = Rule::new(
        "dom",
        r"\b(innerHTML|createElement|parentNode|appendChild|replaceChild)\b",
        wrap("acc-js-dom"),
    ) {
        lang.add_rule(rule);
    }

    // globals
    if let Some(rule) = Rule::new(
        "global",
        r"\b(window|console|document)\b",
        wrap("acc-js-global"),
    ) {
        lang.add_rule(rule);
    }

    // basic types and special value keywords
    if let Some(rule) = Rule::new(
        "type",
        r"\b(Array|String|Function|Object|Number|Date|Boolean|Error|RegExp|Math|null|undefined|true|false)\b",
        wrap("acc-js-type"),
    ) {
        lang.add_rule(rule);
    }

    // numeric values (including hexadecimal)
    if let Some(rule) = Rule::new(
        "number",
        r"\b(0x[0-9a-fA-F]+|\d+(?:\.\d+)?)\b",
        wrap("acc-js-numeric"),
    ) {
        lang.add_rule(rule);
    }

    // double/single quoted strings; reclaims tokens tagged inside
    if let Some(rule) = Rule::new("string", r#"(".*?"|'.*?')"#, reclaim("acc-js-string")) {
        lang.add_rule(rule);
    }

    // line and block comments; reclaims tokens tagged inside
    if let Some(rule) = Rule::new(
        "comment",
        r"(//[^\n]*|/\*(?s:.)*?\*/)",
        reclaim("acc-js-comment"),
    ) {
        lang.add_rule(rule);
    }

    lang
}
