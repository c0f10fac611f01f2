//! Per-block highlighting pipeline
//!
//! Composes the presentation step and the highlight engine into one
//! operation per block. The presentation step never reads decorated
//! text, so its order relative to the highlight step does not matter.

use crate::document::{BlockId, HostDocument};
use crate::syntax::{engine, Grammar};

/// Format and highlight one block
///
/// Reads the block's text once, applies the grammar, writes the result
/// back once.
pub fn run(doc: &mut dyn HostDocument, block: BlockId, grammar: &Grammar, theme: &str) {
    doc.wrap_block(block, theme);
    let text = doc.text(block);
    let decorated = engine::apply(grammar, &text);
    doc.set_text(block, decorated);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::syntax::{wrap, Rule};

    fn keyword_grammar() -> Grammar {
        let mut grammar = Grammar::new("test");
        if let Some(rule) = Rule::new("keyword", r"\blet\b", wrap("acc-t-keyword")) {
            grammar.add_rule(rule);
        }
        grammar
    }

    #[test]
    fn test_run_formats_and_decorates() {
        let mut doc = MemoryDocument::new();
        let id = doc.add_block("code", "let x = 1;");

        run(&mut doc, id, &keyword_grammar(), "dark");

        let block = doc.block(id);
        assert_eq!(block.container.as_deref(), Some("acc-dark"));
        assert_eq!(block.text, "<span class=acc-t-keyword>let</span> x = 1;");
    }

    #[test]
    fn test_run_with_empty_grammar_keeps_text() {
        let mut doc = MemoryDocument::new();
        let id = doc.add_block("code", "plain");

        run(&mut doc, id, &Grammar::new("empty"), "light");

        let block = doc.block(id);
        assert_eq!(block.container.as_deref(), Some("acc-light"));
        assert_eq!(block.text, "plain");
    }
}
