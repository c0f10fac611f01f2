//! accent - rule-based source code highlighting
//!
//! Decorates plain-text source code with `<span class=acc-...>` markup
//! so a stylesheet can colorize syntax. Highlighting is driven by
//! grammars: ordered lists of regex rules applied as a pipeline of
//! global substitutions. Rule order encodes override priority; reclaim
//! rules (strings, comments) strip markup that earlier rules tagged
//! inside their span.
//!
//! ```
//! use accent::{Highlighter, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let block = doc.add_block("example", "var x = 1;");
//!
//! let highlighter = Highlighter::new();
//! highlighter
//!     .highlight(&mut doc, "example", "javascript", "dark")
//!     .unwrap();
//!
//! assert!(doc.block(block).text.contains("acc-js-declaration"));
//! assert_eq!(doc.block(block).container.as_deref(), Some("acc-dark"));
//! ```
//!
//! The engine is pattern-based, not a tokenizer: re-applying a grammar
//! to already-decorated text is not idempotent, and string/comment
//! nesting is handled only as far as the reclaim mechanism reaches.

mod document;
mod error;
mod highlighter;
mod pipeline;
mod syntax;

pub use document::{BlockId, HostDocument, MemoryBlock, MemoryDocument};
pub use error::{AccentError, Result};
pub use highlighter::{Highlighter, THEMES};
pub use syntax::engine;
pub use syntax::{
    all_grammars, escape_with, load_grammar, parse_grammar, reclaim, wrap, Grammar, GrammarFile,
    GrammarTable, Rule, RuleEntry, RuleMode, Transform, TransformFn,
};
