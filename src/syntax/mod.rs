//! Syntax highlighting core
//!
//! This module provides the rule-based highlighting machinery:
//! - Pattern rules and the wrap/reclaim/escape transform constructors
//! - Grammars (ordered rule lists) and the grammar table
//! - The sequential substitution engine
//! - Built-in grammars and TOML-defined user grammars

mod builtin;
mod config_file;
pub mod engine;
mod grammar;
mod rules;

pub use builtin::all_grammars;
pub use config_file::{load_grammar, parse_grammar, GrammarFile, RuleEntry, RuleMode};
pub use grammar::{Grammar, GrammarTable};
pub use rules::{escape_with, reclaim, wrap, Rule, Transform, TransformFn};
