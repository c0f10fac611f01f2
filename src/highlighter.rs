//! Batch driver
//!
//! Resolves a group identifier to blocks and runs the per-block
//! pipeline over each. Owns input validation: every failure mode is
//! raised before any block is touched, so bad input has no partial
//! side effects. Across blocks there is no atomicity claim; blocks
//! already processed stay processed.

use crate::document::HostDocument;
use crate::error::{AccentError, Result};
use crate::pipeline;
use crate::syntax::GrammarTable;

/// Theme presets recognized by the driver
pub const THEMES: [&str; 2] = ["dark", "light"];

/// Batch highlighting driver
///
/// Owns a grammar table; the table is fixed after construction.
pub struct Highlighter {
    table: GrammarTable,
}

impl Highlighter {
    /// Create a driver with the built-in grammars
    pub fn new() -> Self {
        Self {
            table: GrammarTable::new(),
        }
    }

    /// Create a driver over an explicit grammar table
    pub fn with_table(table: GrammarTable) -> Self {
        Self { table }
    }

    /// The driver's grammar table
    pub fn table(&self) -> &GrammarTable {
        &self.table
    }

    /// Highlight every block in a group
    ///
    /// All three parameters must be non-empty; `theme` must be a known
    /// preset; `language` must have a registered grammar. A group with
    /// zero blocks is not an error, just zero pipeline runs.
    pub fn highlight(
        &self,
        doc: &mut dyn HostDocument,
        group: &str,
        language: &str,
        theme: &str,
    ) -> Result<()> {
        if group.is_empty() || language.is_empty() || theme.is_empty() {
            return Err(AccentError::InvalidArgument);
        }

        if !THEMES.contains(&theme) {
            return Err(AccentError::UnknownTheme(theme.to_string()));
        }

        let grammar = self
            .table
            .lookup(language)
            .ok_or_else(|| AccentError::UnknownLanguage(language.to_string()))?;

        for block in doc.blocks_in_group(group) {
            pipeline::run(doc, block, grammar, theme);
        }

        Ok(())
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
