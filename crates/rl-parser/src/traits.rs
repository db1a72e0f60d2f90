use std::path::Path;

use rl_core::error::{Result, RlError};
use rl_core::types::ParsedLiteral;

/// Source of newline-delimited literals.
pub trait LiteralSource {
    /// Parse a whole text, one literal per line.
    fn parse_content(&self, content: &str) -> Result<Vec<ParsedLiteral>>;

    /// Read a file fully, then parse it.
    fn parse_file(&self, path: &Path) -> Result<Vec<ParsedLiteral>> {
        let content = std::fs::read_to_string(path).map_err(|e| RlError::io(path, e))?;
        let literals = self.parse_content(&content)?;
        tracing::debug!(path = %path.display(), count = literals.len(), "parsed literal file");
        Ok(literals)
    }
}
