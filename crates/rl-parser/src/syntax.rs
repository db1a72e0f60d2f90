//! Literal syntax validation.

use regex::Regex;
use rl_core::error::{Result, RlError};

const LITERAL_PATTERN: &str = r"^[A-Za-z0-9]+\([A-Za-z0-9]+(?:, *[A-Za-z0-9]+)*\)\.$";

/// Compiled literal grammar. Build once and share; validation never mutates it.
#[derive(Debug, Clone)]
pub struct LiteralSyntax {
    pattern: Regex,
}

impl LiteralSyntax {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(LITERAL_PATTERN).expect("literal pattern compiles"),
        }
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.pattern.is_match(raw)
    }

    /// Reject anything that is not exactly one well-formed ground literal.
    pub fn validate(&self, raw: &str) -> Result<()> {
        if self.is_valid(raw) {
            Ok(())
        } else {
            Err(RlError::Syntax { literal: raw.to_string() })
        }
    }
}

impl Default for LiteralSyntax {
    fn default() -> Self { Self::new() }
}
