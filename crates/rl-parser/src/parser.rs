//! Literal parser: raw line → (head, arguments).

use rl_core::config::ReaderConfig;
use rl_core::error::{Result, RlError};
use rl_core::types::ParsedLiteral;

use crate::syntax::LiteralSyntax;
use crate::traits::LiteralSource;

#[derive(Debug, Clone, Default)]
pub struct LiteralParser {
    syntax: LiteralSyntax,
    reader: ReaderConfig,
}

impl LiteralParser {
    pub fn new() -> Self { Self::default() }

    pub fn with_reader(reader: ReaderConfig) -> Self {
        Self { syntax: LiteralSyntax::new(), reader }
    }

    pub fn syntax(&self) -> &LiteralSyntax {
        &self.syntax
    }

    /// Parse one literal, e.g. `father(harrypotter, jamespotter).`
    pub fn parse(&self, raw: &str) -> Result<ParsedLiteral> {
        self.syntax.validate(raw)?;

        let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let body = stripped.split(')').next().unwrap_or_default();
        let (head, args) = body
            .split_once('(')
            .ok_or_else(|| RlError::Syntax { literal: raw.to_string() })?;

        Ok(ParsedLiteral::new(head, args.split(',').map(String::from).collect()))
    }

    /// Parse every literal in order. The first malformed one fails the batch
    /// and is reported with its 1-based position.
    pub fn parse_all<'a, I>(&self, raws: I) -> Result<Vec<ParsedLiteral>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        raws.into_iter()
            .enumerate()
            .map(|(i, raw)| self.parse(raw).map_err(|e| e.at_line(i + 1)))
            .collect()
    }
}

impl LiteralSource for LiteralParser {
    fn parse_content(&self, content: &str) -> Result<Vec<ParsedLiteral>> {
        let mut literals = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if self.reader.skip_blank_lines && line.trim().is_empty() {
                continue;
            }
            literals.push(self.parse(line).map_err(|e| e.at_line(i + 1))?);
        }
        Ok(literals)
    }
}
