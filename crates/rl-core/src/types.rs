use std::fmt;

use serde::{Deserialize, Serialize};

/// A ground literal: predicate name plus positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedLiteral {
    pub head: String,
    pub arguments: Vec<String>,
}

impl ParsedLiteral {
    pub fn new(head: impl Into<String>, arguments: Vec<String>) -> Self {
        Self { head: head.into(), arguments }
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

impl fmt::Display for ParsedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}).", self.head, self.arguments.join(","))
    }
}

/// Which of the two code spaces a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Head,
    Argument,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head => f.write_str("predicate"),
            Self::Argument => f.write_str("constant"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Positive,
    Negative,
    Facts,
}

impl Split {
    /// Union order used when building dictionaries.
    pub const ALL: [Split; 3] = [Split::Positive, Split::Negative, Split::Facts];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Facts => "facts",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positive examples, negative examples and background facts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralCorpus {
    pub positive: Vec<ParsedLiteral>,
    pub negative: Vec<ParsedLiteral>,
    pub facts: Vec<ParsedLiteral>,
}

impl LiteralCorpus {
    pub fn new(
        positive: Vec<ParsedLiteral>,
        negative: Vec<ParsedLiteral>,
        facts: Vec<ParsedLiteral>,
    ) -> Self {
        Self { positive, negative, facts }
    }

    pub fn split(&self, split: Split) -> &[ParsedLiteral] {
        match split {
            Split::Positive => &self.positive,
            Split::Negative => &self.negative,
            Split::Facts => &self.facts,
        }
    }

    pub fn split_mut(&mut self, split: Split) -> &mut Vec<ParsedLiteral> {
        match split {
            Split::Positive => &mut self.positive,
            Split::Negative => &mut self.negative,
            Split::Facts => &mut self.facts,
        }
    }

    /// All literals as `positive ++ negative ++ facts`.
    pub fn iter(&self) -> impl Iterator<Item = &ParsedLiteral> + Clone {
        self.positive.iter().chain(&self.negative).chain(&self.facts)
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len() + self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encoded lines per split, index-aligned with the source corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedCorpus {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub facts: Vec<String>,
}

impl EncodedCorpus {
    pub fn split(&self, split: Split) -> &[String] {
        match split {
            Split::Positive => &self.positive,
            Split::Negative => &self.negative,
            Split::Facts => &self.facts,
        }
    }

    /// Total bytes of the newline-joined output.
    pub fn byte_len(&self) -> usize {
        Split::ALL
            .iter()
            .flat_map(|s| self.split(*s))
            .map(|line| line.len() + 1)
            .sum()
    }
}
