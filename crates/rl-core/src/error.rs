use std::path::PathBuf;

use thiserror::Error;

use crate::types::TokenKind;

#[derive(Error, Debug)]
pub enum RlError {
    #[error("Malformed literal: {literal:?}")]
    Syntax { literal: String },
    #[error("Malformed literal at line {index}: {literal:?}")]
    SyntaxAt { index: usize, literal: String },
    #[error("Could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Undefined {kind} token: {token:?}")]
    Lookup { kind: TokenKind, token: String },
    #[error("Undefined {kind} code: {code}")]
    UnknownCode { kind: TokenKind, code: usize },
    #[error("Malformed encoded literal: {0:?}")]
    Malformed(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RlError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Attach a 1-based line number to a single-literal syntax error.
    pub fn at_line(self, index: usize) -> Self {
        match self {
            Self::Syntax { literal } => Self::SyntaxAt { index, literal },
            other => other,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. } | Self::SyntaxAt { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. } | Self::UnknownCode { .. })
    }
}

pub type Result<T> = std::result::Result<T, RlError>;
