//! Shared data model, errors and configuration for relmin.

pub mod config;
pub mod error;
pub mod types;

pub use config::RelminConfig;
pub use error::{Result, RlError};
pub use types::{EncodedCorpus, LiteralCorpus, ParsedLiteral, Split, TokenKind};
