//! Relational literal minimizer.
//!
//! Stages:
//! 1. Parse: validate and split each raw literal (see `rl-parser`)
//! 2. Dictionary: frequency-ranked codes for predicates and constants
//! 3. Encode: rewrite each literal as comma-separated integer codes

pub mod dictionary;
pub mod encoder;
pub mod pipeline;

pub use dictionary::{build_dictionaries, Dictionaries, RankDictionary};
pub use encoder::{compress_all, decode, decode_line, decompress_all, encode, encode_literal};
pub use pipeline::{MinimizeResult, MinimizerPipeline, RawCorpus};
