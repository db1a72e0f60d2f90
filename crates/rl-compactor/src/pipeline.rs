//! Minimizer pipeline: parse, rank, encode.

use rl_core::error::Result;
use rl_core::types::{EncodedCorpus, LiteralCorpus, ParsedLiteral, Split};
use rl_parser::{LiteralParser, LiteralSource};

use crate::dictionary::Dictionaries;
use crate::encoder;

/// Raw newline-delimited text of the three splits.
#[derive(Debug, Clone, Default)]
pub struct RawCorpus {
    pub positive: String,
    pub negative: String,
    pub facts: String,
}

impl RawCorpus {
    pub fn split(&self, split: Split) -> &str {
        match split {
            Split::Positive => &self.positive,
            Split::Negative => &self.negative,
            Split::Facts => &self.facts,
        }
    }

    pub fn byte_len(&self) -> usize {
        self.positive.len() + self.negative.len() + self.facts.len()
    }
}

/// Minimization result with statistics.
#[derive(Debug, Clone)]
pub struct MinimizeResult {
    pub encoded: EncodedCorpus,
    pub dictionaries: Dictionaries,
    pub original_len: usize,
    pub minimized_len: usize,
    pub reduction_pct: f64,
}

impl MinimizeResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.minimized_len as f64 / self.original_len as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct MinimizerPipeline {
    parser: LiteralParser,
}

impl MinimizerPipeline {
    pub fn new(parser: LiteralParser) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &LiteralParser {
        &self.parser
    }

    /// Parse all three splits. Any malformed line fails the whole corpus.
    pub fn parse(&self, raw: &RawCorpus) -> Result<LiteralCorpus> {
        let mut corpus = LiteralCorpus::default();
        for split in Split::ALL {
            let literals = self.parser.parse_content(raw.split(split))?;
            tracing::debug!(%split, literals = %render(&literals), "parsed");
            *corpus.split_mut(split) = literals;
        }
        Ok(corpus)
    }

    /// Minimize raw text.
    pub fn minimize(&self, raw: &RawCorpus) -> Result<MinimizeResult> {
        let corpus = self.parse(raw)?;
        Self::finish(&corpus, raw.byte_len())
    }

    /// Minimize an already parsed corpus. The original size is that of the
    /// canonical `head(a,b).` rendering.
    pub fn minimize_corpus(&self, corpus: &LiteralCorpus) -> Result<MinimizeResult> {
        let original_len = corpus.iter().map(|lit| lit.to_string().len() + 1).sum();
        Self::finish(corpus, original_len)
    }

    /// Reverse the encoding of a previous run.
    pub fn expand(&self, encoded: &EncodedCorpus, dicts: &Dictionaries) -> Result<LiteralCorpus> {
        encoder::decompress_all(encoded, dicts)
    }

    fn finish(corpus: &LiteralCorpus, original_len: usize) -> Result<MinimizeResult> {
        let dictionaries = Dictionaries::build(corpus);
        let encoded = encoder::compress_all(corpus, &dictionaries)?;

        let minimized_len = encoded.byte_len();
        let reduction_pct = if original_len > 0 {
            (original_len as f64 - minimized_len as f64) / original_len as f64 * 100.0
        } else {
            0.0
        };

        Ok(MinimizeResult {
            encoded,
            dictionaries,
            original_len,
            minimized_len,
            reduction_pct,
        })
    }
}

fn render(literals: &[ParsedLiteral]) -> String {
    literals.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
