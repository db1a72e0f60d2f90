//! Literal ↔ integer-code line encoding.

use rl_core::error::{Result, RlError};
use rl_core::types::{EncodedCorpus, LiteralCorpus, ParsedLiteral};

use crate::dictionary::Dictionaries;

const SEPARATOR: char = ',';

/// `father(harrypotter,jamespotter).` → `"1,0,2"`.
pub fn encode_literal(literal: &ParsedLiteral, dicts: &Dictionaries) -> Result<String> {
    let mut line = dicts.head_code(&literal.head)?.to_string();
    for arg in &literal.arguments {
        line.push(SEPARATOR);
        line.push_str(&dicts.arg_code(arg)?.to_string());
    }
    Ok(line)
}

/// Encode a sequence, index-for-index.
pub fn encode(literals: &[ParsedLiteral], dicts: &Dictionaries) -> Result<Vec<String>> {
    literals.iter().map(|lit| encode_literal(lit, dicts)).collect()
}

/// Encode each split of the corpus independently.
pub fn compress_all(corpus: &LiteralCorpus, dicts: &Dictionaries) -> Result<EncodedCorpus> {
    Ok(EncodedCorpus {
        positive: encode(&corpus.positive, dicts)?,
        negative: encode(&corpus.negative, dicts)?,
        facts: encode(&corpus.facts, dicts)?,
    })
}

/// Inverse of [`encode_literal`].
pub fn decode_line(line: &str, dicts: &Dictionaries) -> Result<ParsedLiteral> {
    let codes = line
        .split(SEPARATOR)
        .map(|field| field.trim().parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| RlError::Malformed(line.to_string()))?;

    let (head, args) = match codes.split_first() {
        Some((head, args)) if !args.is_empty() => (*head, args),
        _ => return Err(RlError::Malformed(line.to_string())),
    };

    let arguments = args
        .iter()
        .map(|code| dicts.arg_token(*code).map(String::from))
        .collect::<Result<Vec<_>>>()?;
    Ok(ParsedLiteral::new(dicts.head_token(head)?, arguments))
}

pub fn decode<S: AsRef<str>>(lines: &[S], dicts: &Dictionaries) -> Result<Vec<ParsedLiteral>> {
    lines.iter().map(|line| decode_line(line.as_ref(), dicts)).collect()
}

pub fn decompress_all(encoded: &EncodedCorpus, dicts: &Dictionaries) -> Result<LiteralCorpus> {
    Ok(LiteralCorpus::new(
        decode(&encoded.positive, dicts)?,
        decode(&encoded.negative, dicts)?,
        decode(&encoded.facts, dicts)?,
    ))
}
