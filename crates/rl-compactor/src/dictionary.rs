//! Frequency-ranked token → code dictionaries.

use std::collections::HashMap;

use rl_core::error::{Result, RlError};
use rl_core::types::{LiteralCorpus, ParsedLiteral, TokenKind};

/// Dense token ↔ code mapping. The most frequent token gets code 0; equal
/// counts keep first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankDictionary {
    codes: HashMap<String, usize>,
    tokens: Vec<String>,
    counts: Vec<usize>,
}

impl RankDictionary {
    /// Rank tokens by occurrence count, one increment per occurrence.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counter: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();
        for token in tokens {
            let count = counter.entry(token).or_insert(0);
            if *count == 0 {
                first_seen.push(token);
            }
            *count += 1;
        }

        let mut ranked: Vec<(&str, usize)> = first_seen
            .into_iter()
            .map(|token| (token, counter[token]))
            .collect();
        // sort_by is stable: ties stay in first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let mut dict = Self::default();
        for (code, (token, count)) in ranked.into_iter().enumerate() {
            dict.codes.insert(token.to_string(), code);
            dict.tokens.push(token.to_string());
            dict.counts.push(count);
        }
        dict
    }

    pub fn code(&self, token: &str) -> Option<usize> {
        self.codes.get(token).copied()
    }

    pub fn token(&self, code: usize) -> Option<&str> {
        self.tokens.get(code).map(String::as_str)
    }

    /// Occurrences of `token` in the corpus the dictionary was built from.
    pub fn count(&self, token: &str) -> Option<usize> {
        self.code(token).map(|code| self.counts[code])
    }

    pub fn len(&self) -> usize { self.tokens.len() }

    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }

    /// `(code, token)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tokens.iter().enumerate().map(|(code, token)| (code, token.as_str()))
    }
}

/// The two independent code spaces of one corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionaries {
    pub heads: RankDictionary,
    pub args: RankDictionary,
}

impl Dictionaries {
    /// Build both dictionaries over `positive ++ negative ++ facts`.
    pub fn build(corpus: &LiteralCorpus) -> Self {
        Self::from_literals(corpus.iter())
    }

    fn from_literals<'a, I>(literals: I) -> Self
    where
        I: Iterator<Item = &'a ParsedLiteral> + Clone,
    {
        let heads = RankDictionary::from_tokens(literals.clone().map(|lit| lit.head.as_str()));
        let args = RankDictionary::from_tokens(
            literals.flat_map(|lit| lit.arguments.iter().map(String::as_str)),
        );
        tracing::debug!(predicates = heads.len(), constants = args.len(), "built dictionaries");
        Self { heads, args }
    }

    pub fn head_code(&self, head: &str) -> Result<usize> {
        self.heads.code(head).ok_or_else(|| RlError::Lookup {
            kind: TokenKind::Head,
            token: head.to_string(),
        })
    }

    pub fn arg_code(&self, arg: &str) -> Result<usize> {
        self.args.code(arg).ok_or_else(|| RlError::Lookup {
            kind: TokenKind::Argument,
            token: arg.to_string(),
        })
    }

    pub fn head_token(&self, code: usize) -> Result<&str> {
        self.heads.token(code).ok_or(RlError::UnknownCode { kind: TokenKind::Head, code })
    }

    pub fn arg_token(&self, code: usize) -> Result<&str> {
        self.args.token(code).ok_or(RlError::UnknownCode { kind: TokenKind::Argument, code })
    }
}

/// Build head and argument dictionaries from the three collections jointly.
pub fn build_dictionaries(
    positive: &[ParsedLiteral],
    negative: &[ParsedLiteral],
    facts: &[ParsedLiteral],
) -> Dictionaries {
    Dictionaries::from_literals(positive.iter().chain(negative).chain(facts))
}
