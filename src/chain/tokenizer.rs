//! Chain tokenizer.

use std::collections::HashMap;

use regex::Regex;
use tracing::{debug, trace};

use crate::commands::{CommandRegistry, RegistryError};

/// One command invocation inside a chain: a key, optionally followed by
/// quoted arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainToken<'a> {
    raw: &'a str,
}

impl<'a> ChainToken<'a> {
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// The command key, i.e. the first character.
    pub fn key(&self) -> Option<char> {
        self.raw.chars().next()
    }

    /// Quoted literals after the key, with their quotes stripped. Nothing is
    /// unescaped.
    pub fn arguments(&self) -> Vec<&'a str> {
        let mut args = Vec::new();
        let key_len = self.key().map_or(0, char::len_utf8);
        let mut rest = &self.raw[key_len..];

        while let Some(open) = rest.find(['\'', '"']) {
            let quote = &rest[open..open + 1];
            let body = &rest[open + 1..];
            let Some(close) = body.find(quote) else {
                break;
            };
            args.push(&body[..close]);
            rest = &body[close + 1..];
        }
        args
    }
}

/// Splits a chain segment into tokens using a pattern derived from the
/// registry, so every token's key is registered.
#[derive(Debug, Clone)]
pub struct ChainTokenizer {
    pattern: Regex,
    /// Same alternatives, only matching at the start of the haystack.
    anchored: Regex,
}

impl ChainTokenizer {
    pub fn new(registry: &CommandRegistry) -> Result<Self, RegistryError> {
        let source = registry.token_pattern();
        let pattern = Regex::new(&source)?;
        let anchored = Regex::new(&format!("^(?:{source})"))?;
        let tokenizer = Self { pattern, anchored };
        debug!(pattern = tokenizer.pattern(), "built chain tokenizer");
        Ok(tokenizer)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Left-to-right, non-overlapping matches. Characters outside any match
    /// are skipped.
    pub fn tokenize<'a>(&self, chain: &'a str) -> Vec<ChainToken<'a>> {
        let tokens: Vec<_> = self
            .pattern
            .find_iter(chain)
            .filter(|m| !m.is_empty())
            .map(|m| ChainToken { raw: m.as_str() })
            .collect();
        trace!(chain, ?tokens, "tokenized chain");
        tokens
    }

    /// Whether `chain` holds at least one token and nothing but tokens and
    /// characters accepted by `is_glue`.
    pub fn is_clean(&self, chain: &str, is_glue: impl Fn(char) -> bool) -> bool {
        self.clean_scan(chain, is_glue).is_clean_from(0)
    }

    /// Cleanliness checks for many suffixes of one `text`, sharing work
    /// between overlapping suffixes.
    pub fn clean_scan<'t, 'a, G>(&'t self, text: &'a str, is_glue: G) -> CleanScan<'t, 'a, G>
    where
        G: Fn(char) -> bool,
    {
        CleanScan {
            tokenizer: self,
            text,
            is_glue,
            memo: HashMap::new(),
        }
    }

    /// Byte length of the non-empty token starting exactly at the front of
    /// `text`.
    fn token_len(&self, text: &str) -> Option<usize> {
        self.anchored
            .find(text)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// What follows a position, as seen by [`ChainTokenizer::tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    /// A character outside any token and not glue.
    Dirty,
    GlueOnly,
    /// Only tokens and glue, with at least one token.
    Tokens,
}

/// Memoized walk over the suffixes of one text.
///
/// At each position the tokenizer either matches a token there (leftmost
/// match) or the character is skipped, which `tokenize` would do as well.
/// The outcome only depends on the position, so every position is walked at
/// most once across all queries.
pub struct CleanScan<'t, 'a, G> {
    tokenizer: &'t ChainTokenizer,
    text: &'a str,
    is_glue: G,
    memo: HashMap<usize, Tail>,
}

impl<G: Fn(char) -> bool> CleanScan<'_, '_, G> {
    /// Whether `text[start..]` is clean in the sense of
    /// [`ChainTokenizer::is_clean`]. `start` must be a char boundary.
    pub fn is_clean_from(&mut self, start: usize) -> bool {
        self.tail(start) == Tail::Tokens
    }

    fn tail(&mut self, start: usize) -> Tail {
        // (position, whether a token starts there)
        let mut path = Vec::new();
        let mut at = start;

        let mut tail = loop {
            if let Some(&known) = self.memo.get(&at) {
                break known;
            }
            let rest = &self.text[at..];
            let Some(c) = rest.chars().next() else {
                break Tail::GlueOnly;
            };
            if let Some(len) = self.tokenizer.token_len(rest) {
                path.push((at, true));
                at += len;
            } else if (self.is_glue)(c) {
                path.push((at, false));
                at += c.len_utf8();
            } else {
                break Tail::Dirty;
            }
        };
        self.memo.insert(at, tail);

        for (position, is_token) in path.into_iter().rev() {
            if is_token && tail == Tail::GlueOnly {
                tail = Tail::Tokens;
            }
            self.memo.insert(position, tail);
        }
        tail
    }
}
