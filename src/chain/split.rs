//! Splitting raw input into subject and chain.

use tracing::debug;

use super::tokenizer::ChainTokenizer;

/// Raw input divided at one separator occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitInput<'a> {
    pub subject: &'a str,
    /// Text after the separator, `None` when the input has no separator.
    pub chain: Option<&'a str>,
}

/// Divide `input` at a separator occurrence.
///
/// The chain starts at the earliest occurrence whose remainder is made only
/// of command tokens, whitespace and separator characters. Without such an
/// occurrence the last one is used. Everything before the chosen occurrence,
/// including earlier separators, is the subject.
pub fn split_input<'a>(input: &'a str, separator: &str, tokenizer: &ChainTokenizer) -> SplitInput<'a> {
    if separator.is_empty() {
        return SplitInput {
            subject: input,
            chain: None,
        };
    }

    let positions: Vec<usize> = input.match_indices(separator).map(|(at, _)| at).collect();
    let Some(&last) = positions.last() else {
        return SplitInput {
            subject: input,
            chain: None,
        };
    };

    let mut scan = tokenizer.clean_scan(input, |c: char| {
        c.is_whitespace() || separator.contains(c)
    });
    let at = positions
        .iter()
        .copied()
        .find(|&at| scan.is_clean_from(at + separator.len()))
        .unwrap_or(last);

    debug!(at, occurrences = positions.len(), "split input at separator");
    SplitInput {
        subject: &input[..at],
        chain: Some(&input[at + separator.len()..]),
    }
}
