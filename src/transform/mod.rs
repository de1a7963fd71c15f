//! Transform library.
//!
//! Every transform is a pure function of its input string and arguments.
//! Only URI decoding and JSON formatting can fail.

mod case;
mod json;
mod text;
mod translit;
mod uri;

use thiserror::Error;

pub use case::{capitalize, to_camel_case, to_lower_case, to_pascal_case, to_snake_case, to_upper_case};
pub use json::{DEFAULT_INDENT, Indent, pretty_json};
pub use text::{replace, reverse, trim};
pub use translit::{is_word_char, slugify, transliterate, words};
pub use uri::{decode_uri, encode_uri};

/// Default joiner for [`slugify`].
pub const DEFAULT_SLUG_REPLACEMENT: &str = "-";

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("malformed percent-escape at byte {0}")]
    MalformedEscape(usize),

    #[error("percent-escape at byte {0} is not valid UTF-8")]
    InvalidUtf8Escape(usize),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid indent '{0}', expected 't' or a number of spaces")]
    InvalidIndent(String),
}
