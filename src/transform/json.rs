//! JSON re-indentation.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::TransformError;

/// Widest indent accepted; larger requests are clamped.
const MAX_INDENT: usize = 10;

pub const DEFAULT_INDENT: &str = "2";

/// Indentation requested by the optional `J` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indent {
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Parse `t` or a non-negative integer. Integers of any length are
    /// accepted and clamped.
    pub fn parse(arg: &str) -> Result<Self, TransformError> {
        if arg == "t" {
            return Ok(Self::Tab);
        }
        let digits = arg.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TransformError::InvalidIndent(arg.to_string()));
        }
        // only overflows past MAX_INDENT
        let spaces = digits.parse::<usize>().unwrap_or(MAX_INDENT);
        Ok(Self::Spaces(spaces.min(MAX_INDENT)))
    }

    fn as_bytes(&self) -> Vec<u8> {
        match self {
            Self::Tab => b"\t".to_vec(),
            Self::Spaces(n) => vec![b' '; *n],
        }
    }
}

pub fn pretty_json(text: &str, indent: &str) -> Result<String, TransformError> {
    let indent = Indent::parse(indent)?;
    let value: Value = serde_json::from_str(text)?;

    if indent == Indent::Spaces(0) {
        return Ok(serde_json::to_string(&value)?);
    }

    let indent = indent.as_bytes();
    let mut out = Vec::with_capacity(text.len() * 2);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut ser)?;
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}
