//! Whole-URI percent encoding.
//!
//! Unlike component encoding, the reserved delimiters of a URI survive both
//! directions: they are never escaped, and an escape that decodes to one of
//! them is kept in its escaped form.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::TransformError;

const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    // marks
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    // reserved
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

const DECODE_PRESERVED: &[u8] = b";/?:@&=+$,#";

pub fn encode_uri(text: &str) -> String {
    utf8_percent_encode(text, URI_ENCODE_SET).to_string()
}

pub fn decode_uri(text: &str) -> Result<String, TransformError> {
    let bytes = text.as_bytes();
    let mut res = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        res.push_str(&text[copied..i]);

        let lead = hex_byte(bytes, i).ok_or(TransformError::MalformedEscape(i))?;
        let width = utf8_width(lead).ok_or(TransformError::InvalidUtf8Escape(i))?;

        if width == 1 {
            if DECODE_PRESERVED.contains(&lead) {
                res.push_str(&text[i..i + 3]);
            } else {
                res.push(char::from(lead));
            }
            i += 3;
            copied = i;
            continue;
        }

        let mut sequence = [lead, 0, 0, 0];
        for slot in sequence.iter_mut().take(width).skip(1) {
            let at = i + 3;
            if bytes.get(at) != Some(&b'%') {
                return Err(TransformError::InvalidUtf8Escape(i));
            }
            *slot = hex_byte(bytes, at).ok_or(TransformError::MalformedEscape(at))?;
            i = at;
        }
        let start = i + 3 - width * 3;
        let decoded = std::str::from_utf8(&sequence[..width])
            .map_err(|_| TransformError::InvalidUtf8Escape(start))?;
        res.push_str(decoded);

        i += 3;
        copied = i;
    }

    res.push_str(&text[copied..]);
    Ok(res)
}

/// The byte encoded by the `%XX` escape starting at `at`.
fn hex_byte(bytes: &[u8], at: usize) -> Option<u8> {
    let hi = hex_digit(*bytes.get(at + 1)?)?;
    let lo = hex_digit(*bytes.get(at + 2)?)?;
    Some(hi << 4 | lo)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, or `None` when `lead`
/// cannot start one.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead.leading_ones() {
        0 => Some(1),
        2 => Some(2),
        3 => Some(3),
        4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_keeps_reserved_and_marks() {
        let uri = "https://example.com/a-b_c.d?x=1&y=(2)#frag;!~*'$,+@";
        assert_eq!(encode_uri(uri), uri);
    }

    #[test]
    fn encode_escapes_spaces_and_non_ascii() {
        assert_eq!(encode_uri("a b"), "a%20b");
        assert_eq!(encode_uri("ü"), "%C3%BC");
        assert_eq!(encode_uri("100%"), "100%25");
        assert_eq!(encode_uri("\"<>`{}|\\^"), "%22%3C%3E%60%7B%7D%7C%5C%5E");
    }

    #[test]
    fn decode_plain_escapes() {
        assert_eq!(decode_uri("a%20b").unwrap(), "a b");
        assert_eq!(decode_uri("%C3%BC%e2%82%ac").unwrap(), "ü€");
        assert_eq!(decode_uri("%F0%9F%98%80").unwrap(), "😀");
        assert_eq!(decode_uri("no escapes").unwrap(), "no escapes");
    }

    #[test]
    fn decode_keeps_reserved_escapes() {
        assert_eq!(decode_uri("a%2Fb%3Fc%23d").unwrap(), "a%2Fb%3Fc%23d");
        assert_eq!(decode_uri("%25%2f").unwrap(), "%%2f");
    }

    #[test]
    fn decode_rejects_truncated_escape() {
        assert!(matches!(decode_uri("%"), Err(TransformError::MalformedEscape(0))));
        assert!(matches!(decode_uri("ab%4"), Err(TransformError::MalformedEscape(2))));
        assert!(matches!(decode_uri("%zz"), Err(TransformError::MalformedEscape(0))));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(matches!(decode_uri("%C3"), Err(TransformError::InvalidUtf8Escape(0))));
        assert!(matches!(decode_uri("%80"), Err(TransformError::InvalidUtf8Escape(0))));
        assert!(matches!(decode_uri("%C3%28"), Err(TransformError::InvalidUtf8Escape(0))));
        assert!(matches!(decode_uri("%ED%A0%80"), Err(TransformError::InvalidUtf8Escape(0))));
    }

    #[test]
    fn decode_keeps_surrounding_non_ascii_text() {
        assert_eq!(decode_uri("привет%20мир").unwrap(), "привет мир");
    }

    quickcheck::quickcheck! {
        fn decode_reverses_encode(text: String) -> bool {
            decode_uri(&encode_uri(&text)).ok() == Some(text)
        }
    }
}
