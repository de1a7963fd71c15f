//! Case conversions.
//!
//! The identifier styles (camel, pascal, snake) re-tokenize their input with
//! [`words`], so case changes inside a word never introduce a boundary:
//! `HelloWorld` is a single word.

use super::translit::words;

pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_pascal_case(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    for word in words(text) {
        push_upper_first(word, &mut res);
    }
    res
}

pub fn to_camel_case(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    for (index, word) in words(text).enumerate() {
        if index == 0 {
            push_lower_first(word, &mut res);
        } else {
            push_upper_first(word, &mut res);
        }
    }
    res
}

pub fn to_snake_case(text: &str) -> String {
    words(text).collect::<Vec<_>>().join("_").to_lowercase()
}

/// Uppercase the first character of every run of word characters
/// (letters, ASCII digits and `_`). Everything else is copied as is.
pub fn capitalize(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    text.chars().fold(false, |prev_was_word, c| {
        let is_word = c.is_alphabetic() || c.is_ascii_digit() || c == '_';
        if is_word && !prev_was_word {
            res.extend(c.to_uppercase());
        } else {
            res.push(c);
        }
        is_word
    });
    res
}

fn push_upper_first(word: &str, buf: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.push_str(chars.as_str());
    }
}

fn push_lower_first(word: &str, buf: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_lowercase());
        buf.push_str(chars.as_str());
    }
}
