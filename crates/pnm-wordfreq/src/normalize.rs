/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Turning raw tokens into countable words
//!
//! Text is handled as bytes, input need not be valid UTF-8.

/// Strip leading and trailing ASCII punctuation and lowercase what remains
///
/// Returns `None` when nothing is left, e.g. for `"--"`.
/// Punctuation inside the word is kept, `"don't"` stays `"don't"`.
/// Invalid UTF-8 sequences are replaced with U+FFFD.
pub fn normalize(token: &[u8]) -> Option<String> {
    let start = token.iter().position(|x| !x.is_ascii_punctuation())?;
    let end = token.iter().rposition(|x| !x.is_ascii_punctuation())?;

    Some(String::from_utf8_lossy(&token[start..=end]).to_lowercase())
}

/// Split text on ASCII whitespace and normalize every token, skipping empty ones
pub fn words(text: &[u8]) -> impl Iterator<Item = String> + '_ {
    text.split(u8::is_ascii_whitespace)
        .filter(|x| !x.is_empty())
        .filter_map(normalize)
}

#[cfg(test)]
mod tests {
    use crate::normalize::{normalize, words};

    #[test]
    fn test_trims_punctuation() {
        assert_eq!(normalize(b"\"Hello,\"").as_deref(), Some("hello"));
        assert_eq!(normalize(b"(end).").as_deref(), Some("end"));
        assert_eq!(normalize(b"don't").as_deref(), Some("don't"));
        assert_eq!(normalize(b"--"), None);
    }

    #[test]
    fn test_words_skips_empty() {
        let found: Vec<String> = words(b"  One, two -- THREE!\n\tfour ").collect();
        assert_eq!(found, ["one", "two", "three", "four"]);
    }

    #[test]
    fn test_invalid_utf8_is_kept_as_a_word() {
        assert_eq!(normalize(b"Caf\xe9!").as_deref(), Some("caf\u{fffd}"));
        assert_eq!(normalize(b"\xff"), Some("\u{fffd}".to_string()));
    }
}
