/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::collections::BTreeMap;
use std::io::BufRead;

use pnm_core::log::{debug, trace};

use crate::errors::WordFreqErrors;
use crate::normalize::words;

/// A set of words and how often each was seen
///
/// Words are kept in alphabetical order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordFreq {
    pub(crate) words: BTreeMap<String, usize>
}

impl WordFreq {
    pub fn new() -> WordFreq {
        WordFreq::default()
    }
    /// Add a new word with a count of one
    ///
    /// # Errors
    /// `DuplicateWord` if the word is already present
    pub fn insert(&mut self, word: &str) -> Result<(), WordFreqErrors> {
        if self.words.contains_key(word) {
            return Err(WordFreqErrors::DuplicateWord(word.to_string()));
        }
        self.words.insert(word.to_string(), 1);
        Ok(())
    }
    /// Increase the count of a present word by one
    ///
    /// # Errors
    /// `MissingWord` if the word was never inserted
    pub fn increment(&mut self, word: &str) -> Result<(), WordFreqErrors> {
        match self.words.get_mut(word) {
            Some(count) => {
                *count += 1;
                Ok(())
            }
            None => Err(WordFreqErrors::MissingWord(word.to_string()))
        }
    }
    pub fn find_by_word(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }
    /// Increment the word if present, insert it otherwise
    pub fn add_word(&mut self, word: &str) -> Result<(), WordFreqErrors> {
        if self.find_by_word(word) {
            self.increment(word)
        } else {
            self.insert(word)
        }
    }
    /// How often `word` was seen, `None` if never
    pub fn count(&self, word: &str) -> Option<usize> {
        self.words.get(word).copied()
    }
    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.words.values().sum()
    }
    pub fn clear(&mut self) {
        self.words.clear();
    }
    /// Iterate words and their counts in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.words.iter().map(|(word, count)| (word.as_str(), *count))
    }
    /// Count every word of `reader`
    ///
    /// Input is read as bytes, tokens that are not valid UTF-8 are counted
    /// with replacement characters. Returns the number of words read.
    ///
    /// # Errors
    /// Any io error from `reader`
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<usize, WordFreqErrors> {
        let mut read = 0;

        for line in reader.split(b'\n') {
            for word in words(&line?) {
                trace!("Adding word {word}");
                self.add_word(&word)?;
                read += 1;
            }
        }
        debug!("Read {} words, {} distinct", read, self.len());

        Ok(read)
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::counter::WordFreq;
    use crate::errors::WordFreqErrors;

    #[test]
    fn test_insert_twice_fails() {
        let mut words = WordFreq::new();

        words.insert("apple").unwrap();
        assert!(matches!(
            words.insert("apple"),
            Err(WordFreqErrors::DuplicateWord(x)) if x == "apple"
        ));
        assert_eq!(words.count("apple"), Some(1));
    }

    #[test]
    fn test_increment_missing_fails() {
        let mut words = WordFreq::new();

        assert!(matches!(
            words.increment("pear"),
            Err(WordFreqErrors::MissingWord(_))
        ));
        assert!(words.is_empty());
    }

    #[test]
    fn test_add_word_counts() {
        let mut words = WordFreq::new();

        for word in ["a", "b", "a", "c", "a"] {
            words.add_word(word).unwrap();
        }
        assert_eq!(words.count("a"), Some(3));
        assert_eq!(words.count("b"), Some(1));
        assert_eq!(words.count("z"), None);
        assert_eq!(words.len(), 3);
        assert_eq!(words.total(), 5);

        words.clear();
        assert!(words.is_empty());
    }

    #[test]
    fn test_read_normalizes() {
        let text = b"Hello, world!\n\"HELLO\" -- world... hello\n";
        let mut words = WordFreq::new();

        assert_eq!(words.read_from(&text[..]).unwrap(), 5);
        assert_eq!(words.count("hello"), Some(3));
        assert_eq!(words.count("world"), Some(2));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_total_matches_tokens() {
        let mut rng = nanorand::WyRand::new();
        let vocabulary = ["red", "green", "blue", "cyan", "magenta"];
        let mut text = String::new();

        let count = rng.generate_range(1_usize..200);

        for _ in 0..count {
            text.push_str(vocabulary[rng.generate_range(0..vocabulary.len())]);
            text.push(' ');
        }
        let mut words = WordFreq::new();
        words.read_from(text.as_bytes()).unwrap();

        assert_eq!(words.total(), count);
        assert!(words.iter().all(|(word, _)| vocabulary.contains(&word)));
    }
}
