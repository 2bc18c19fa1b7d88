/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

/// Errors possible when counting words
pub enum WordFreqErrors {
    /// The word is already present and cannot be inserted again
    DuplicateWord(String),
    /// The word is not present and cannot be incremented
    MissingWord(String),
    IoErrors(std::io::Error)
}

impl Debug for WordFreqErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateWord(word) => {
                writeln!(f, "Unable to insert word \"{word}\", it is already present")
            }
            Self::MissingWord(word) => {
                writeln!(f, "Unable to increment word \"{word}\", it is not present")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for WordFreqErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for WordFreqErrors {}

impl From<std::io::Error> for WordFreqErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}
