/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Word frequency counting
//!
//! Words are read from text, normalized (surrounding punctuation removed,
//! lowercased) and counted. The counts can then be written out grouped
//! by first letter, by frequency or by word length.
//!
//! # Example
//! ```
//! use pnm_wordfreq::WordFreq;
//!
//! let mut words = WordFreq::new();
//! words.read_from(&b"The cat saw the dog."[..]).unwrap();
//!
//! assert_eq!(words.count("the"), Some(2));
//! assert_eq!(words.count("dog"), Some(1));
//!
//! let mut out = vec![];
//! words.write_by_letter(&mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("c:\n  cat 1\n"));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub use counter::WordFreq;
pub use errors::WordFreqErrors;
pub use reports::StatsReport;

mod counter;
mod errors;
pub mod normalize;
mod reports;
