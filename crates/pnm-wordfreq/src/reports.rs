/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Textual reports of counted words
use std::collections::BTreeMap;
use std::io::Write;

use crate::counter::WordFreq;
use crate::errors::WordFreqErrors;

/// Which statistics to write and in what order
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum StatsReport {
    /// Words grouped by how often they occur
    #[default]
    Frequency,
    /// Words grouped by their length
    Length,
    FrequencyThenLength,
    LengthThenFrequency
}

impl StatsReport {
    /// The command line flag selecting this report
    pub const fn flag(self) -> &'static str {
        match self {
            StatsReport::Frequency => "-f",
            StatsReport::Length => "-l",
            StatsReport::FrequencyThenLength => "-fl",
            StatsReport::LengthThenFrequency => "-lf"
        }
    }
}

impl WordFreq {
    /// Write every word and its count, grouped under a heading per first letter
    ///
    /// ```text
    /// a:
    ///   apple 2
    ///   axe 1
    /// b:
    ///   bee 4
    /// ```
    ///
    /// # Errors
    /// Any io error from `writer`
    pub fn write_by_letter<W: Write>(&self, writer: &mut W) -> Result<(), WordFreqErrors> {
        let mut current = None;

        for (word, count) in self.iter() {
            let letter = word.chars().next();

            if letter != current {
                if let Some(letter) = letter {
                    writeln!(writer, "{letter}:")?;
                }
                current = letter;
            }
            writeln!(writer, "  {word} {count}")?;
        }
        Ok(())
    }
    /// Write words grouped by count, most frequent group first
    ///
    /// # Errors
    /// Any io error from `writer`
    pub fn write_by_frequency<W: Write>(&self, writer: &mut W) -> Result<(), WordFreqErrors> {
        let groups = self.group_by(|_, count| count);

        write_groups(writer, "Frequency", &groups)
    }
    /// Write words grouped by length in characters, longest group first
    ///
    /// # Errors
    /// Any io error from `writer`
    pub fn write_by_length<W: Write>(&self, writer: &mut W) -> Result<(), WordFreqErrors> {
        let groups = self.group_by(|word, _| word.chars().count());

        write_groups(writer, "Length", &groups)
    }
    /// Write the statistics chosen by `report`
    ///
    /// # Errors
    /// Any io error from `writer`
    pub fn write_stats<W: Write>(
        &self, report: StatsReport, writer: &mut W
    ) -> Result<(), WordFreqErrors> {
        match report {
            StatsReport::Frequency => self.write_by_frequency(writer),
            StatsReport::Length => self.write_by_length(writer),
            StatsReport::FrequencyThenLength => {
                self.write_by_frequency(writer)?;
                self.write_by_length(writer)
            }
            StatsReport::LengthThenFrequency => {
                self.write_by_length(writer)?;
                self.write_by_frequency(writer)
            }
        }
    }

    /// Words are appended in alphabetical order, so every group is sorted
    fn group_by<F>(&self, key: F) -> BTreeMap<usize, Vec<&str>>
    where
        F: Fn(&str, usize) -> usize
    {
        let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();

        for (word, count) in self.iter() {
            groups.entry(key(word, count)).or_default().push(word);
        }
        groups
    }
}

fn write_groups<W: Write>(
    writer: &mut W, label: &str, groups: &BTreeMap<usize, Vec<&str>>
) -> Result<(), WordFreqErrors> {
    for (key, words) in groups.iter().rev() {
        writeln!(writer, "{label}: {key}")?;

        for word in words {
            writeln!(writer, "{word}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::counter::WordFreq;
    use crate::reports::StatsReport;

    fn sample() -> WordFreq {
        let mut words = WordFreq::new();
        words
            .read_from(&b"bee apple axe bee apple bee cat"[..])
            .unwrap();
        words
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>)
    {
        let mut out = vec![];
        f(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_by_letter() {
        let words = sample();
        let text = render(|out| words.write_by_letter(out).unwrap());

        assert_eq!(text, "a:\n  apple 2\n  axe 1\nb:\n  bee 3\nc:\n  cat 1\n");
    }

    #[test]
    fn test_by_frequency() {
        let words = sample();
        let text = render(|out| words.write_by_frequency(out).unwrap());

        assert_eq!(
            text,
            "Frequency: 3\nbee\nFrequency: 2\napple\nFrequency: 1\naxe\ncat\n"
        );
    }

    #[test]
    fn test_by_length() {
        let words = sample();
        let text = render(|out| words.write_by_length(out).unwrap());

        assert_eq!(text, "Length: 5\napple\nLength: 3\naxe\nbee\ncat\n");
    }

    #[test]
    fn test_stats_order() {
        let words = sample();

        let frequency = render(|out| words.write_by_frequency(out).unwrap());
        let length = render(|out| words.write_by_length(out).unwrap());

        let both = render(|out| {
            words
                .write_stats(StatsReport::LengthThenFrequency, out)
                .unwrap();
        });
        assert_eq!(both, format!("{length}{frequency}"));

        let both = render(|out| {
            words
                .write_stats(StatsReport::FrequencyThenLength, out)
                .unwrap();
        });
        assert_eq!(both, format!("{frequency}{length}"));
    }

    #[test]
    fn test_empty_reports_nothing() {
        let words = WordFreq::new();

        assert!(render(|out| words.write_by_letter(out).unwrap()).is_empty());
        assert!(render(|out| words.write_stats(StatsReport::default(), out).unwrap()).is_empty());
    }
}
