/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::ArgMatches;
use log::info;
use pnm_wordfreq::{StatsReport, WordFreq};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::workflow::{verify_input_path, verify_output_path};

/// Statistics selected by `-f`/`-l`, in the order they were given
pub fn stats_report(args: &ArgMatches) -> StatsReport {
    let position = |id: &str| {
        if args.get_flag(id) {
            args.index_of(id)
        } else {
            None
        }
    };

    match (position("frequency"), position("length")) {
        (Some(frequency), Some(length)) if length < frequency => {
            StatsReport::LengthThenFrequency
        }
        (Some(_), Some(_)) => StatsReport::FrequencyThenLength,
        (None, Some(_)) => StatsReport::Length,
        _ => StatsReport::Frequency
    }
}

pub fn count_words(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), Box<dyn Error>> {
    let in_file = args.get_one::<PathBuf>("in").ok_or("Missing input file")?;
    let words_file = args
        .get_one::<PathBuf>("words-out")
        .ok_or("Missing words file")?;
    let stats_file = args
        .get_one::<PathBuf>("stats-out")
        .ok_or("Missing stats file")?;

    verify_input_path(in_file)?;
    verify_output_path(in_file, words_file, cmd_opts)?;
    verify_output_path(in_file, stats_file, cmd_opts)?;

    if words_file == stats_file {
        return Err(format!("Cannot write words and stats to the same file {words_file:?}").into());
    }
    let report = stats_report(args);

    let mut words = WordFreq::new();
    let count = words.read_from(BufReader::new(File::open(in_file)?))?;

    info!(
        "Read {} words ({} distinct) from {:?}",
        count,
        words.len(),
        in_file
    );

    let mut words_out = BufWriter::new(File::create(words_file)?);
    words.write_by_letter(&mut words_out)?;
    words_out.flush()?;

    let mut stats_out = BufWriter::new(File::create(stats_file)?);
    words.write_stats(report, &mut stats_out)?;
    stats_out.flush()?;

    info!("Wrote {} statistics to {:?}", report.flag(), stats_file);

    Ok(())
}
