/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

use crate::cmd_args::arg_parsers::OutputMode;
use crate::cmd_args::help_strings::{
    BRIGHTEN_HELP, CONTRAST_HELP, EDGE_HELP, OUTPUT_HELP, SCALE_HELP, STATS_HELP
};

pub mod arg_parsers;
pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pnm")
        .about("Filters, flood fill and word frequency for portable pixmaps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(filter_options())
        .subcommand(fill_options())
        .subcommand(wordfreq_options())
        .args(add_logging_options())
        .args(add_settings())
}

fn add_logging_options() -> [Arg; 4] {
    [
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"),
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"),
        Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"),
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about the decoding options")
    ]
}

fn add_settings() -> [Arg; 5] {
    [
        Arg::new("all-yes")
            .long("yes")
            .short('y')
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("ADVANCED")
            .help("Overwrite existing output files without asking"),
        Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("ADVANCED")
            .help("Treat recoverable warnings as errors")
            .long_help("Treat recoverable warnings as errors\n\nTrailing bytes after binary pixel data, samples above the max value and contrast stretching of a uniform image become errors"),
        Arg::new("max-width")
            .long("max-width")
            .value_parser(value_parser!(usize))
            .default_value("16384")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of an image, larger images are rejected"),
        Arg::new("max-height")
            .long("max-height")
            .value_parser(value_parser!(usize))
            .default_value("16384")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of an image, larger images are rejected"),
        Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("ADVANCED")
            .help("Print the header metadata of input images as json")
    ]
}

#[rustfmt::skip]
fn filter_options() -> Command {
    Command::new("filter")
        .about("Apply a filter to a ppm image")
        .group(ArgGroup::new("operations").multiple(false))
        .arg(Arg::new("negate")
            .short('n')
            .long("negate")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Invert every sample")
            .group("operations"))
        .arg(Arg::new("brighten")
            .short('b')
            .long("brighten")
            .value_name("VALUE")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i32))
            .help_heading("OPERATIONS")
            .help("Brighten or darken the image by a value")
            .long_help(BRIGHTEN_HELP)
            .group("operations"))
        .arg(Arg::new("sharpen")
            .short('p')
            .long("sharpen")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Sharpen the image")
            .group("operations"))
        .arg(Arg::new("smooth")
            .short('s')
            .long("smooth")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Smooth the image with a 3x3 mean")
            .group("operations"))
        .arg(Arg::new("grayscale")
            .short('g')
            .long("grayscale")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Convert the image to grayscale")
            .group("operations"))
        .arg(Arg::new("contrast")
            .short('c')
            .long("contrast")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Stretch contrast of the grayscale image")
            .long_help(CONTRAST_HELP)
            .group("operations"))
        .arg(Arg::new("scale")
            .short('k')
            .long("scale")
            .value_name("PERCENT")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i32))
            .help_heading("OPERATIONS")
            .help("Scale the image by a percentage")
            .long_help(SCALE_HELP)
            .group("operations"))
        .arg(Arg::new("edge")
            .short('e')
            .long("edge")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Detect edges")
            .long_help(EDGE_HELP)
            .group("operations"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("MODE")
            .value_parser(value_parser!(OutputMode))
            .required(true)
            .help("Output encoding, a for ascii, b for binary")
            .long_help(OUTPUT_HELP))
        .arg(Arg::new("basename")
            .value_name("BASENAME")
            .required(true)
            .help("Output file name without extension"))
        .arg(Arg::new("in")
            .value_name("IMAGE")
            .value_parser(value_parser!(PathBuf))
            .required(true)
            .help("Input ppm image"))
}

#[rustfmt::skip]
fn fill_options() -> Command {
    Command::new("fill")
        .about("Flood fill a region of a ppm image in place")
        .arg(Arg::new("in")
            .value_name("IMAGE")
            .value_parser(value_parser!(PathBuf))
            .required(true)
            .help("Image to fill, it is overwritten with the result"))
        .arg(Arg::new("row")
            .value_parser(value_parser!(usize))
            .required(true)
            .help("Row of the seed pixel"))
        .arg(Arg::new("col")
            .value_parser(value_parser!(usize))
            .required(true)
            .help("Column of the seed pixel"))
        .arg(Arg::new("red")
            .value_parser(value_parser!(u8))
            .required(true)
            .help("Red component of the fill color"))
        .arg(Arg::new("green")
            .value_parser(value_parser!(u8))
            .required(true)
            .help("Green component of the fill color"))
        .arg(Arg::new("blue")
            .value_parser(value_parser!(u8))
            .required(true)
            .help("Blue component of the fill color"))
}

#[rustfmt::skip]
fn wordfreq_options() -> Command {
    Command::new("wordfreq")
        .about("Count the words of a text file")
        .arg(Arg::new("in")
            .value_name("INPUT")
            .value_parser(value_parser!(PathBuf))
            .required(true)
            .help("Text file to read words from"))
        .arg(Arg::new("words-out")
            .value_name("WORDS")
            .value_parser(value_parser!(PathBuf))
            .required(true)
            .help("File receiving every word and its count, grouped by letter"))
        .arg(Arg::new("stats-out")
            .value_name("STATS")
            .value_parser(value_parser!(PathBuf))
            .required(true)
            .help("File receiving the frequency and/or length statistics"))
        .arg(Arg::new("frequency")
            .short('f')
            .action(ArgAction::SetTrue)
            .help_heading("STATISTICS")
            .help("Group words by frequency")
            .long_help(STATS_HELP))
        .arg(Arg::new("length")
            .short('l')
            .action(ArgAction::SetTrue)
            .help_heading("STATISTICS")
            .help("Group words by length")
            .long_help(STATS_HELP))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::arg_parsers::OutputMode;
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn test_command_is_valid() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn test_filter_args() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pnm", "filter", "-b", "-20", "-ob", "out", "in.ppm"])
            .unwrap();
        let (name, filter) = matches.subcommand().unwrap();

        assert_eq!(name, "filter");
        assert_eq!(filter.get_one::<i32>("brighten"), Some(&-20));
        assert_eq!(filter.get_one::<OutputMode>("output"), Some(&OutputMode::Binary));
        assert_eq!(filter.get_one::<String>("basename").unwrap(), "out");
    }

    #[test]
    fn test_one_operation_at_most() {
        let result = create_cmd_args().try_get_matches_from([
            "pnm", "filter", "-n", "-s", "-oa", "out", "in.ppm"
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fill_color_range() {
        let ok = create_cmd_args()
            .try_get_matches_from(["pnm", "fill", "a.ppm", "1", "2", "255", "0", "9"]);
        assert!(ok.is_ok());

        let bad = create_cmd_args()
            .try_get_matches_from(["pnm", "fill", "a.ppm", "1", "2", "256", "0", "9"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pnm", "wordfreq", "a", "b", "c", "--strict", "--yes"])
            .unwrap();

        assert!(matches.get_flag("strict"));
        assert!(matches.get_flag("all-yes"));
    }
}
