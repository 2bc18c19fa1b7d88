/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:      usize,
    pub max_height:     usize,
    pub strict_mode:    bool,
    pub override_files: bool,
    pub probe:          bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:      1 << 14,
            max_height:     1 << 14,
            strict_mode:    false,
            override_files: false,
            probe:          false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }

    if options.value_source("strict") == Some(ValueSource::CommandLine) {
        info!("Running in strict mode");
        cmd_options.strict_mode = true;
    }

    if options.value_source("probe") == Some(ValueSource::CommandLine) {
        cmd_options.probe = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn test_defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pnm", "fill", "a.ppm", "0", "0", "1", "2", "3"])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!((options.max_width, options.max_height), (1 << 14, 1 << 14));
        assert!(!options.strict_mode);
        assert!(!options.override_files);
    }

    #[test]
    fn test_limits_and_flags() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "pnm",
                "--max-width",
                "20",
                "--strict",
                "filter",
                "-g",
                "-oa",
                "out",
                "in.ppm",
                "--max-height=30",
                "--probe"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!((options.max_width, options.max_height), (20, 30));
        assert!(options.strict_mode);
        assert!(options.probe);
    }
}
