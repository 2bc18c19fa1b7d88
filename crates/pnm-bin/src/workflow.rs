/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::error::Error;
use std::fs::File;
use std::io::{stdin, BufRead, BufWriter};
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use pnm_image::codecs::ppm::{encode_ppm, output_version, PnmVersion};
use pnm_image::errors::ImageErrors;
use pnm_image::image::Image;
use pnm_image::pipelines::Pipeline;
use pnm_imageprocs::brighten::Brighten;
use pnm_imageprocs::flood_fill::FloodFill;

use crate::cmd_args::arg_parsers::OutputMode;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::operations::parse_options;
use crate::cmd_parsers::{fill_args, get_decoder_options};
use crate::file_io::PnmFile;
use crate::probe_files::probe_input_file;
use crate::word_freq;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), Box<dyn Error>> {
    info!("Creating workflows from input");

    match args.subcommand() {
        Some(("filter", sub_args)) => filter_workflow(sub_args, cmd_opts)?,
        Some(("fill", sub_args)) => fill_workflow(sub_args, cmd_opts)?,
        Some(("wordfreq", sub_args)) => word_freq::count_words(sub_args, cmd_opts)?,
        _ => return Err("No subcommand given, see --help".into())
    }
    Ok(())
}

fn filter_workflow(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    let in_file = args.get_one::<PathBuf>("in").ok_or("Missing input file")?;
    let basename = args
        .get_one::<String>("basename")
        .ok_or("Missing output basename")?;
    let mode = *args
        .get_one::<OutputMode>("output")
        .ok_or("Missing output mode")?;

    verify_input_path(in_file)?;

    if cmd_opts.probe {
        probe_input_file(in_file)?;
    }
    let mut workflow = Pipeline::new();

    workflow.chain_decoder(PnmFile::new(in_file.clone(), get_decoder_options(cmd_opts)));

    let mut has_operation = false;

    for argument in fill_args(args) {
        has_operation |= parse_options(&mut workflow, &argument, args, cmd_opts)?;
    }
    if !has_operation {
        debug!("No operation given, copying image");
        workflow.chain_operations(Box::new(Brighten::new(0)));
    }
    workflow.advance_to_end()?;

    for image in workflow.images() {
        let version = output_version(image, mode.is_ascii());
        let out_file = PathBuf::from(format!("{basename}.{}", version.extension()));

        verify_output_path(in_file, &out_file, cmd_opts)?;
        write_image(image, version, &out_file)?;
    }
    Ok(())
}

fn fill_workflow(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    let in_file = args.get_one::<PathBuf>("in").ok_or("Missing input file")?;
    let row = *args.get_one::<usize>("row").ok_or("Missing row")?;
    let col = *args.get_one::<usize>("col").ok_or("Missing column")?;
    let color = [
        *args.get_one::<u8>("red").ok_or("Missing red component")?,
        *args.get_one::<u8>("green").ok_or("Missing green component")?,
        *args.get_one::<u8>("blue").ok_or("Missing blue component")?
    ];

    verify_input_path(in_file)?;

    if cmd_opts.probe {
        probe_input_file(in_file)?;
    }
    let mut workflow = Pipeline::new();

    workflow
        .chain_decoder(PnmFile::new(in_file.clone(), get_decoder_options(cmd_opts)))
        .chain_operations(Box::new(FloodFill::new(row, col, color)));

    debug!("Added flood fill at ({},{}) with color {:?}", row, col, color);

    workflow.advance_to_end()?;

    for image in workflow.images() {
        // the file keeps the encoding it was read with
        let version = image
            .get_metadata()
            .get_format()
            .unwrap_or_else(|| output_version(image, false));

        write_image(image, version, in_file)?;
    }
    Ok(())
}

fn write_image(image: &Image, version: PnmVersion, out_file: &Path) -> Result<(), ImageErrors> {
    let mut writer = BufWriter::new(File::create(out_file)?);

    encode_ppm(image, version, &mut writer)?;

    info!("Wrote {:?} as {}", out_file, version);
    Ok(())
}

pub(crate) fn verify_input_path(in_path: &Path) -> Result<(), String> {
    if !in_path.exists() {
        return Err(format!("Path {in_path:?}, does not exist"));
    }

    if !in_path.is_file() {
        return Err(format!("Path {in_path:?} is not a file"));
    }
    Ok(())
}

pub(crate) fn verify_output_path(
    in_path: &Path, out_path: &Path, cmd_opts: &CmdOptions
) -> Result<(), String> {
    if in_path == out_path {
        return Err(format!("Cannot use {in_path:?} as both input and output"));
    }

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {out_path:?} exists, overwrite [y/N]");
            let mut result = String::new();

            stdin()
                .lock()
                .read_line(&mut result)
                .map_err(|x| x.to_string())?;

            if result.trim() != "y" {
                return Err(format!("Not overwriting file {out_path:?}"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;
    use crate::workflow::create_and_exec_workflow_from_cmd;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pnm-bin-{}-{name}", std::process::id()))
    }

    fn run(args: &[&str]) -> Result<(), String> {
        let matches = create_cmd_args()
            .try_get_matches_from(args)
            .map_err(|x| x.to_string())?;
        let options = parse_options(&matches);

        create_and_exec_workflow_from_cmd(&matches, &options).map_err(|x| format!("{x:?}"))
    }

    #[test]
    fn test_filter_grayscale_writes_pgm() {
        let input = temp_path("gray-in.ppm");
        let basename = temp_path("gray-out");

        std::fs::write(&input, b"P6\n2 1\n255\n\x64\x64\x64\xc8\xc8\xc8").unwrap();

        run(&[
            "pnm",
            "--yes",
            "filter",
            "-g",
            "-oa",
            basename.to_str().unwrap(),
            input.to_str().unwrap()
        ])
        .unwrap();

        let out_file = basename.with_extension("pgm");
        let written = std::fs::read(&out_file).unwrap();

        assert_eq!(written, b"P2\n2 1\n255\n100\n200\n");

        std::fs::remove_file(input).unwrap();
        std::fs::remove_file(out_file).unwrap();
    }

    #[test]
    fn test_filter_without_operation_copies() {
        let input = temp_path("copy-in.ppm");
        let basename = temp_path("copy-out");
        let data = b"P3\n# keep me\n1 1\n255\n1 2 3\n";

        std::fs::write(&input, data).unwrap();

        run(&[
            "pnm",
            "--yes",
            "filter",
            "-oa",
            basename.to_str().unwrap(),
            input.to_str().unwrap()
        ])
        .unwrap();

        let out_file = basename.with_extension("ppm");

        assert_eq!(
            std::fs::read(&out_file).unwrap(),
            b"P3\n# keep me\n1 1\n255\n1\n2\n3\n"
        );

        std::fs::remove_file(input).unwrap();
        std::fs::remove_file(out_file).unwrap();
    }

    #[test]
    fn test_fill_rewrites_input() {
        let input = temp_path("fill.ppm");

        std::fs::write(&input, b"P6\n# c\n2 1\n255\n\x00\x00\x00\x09\x09\x09").unwrap();

        run(&["pnm", "fill", input.to_str().unwrap(), "0", "0", "1", "2", "3"]).unwrap();

        assert_eq!(
            std::fs::read(&input).unwrap(),
            b"P6\n# c\n2 1\n255\n\x01\x02\x03\x09\x09\x09"
        );
        std::fs::remove_file(input).unwrap();
    }

    #[test]
    fn test_fill_out_of_range_keeps_file() {
        let input = temp_path("fill-range.ppm");
        let data = b"P6\n1 1\n255\n\x00\x00\x00";

        std::fs::write(&input, data).unwrap();

        assert!(run(&["pnm", "fill", input.to_str().unwrap(), "4", "0", "1", "2", "3"]).is_err());
        assert_eq!(std::fs::read(&input).unwrap(), data);

        std::fs::remove_file(input).unwrap();
    }

    #[test]
    fn test_missing_input() {
        let input = temp_path("does-not-exist.ppm");

        assert!(run(&["pnm", "filter", "-n", "-ob", "out", input.to_str().unwrap()]).is_err());
    }
}
