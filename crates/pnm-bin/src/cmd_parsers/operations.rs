/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::debug;
use pnm_image::pipelines::Pipeline;
use pnm_image::traits::IntoImage;
use pnm_imageprocs::brighten::Brighten;
use pnm_imageprocs::edge::EdgeDetect;
use pnm_imageprocs::grayscale::Grayscale;
use pnm_imageprocs::negate::Negate;
use pnm_imageprocs::scale::Scale;
use pnm_imageprocs::sharpen::Sharpen;
use pnm_imageprocs::smooth::Smooth;
use pnm_imageprocs::stretch_contrast::{DegeneratePolicy, StretchContrast};

use crate::cmd_parsers::global_options::CmdOptions;

/// Add the operation named `argument` to the pipeline
///
/// Returns `false` if `argument` does not name an operation
pub fn parse_options<T: IntoImage>(
    workflow: &mut Pipeline<T>, argument: &str, args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<bool, String> {
    if argument == "negate" {
        debug!("Added negate operation");
        workflow.chain_operations(Box::new(Negate::new()));
    } else if argument == "brighten" {
        let value = *args
            .get_one::<i32>(argument)
            .ok_or("Missing brighten value")?;
        debug!("Added brighten operation with {:?}", value);
        workflow.chain_operations(Box::new(Brighten::new(value)));
    } else if argument == "sharpen" {
        debug!("Added sharpen operation");
        workflow.chain_operations(Box::new(Sharpen::new()));
    } else if argument == "smooth" {
        debug!("Added smooth operation");
        workflow.chain_operations(Box::new(Smooth::new()));
    } else if argument == "grayscale" {
        debug!("Added grayscale operation");
        workflow.chain_operations(Box::new(Grayscale::new()));
    } else if argument == "contrast" {
        let policy = if cmd_opts.strict_mode {
            DegeneratePolicy::Reject
        } else {
            DegeneratePolicy::Identity
        };
        debug!("Added contrast operation with policy {:?}", policy);
        workflow.chain_operations(Box::new(StretchContrast::new(policy)));
    } else if argument == "scale" {
        let percent = *args.get_one::<i32>(argument).ok_or("Missing scale value")?;
        debug!("Added scale operation with {}%", percent);
        workflow.chain_operations(Box::new(Scale::new(percent)));
    } else if argument == "edge" {
        debug!("Added edge detection");
        workflow.chain_operations(Box::new(EdgeDetect::new()));
    } else {
        return Ok(false);
    }
    Ok(true)
}
