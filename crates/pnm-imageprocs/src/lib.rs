/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `pnm-image`
//!
//! Each module has a plain function working on channel slices and a
//! struct implementing the `OperationsTrait` defined by `pnm-image`.
//!
//! # Example
//! - Brighten an image by 20
//! ```
//! use pnm_core::colorspace::ColorSpace;
//! use pnm_image::image::Image;
//! use pnm_image::traits::OperationsTrait;
//! use pnm_imageprocs::brighten::Brighten;
//! let mut image = Image::fill(200, ColorSpace::RGB, 100, 100).unwrap();
//! let brighten = Brighten::new(20);
//! // execute the filter
//! brighten.execute(&mut image).unwrap();
//! assert!(image.red_or_gray().as_slice().iter().all(|x| *x == 220));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod brighten;
pub mod edge;
pub mod flood_fill;
pub mod grayscale;
pub mod mathops;
pub mod negate;
pub mod scale;
pub mod sharpen;
pub mod smooth;
pub mod spatial;
pub mod stretch_contrast;
