/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An 8-bit planar image and the plumbing around it
//!
//! An image is represented as
//!
//! - one (grayscale) or three (RGB) channels
//!     - each a contiguous row-major buffer of `u8`
//!         - all with the same width and height
//!
//! Operations on images implement [`OperationsTrait`](crate::traits::OperationsTrait)
//! and can be chained with a [`Pipeline`](crate::pipelines::Pipeline).
//!
//! # Features
//! - `log`: Enable logging through the `log` crate
//! - `serde-support`: Serialize image metadata
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
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod channel;
pub mod codecs;
pub mod errors;
pub mod image;
pub mod metadata;
pub mod pipelines;
mod serde;
pub mod traits;
