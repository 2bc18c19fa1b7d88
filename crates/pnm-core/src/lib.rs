/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all `pnm` libraries
//!
//! It currently contains
//!
//! - A bytestream reader used by the header parsers
//! - Colorspace information shared by images
//! - Decoder options
//! - A logging façade which forwards to the `log` crate when enabled
//!
//! # Features
//!  - `log`: Forward logging macros to the [`log`](https://docs.rs/log) crate,
//!     without it they expand to nothing.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![macro_use]

pub mod bytestream;
pub mod colorspace;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod serde;

#[cfg(feature = "log")]
pub use log;
