/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap decoder and encoder
//!
//! The decoder reads the two color variants of the format
//! - P3: ASCII samples
//! - P6: binary samples
//!
//! The encoder writes both color and grayscale variants (P2, P3, P5 and P6).
//!
//! Header comments (`#` lines) are kept by the decoder and written back by the
//! encoder byte for byte, so a decode/encode cycle preserves them even when
//! they are not valid UTF-8.
//!
//! # Example
//! ```
//! use pnm_ppm::{PPMDecoder, PPMEncoder};
//!
//! let mut decoder = PPMDecoder::new(b"P3\n# tiny\n1 1\n255\n1 2 3\n");
//! let pixels = decoder.decode().unwrap();
//! let header = decoder.get_header().unwrap().clone();
//!
//! let mut output = vec![];
//! PPMEncoder::new(&mut output).encode(&header, &pixels).unwrap();
//! assert_eq!(output, b"P3\n# tiny\n1 1\n255\n1\n2\n3\n");
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
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub use decoder::PPMDecoder;
pub use encoder::PPMEncoder;
pub use errors::{PPMDecodeErrors, PPMErrors};
pub use header::{PnmHeader, PnmVersion};

mod decoder;
mod encoder;
mod errors;
mod header;
