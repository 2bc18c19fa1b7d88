/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;

/// How output images are encoded
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Ascii,
    Binary
}

impl OutputMode {
    pub const fn is_ascii(self) -> bool {
        matches!(self, OutputMode::Ascii)
    }
}

impl ValueEnum for OutputMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Ascii, Self::Binary]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Ascii => PossibleValue::new("a").alias("ascii"),
            Self::Binary => PossibleValue::new("b").alias("binary")
        })
    }
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for variant in Self::value_variants() {
            if variant
                .to_possible_value()
                .is_some_and(|x| x.matches(s, false))
            {
                return Ok(*variant);
            }
        }
        Err(format!("Invalid variant: {s}"))
    }
}
