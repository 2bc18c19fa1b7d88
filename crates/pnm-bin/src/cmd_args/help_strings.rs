/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static BRIGHTEN_HELP: &str = "Brighten or darken an image

The value is added to every sample and the result clamped to 0..=255.
Negative values darken the image";

pub static SCALE_HELP: &str = "Scale an image by a percentage

Accepted range is 50 to 200, values outside it leave the image unchanged.
Uses nearest neighbour sampling followed by a smooth";

pub static CONTRAST_HELP: &str = "Stretch the contrast of a grayscale version of the image

The darkest pixel becomes 0 and the brightest 255.
With --strict a uniform image is an error instead of a no-op";

pub static EDGE_HELP: &str = "Detect edges

Smooths, converts to grayscale, computes sobel gradients,
thins them with non-maximum suppression and classifies each pixel as
no edge (0), weak edge (127) or strong edge (255)";

pub static OUTPUT_HELP: &str = "Output encoding

`a` writes ascii (P2/P3) files, `b` writes binary (P5/P6) files.
Single channel results get a .pgm extension, others .ppm";

pub static STATS_HELP: &str = "Statistics written to the stats file

-f groups words by frequency, -l by length.
Both may be combined, e.g -fl or -lf, the order decides the report order";
