/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whole-image properties of the filters when chained through a pipeline
use nanorand::Rng;
use pnm_core::colorspace::ColorSpace;
use pnm_image::image::Image;
use pnm_image::pipelines::Pipeline;
use pnm_image::traits::OperationsTrait;
use pnm_imageprocs::brighten::Brighten;
use pnm_imageprocs::edge::EdgeDetect;
use pnm_imageprocs::grayscale::Grayscale;
use pnm_imageprocs::negate::Negate;
use pnm_imageprocs::scale::Scale;
use pnm_imageprocs::sharpen::Sharpen;
use pnm_imageprocs::smooth::Smooth;
use pnm_imageprocs::stretch_contrast::StretchContrast;

fn random_image(width: usize, height: usize, colorspace: ColorSpace) -> Image {
    let mut data = vec![0_u8; width * height * colorspace.num_components()];
    nanorand::WyRand::new_seed(42).fill(&mut data);

    Image::from_u8(&data, width, height, colorspace).unwrap()
}

fn run(image: Image, operations: Vec<Box<dyn OperationsTrait>>) -> Image {
    let mut pipeline = Pipeline::new();
    pipeline.chain_decoder(image);

    for operation in operations {
        pipeline.chain_operations(operation);
    }
    pipeline.advance_to_end().unwrap();
    pipeline.into_images().remove(0)
}

#[test]
fn double_negation_is_identity() {
    let image = random_image(31, 17, ColorSpace::RGB);
    let result = run(
        image.clone(),
        vec![Box::new(Negate::new()), Box::new(Negate::new())]
    );
    assert_eq!(result, image);
}

#[test]
fn brighten_zero_is_identity() {
    let image = random_image(12, 12, ColorSpace::Luma);
    let result = run(image.clone(), vec![Box::new(Brighten::new(0))]);

    assert_eq!(result, image);
}

#[test]
fn neighbourhood_filters_keep_dimensions_and_zero_the_border() {
    let filters: Vec<fn() -> Box<dyn OperationsTrait>> = vec![
        || -> Box<dyn OperationsTrait> { Box::new(Smooth::new()) },
        || -> Box<dyn OperationsTrait> { Box::new(Sharpen::new()) },
        || -> Box<dyn OperationsTrait> { Box::new(EdgeDetect::new()) }
    ];
    for filter in filters {
        let result = run(random_image(9, 7, ColorSpace::RGB), vec![filter()]);
        let (width, height) = result.get_dimensions();

        assert_eq!((width, height), (9, 7));

        for channel in result.get_channels_ref() {
            let data = channel.as_slice();

            assert!(data[..width].iter().all(|x| *x == 0));
            assert!(data[width * (height - 1)..].iter().all(|x| *x == 0));
            assert!(data.chunks_exact(width).all(|row| row[0] == 0 && row[width - 1] == 0));
        }
    }
}

#[test]
fn gray_operations_produce_one_channel() {
    let operations: Vec<fn() -> Box<dyn OperationsTrait>> = vec![
        || -> Box<dyn OperationsTrait> { Box::new(Grayscale::new()) },
        || -> Box<dyn OperationsTrait> { Box::new(StretchContrast::default()) },
        || -> Box<dyn OperationsTrait> { Box::new(EdgeDetect::new()) }
    ];
    for operation in operations {
        let result = run(random_image(8, 8, ColorSpace::RGB), vec![operation()]);

        assert!(result.is_grayscale());
        assert_eq!(result.get_channels_ref().len(), 1);
        assert_eq!(result.red_or_gray().len(), 64);
    }
}

#[test]
fn stretched_contrast_spans_full_range() {
    let result = run(
        random_image(20, 20, ColorSpace::RGB),
        vec![Box::new(StretchContrast::default())]
    );
    let data = result.red_or_gray().as_slice();

    assert_eq!(data.iter().min(), Some(&0));
    assert_eq!(data.iter().max(), Some(&255));
}

#[test]
fn scale_up_then_down_restores_dimensions() {
    let result = run(
        random_image(10, 6, ColorSpace::RGB),
        vec![Box::new(Scale::new(200)), Box::new(Scale::new(50))]
    );
    assert_eq!(result.get_dimensions(), (10, 6));
    assert_eq!(result.get_colorspace(), ColorSpace::RGB);
}

#[test]
fn edge_output_has_three_levels() {
    let result = run(
        random_image(16, 16, ColorSpace::RGB),
        vec![Box::new(EdgeDetect::new())]
    );
    assert!(result
        .red_or_gray()
        .as_slice()
        .iter()
        .all(|x| [0, 127, 255].contains(x)));
}
