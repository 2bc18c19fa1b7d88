/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pipelines, decode an image and run a chain of operations on it
//!
use std::time::Instant;

use pnm_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{IntoImage, OperationsTrait};

#[derive(Copy, Clone, Debug)]
enum PipelineState {
    /// Initial state, the struct has been defined
    Initialized,
    /// The pipeline is ready to carry out image decoding
    Decode,
    /// The pipeline is ready to carry out image processing routines
    Operations,
    /// The pipeline is done.
    Finished
}

impl PipelineState {
    pub fn next(self) -> Option<Self> {
        match self {
            PipelineState::Initialized => Some(PipelineState::Decode),
            PipelineState::Decode => Some(PipelineState::Operations),
            PipelineState::Operations => Some(PipelineState::Finished),
            PipelineState::Finished => None
        }
    }
}

/// Pipeline, ordered image processing
///
/// A pipeline accepts anything that implements [IntoImage](crate::traits::IntoImage),
/// decodes it and then applies each chained operation in the order it was added.
/// Encoding is left to the caller who can get the result via
/// [`images`](crate::pipelines::Pipeline::images).
///
/// If an operation fails the pipeline stops and the image holds the result of
/// all operations that ran before it.
pub struct Pipeline<T: IntoImage> {
    state:      Option<PipelineState>,
    decode:     Option<T>,
    image:      Vec<Image>,
    operations: Vec<Box<dyn OperationsTrait>>
}

impl<T> Pipeline<T>
where
    T: IntoImage
{
    /// Create a new, empty pipeline
    #[allow(clippy::new_without_default)]
    pub fn new() -> Pipeline<T> {
        Pipeline {
            image:      vec![],
            state:      Some(PipelineState::Initialized),
            decode:     None,
            operations: vec![]
        }
    }

    /// Override the decoder present in the pipeline with a different
    /// decoder.
    ///
    /// There can only be one decoder in a pipeline, so the last decoder
    /// is the one that will be considered.
    pub fn chain_decoder(&mut self, decoder: T) -> &mut Pipeline<T> {
        self.decode = Some(decoder);
        self
    }
    /// Add a new operation to the pipeline.
    ///
    /// This is used as a way to chain multiple operations in a builder
    /// pattern style
    pub fn chain_operations(&mut self, operations: Box<dyn OperationsTrait>) -> &mut Pipeline<T> {
        self.operations.push(operations);
        self
    }
    pub fn images(&self) -> &[Image] {
        self.image.as_ref()
    }
    /// Take ownership of the images in this pipeline
    pub fn into_images(self) -> Vec<Image> {
        self.image
    }
    /// Advance the pipeline one state forward
    ///
    /// The pipeline advance is as follows
    ///
    /// 1. Decode
    /// 2. One or more operations [ all ran at once]
    /// 3. Finish
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        match state {
            PipelineState::Decode => {
                trace!("Current state: {:?}", state);

                match self.decode.take() {
                    Some(decoder) => {
                        let start = Instant::now();

                        let img = decoder.into_image()?;
                        self.image.push(img);

                        trace!("Finished decoding in {} ms", start.elapsed().as_millis());
                    }
                    None => {
                        if self.image.is_empty() {
                            return Err(ImageErrors::NoImageForOperations);
                        }
                        trace!("Image already present, no need to decode");
                    }
                }
            }
            PipelineState::Operations => {
                if self.image.is_empty() {
                    return Err(ImageErrors::NoImageForOperations);
                }
                trace!("Current state: {:?}", state);

                for image in &mut self.image {
                    for operation in &self.operations {
                        let operation_name = operation.name();

                        trace!("Running {}", operation_name);

                        let start = Instant::now();

                        operation.execute(image)?;

                        trace!(
                            "Finished running `{operation_name}` in {} ms",
                            start.elapsed().as_millis()
                        );
                    }
                }
            }
            PipelineState::Finished => {
                trace!("Finished operations for this pipeline");
            }
            PipelineState::Initialized => {}
        }
        self.state = state.next();

        Ok(())
    }
    /// Advance the operations in this pipeline up until
    /// we finish.
    ///
    /// This will run the decoder and all operations
    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pnm_core::colorspace::ColorSpace;

    use crate::errors::ImageErrors;
    use crate::image::Image;
    use crate::pipelines::Pipeline;
    use crate::traits::OperationsTrait;

    struct AddOne;

    impl OperationsTrait for AddOne {
        fn name(&self) -> &'static str {
            "add one"
        }
        fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
            for channel in image.get_channels_mut() {
                channel.as_mut_slice().iter_mut().for_each(|x| *x += 1);
            }
            Ok(())
        }
        fn supported_colorspaces(&self) -> &'static [ColorSpace] {
            &[ColorSpace::Luma]
        }
    }

    #[test]
    fn test_operations_run_in_order() {
        let image = Image::fill(1, ColorSpace::Luma, 2, 2).unwrap();

        let mut pipeline = Pipeline::new();
        pipeline
            .chain_decoder(image)
            .chain_operations(Box::new(AddOne))
            .chain_operations(Box::new(AddOne));
        pipeline.advance_to_end().unwrap();

        assert_eq!(pipeline.images()[0].red_or_gray().as_slice(), [3; 4]);
    }

    #[test]
    fn test_unsupported_colorspace_stops_pipeline() {
        let image = Image::fill(1, ColorSpace::RGB, 2, 2).unwrap();

        let mut pipeline = Pipeline::new();
        pipeline.chain_decoder(image).chain_operations(Box::new(AddOne));

        assert!(matches!(
            pipeline.advance_to_end(),
            Err(ImageErrors::UnsupportedColorspace(ColorSpace::RGB, "add one", _))
        ));
    }

    #[test]
    fn test_empty_pipeline() {
        let mut pipeline = Pipeline::<Image>::new();

        assert!(pipeline.advance_to_end().is_err());
    }
}
