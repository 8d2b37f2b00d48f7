//! Normalization of hand-drawn marks into classifier-ready samples
//!
//! Crops to the ink, scales the longer side to the target size without
//! distorting the aspect ratio, and centers the result on a blank square.

pub mod pipeline;
pub mod sample;
pub mod steps;

pub use pipeline::{Pipeline, PreprocessingResult, StepTiming};
pub use sample::{NormalizedSample, SAMPLE_PIXELS, SAMPLE_SIZE};
