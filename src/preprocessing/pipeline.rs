use crate::error::DigitError;
use image::{DynamicImage, GrayImage};
use serde::Serialize;
use std::time::Instant;

use super::sample::{NormalizedSample, SAMPLE_SIZE};
use super::steps;

/// Timing information for a single preprocessing step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_us: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessingResult {
    /// Normalized sample (not serialized)
    #[serde(skip)]
    pub sample: NormalizedSample,
    /// Total preprocessing time in microseconds
    pub total_time_us: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// Normalization pipeline: grayscale, crop to ink, aspect-preserving resize, center
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }

    /// Process any image into a normalized sample
    pub fn process(&self, image: DynamicImage) -> Result<PreprocessingResult, DigitError> {
        let start = Instant::now();
        let mut steps_timing = Vec::new();

        let gray = self.run_step("grayscale", image, &mut steps_timing, steps::grayscale::apply)?;
        let cropped = self.run_step("crop", gray, &mut steps_timing, steps::crop::apply)?;
        let resized = self.run_step("resize", cropped, &mut steps_timing, |img| {
            steps::resize::apply(img, SAMPLE_SIZE)
        })?;
        let centered = self.run_step("center", resized, &mut steps_timing, |img| {
            steps::center::apply(img, SAMPLE_SIZE)
        })?;

        let sample = NormalizedSample::new(centered)?;
        let total_time_us = start.elapsed().as_micros() as u64;

        tracing::debug!(
            total_time_us,
            steps = ?steps_timing,
            "Normalized drawing"
        );

        Ok(PreprocessingResult {
            sample,
            total_time_us,
            steps: steps_timing,
        })
    }

    /// Normalize a canvas buffer
    pub fn normalize(&self, canvas: &GrayImage) -> Result<NormalizedSample, DigitError> {
        self.process(DynamicImage::ImageLuma8(canvas.clone()))
            .map(|result| result.sample)
    }

    fn run_step<I, O, F>(
        &self,
        name: &str,
        input: I,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<O, DigitError>
    where
        F: FnOnce(I) -> Result<O, DigitError>,
    {
        let step_start = Instant::now();
        let result = step_fn(input)?;
        timings.push(StepTiming {
            name: name.to_string(),
            time_us: step_start.elapsed().as_micros() as u64,
        });
        Ok(result)
    }
}
