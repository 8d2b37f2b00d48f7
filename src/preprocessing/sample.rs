use crate::dataset::{Label, LabeledRecord};
use crate::error::DigitError;
use image::GrayImage;

/// Side length of the classifier input
pub const SAMPLE_SIZE: u32 = 28;
/// Pixel count of a flattened sample
pub const SAMPLE_PIXELS: usize = (SAMPLE_SIZE * SAMPLE_SIZE) as usize;

/// A normalized 28x28 grayscale digit, ready for inference or persistence
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSample {
    image: GrayImage,
}

impl NormalizedSample {
    pub fn new(image: GrayImage) -> Result<Self, DigitError> {
        if image.dimensions() != (SAMPLE_SIZE, SAMPLE_SIZE) {
            let (w, h) = image.dimensions();
            return Err(DigitError::PreprocessingError(format!(
                "normalized sample must be {SAMPLE_SIZE}x{SAMPLE_SIZE}, got {w}x{h}"
            )));
        }
        Ok(Self { image })
    }

    /// Rebuild a sample from 784 row-major pixels
    pub fn from_pixels(pixels: Vec<u8>) -> Result<Self, DigitError> {
        let len = pixels.len();
        let image = GrayImage::from_raw(SAMPLE_SIZE, SAMPLE_SIZE, pixels).ok_or_else(|| {
            DigitError::PreprocessingError(format!("expected {SAMPLE_PIXELS} pixels, got {len}"))
        })?;
        Ok(Self { image })
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Row-major pixel values
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Flatten to model input, scaled to [0, 1]
    pub fn to_input(&self) -> Vec<f32> {
        self.pixels().iter().map(|&p| p as f32 / 255.0).collect()
    }

    /// Flatten to a persisted record prefixed with the label
    pub fn to_record(&self, label: Label) -> LabeledRecord {
        LabeledRecord::new(label, self.pixels().to_vec())
    }
}
