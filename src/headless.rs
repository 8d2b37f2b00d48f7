//! Windowless classification of image files

use crate::engine::DigitClassifier;
use crate::error::DigitError;
use crate::preprocessing::Pipeline;
use std::path::Path;

/// Printed when the image holds no ink
pub const NO_DIGIT: &str = "No digit";

/// Run an image file through the full pipeline and classifier.
///
/// Returns the line to print: `"<digit> (<conf>%)"`, the prediction as JSON
/// when `json` is set, or [`NO_DIGIT`] for a blank image.
pub fn classify_file(
    classifier: &dyn DigitClassifier,
    path: &Path,
    json: bool,
) -> Result<String, DigitError> {
    let image = image::open(path)?;

    let preprocessed = match Pipeline::new().process(image) {
        Ok(result) => result,
        Err(DigitError::EmptyCanvas) => {
            tracing::warn!(path = %path.display(), "Image contains no ink");
            return Ok(NO_DIGIT.to_string());
        }
        Err(e) => return Err(e),
    };

    let prediction = classifier.classify(&preprocessed.sample)?;
    tracing::info!(
        digit = prediction.digit,
        confidence = prediction.confidence,
        preprocessing_us = preprocessed.total_time_us,
        "Prediction"
    );

    if json {
        Ok(serde_json::to_string(&prediction)?)
    } else {
        Ok(prediction.display())
    }
}
