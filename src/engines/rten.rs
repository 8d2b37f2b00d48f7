//! rten engine implementation
//!
//! Pure Rust inference using the rten runtime. Models must be in `.rten`
//! format (convert Keras/ONNX exports with `rten-convert`).

use crate::config::{InputLayout, RecognizerConfig};
use crate::engine::{DigitClassifier, Prediction, NUM_CLASSES};
use crate::error::DigitError;
use crate::preprocessing::{NormalizedSample, SAMPLE_SIZE};
use rten::Model;
use rten_tensor::prelude::*;
use rten_tensor::NdTensor;
use std::path::Path;

/// Digit classifier backed by an rten model
pub struct RtenClassifier {
    model: Model,
    input_layout: InputLayout,
    apply_softmax: bool,
}

impl RtenClassifier {
    /// Load the model named by the config. A missing file is reported as
    /// [`DigitError::ModelNotFound`].
    pub fn new(config: &RecognizerConfig) -> Result<Self, DigitError> {
        let model = load_model(&config.model_path)?;

        tracing::info!(
            path = %config.model_path.display(),
            layout = config.input_layout.as_str(),
            softmax = config.apply_softmax,
            "rten model loaded"
        );

        Ok(Self {
            model,
            input_layout: config.input_layout,
            apply_softmax: config.apply_softmax,
        })
    }
}

/// Lay a sample out as the model's 4-D input, scaled to [0, 1]
pub fn input_tensor(layout: InputLayout, sample: &NormalizedSample) -> NdTensor<f32, 4> {
    let side = SAMPLE_SIZE as usize;
    let shape = match layout {
        InputLayout::Nhwc => [1, side, side, 1],
        InputLayout::Nchw => [1, 1, side, side],
    };
    // Single channel: both layouts share the same row-major data
    NdTensor::from_data(shape, sample.to_input())
}

/// Interpret a `[1, 10]` model output
pub fn prediction_from_output(
    output: NdTensor<f32, 2>,
    apply_softmax: bool,
) -> Result<Prediction, DigitError> {
    if output.shape() != [1, NUM_CLASSES] {
        return Err(DigitError::InferenceError(format!(
            "expected output shape [1, {}], got {:?}",
            NUM_CLASSES,
            output.shape()
        )));
    }
    let scores: Vec<f32> = output.iter().copied().collect();
    Prediction::from_scores(&scores, apply_softmax)
}

fn load_model(path: &Path) -> Result<Model, DigitError> {
    if !path.exists() {
        return Err(DigitError::ModelNotFound(path.to_path_buf()));
    }

    Model::load_file(path).map_err(|e| {
        DigitError::InitializationError(format!(
            "Failed to load model {}: {}",
            path.display(),
            e
        ))
    })
}

impl DigitClassifier for RtenClassifier {
    fn name(&self) -> &'static str {
        "rten"
    }

    fn description(&self) -> &'static str {
        "Pure Rust inference runtime - no system dependencies required"
    }

    fn classify(&self, sample: &NormalizedSample) -> Result<Prediction, DigitError> {
        let input = input_tensor(self.input_layout, sample);

        let output: NdTensor<f32, 2> = self
            .model
            .run_one(input.view().into(), None)
            .map_err(|e| DigitError::InferenceError(format!("Model run failed: {}", e)))?
            .try_into()
            .map_err(|e| DigitError::InferenceError(format!("Unexpected output type: {:?}", e)))?;

        let prediction = prediction_from_output(output, self.apply_softmax)?;

        tracing::debug!(
            digit = prediction.digit,
            confidence = prediction.confidence,
            "rten inference complete"
        );

        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use std::path::PathBuf;

    fn marked_sample() -> NormalizedSample {
        let mut img = GrayImage::new(28, 28);
        img.put_pixel(1, 0, Luma([255]));
        img.put_pixel(0, 2, Luma([51]));
        NormalizedSample::new(img).unwrap()
    }

    #[test]
    fn test_nhwc_input_shape_and_data() {
        let sample = marked_sample();
        let tensor = input_tensor(InputLayout::Nhwc, &sample);

        assert_eq!(tensor.shape(), [1, 28, 28, 1]);
        assert_eq!(tensor[[0, 0, 1, 0]], 1.0);
        assert!((tensor[[0, 2, 0, 0]] - 0.2).abs() < 1e-6);
        assert_eq!(tensor.iter().copied().collect::<Vec<f32>>(), sample.to_input());
    }

    #[test]
    fn test_nchw_input_shape_and_data() {
        let sample = marked_sample();
        let tensor = input_tensor(InputLayout::Nchw, &sample);

        assert_eq!(tensor.shape(), [1, 1, 28, 28]);
        assert_eq!(tensor[[0, 0, 0, 1]], 1.0);
        assert!((tensor[[0, 0, 2, 0]] - 0.2).abs() < 1e-6);
        assert_eq!(tensor.iter().copied().collect::<Vec<f32>>(), sample.to_input());
    }

    #[test]
    fn test_output_becomes_prediction() {
        let mut scores = vec![0.0f32; 10];
        scores[6] = 0.75;
        scores[0] = 0.25;
        let output = NdTensor::from_data([1, 10], scores);

        let prediction = prediction_from_output(output, false).unwrap();
        assert_eq!(prediction.digit, 6);
        assert_eq!(prediction.display(), "6 (75.00%)");
    }

    #[test]
    fn test_output_with_wrong_shape_is_rejected() {
        let output = NdTensor::from_data([2, 10], vec![0.1f32; 20]);
        assert!(matches!(
            prediction_from_output(output, false),
            Err(DigitError::InferenceError(_))
        ));
    }

    #[test]
    fn test_missing_model_is_reported() {
        let config = RecognizerConfig {
            model_path: PathBuf::from("/definitely/not/here/final_model.rten"),
            ..Default::default()
        };

        match RtenClassifier::new(&config) {
            Err(DigitError::ModelNotFound(path)) => assert_eq!(path, config.model_path),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("model should not load"),
        }
    }

    #[test]
    fn test_corrupt_model_fails_initialization() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"not a model").unwrap();

        let config = RecognizerConfig {
            model_path: file.path().to_path_buf(),
            ..Default::default()
        };

        assert!(matches!(
            RtenClassifier::new(&config),
            Err(DigitError::InitializationError(_))
        ));
    }
}
