use crate::error::DigitError;
use crate::preprocessing::NormalizedSample;
use serde::Serialize;

/// Number of digit classes
pub const NUM_CLASSES: usize = 10;

/// Classification result for one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub digit: u8,
    pub confidence: f32,
    pub probabilities: Vec<f32>,
}

impl Prediction {
    /// Build a prediction from a 10-class score vector.
    /// With `apply_softmax` the scores are treated as logits.
    pub fn from_scores(scores: &[f32], apply_softmax: bool) -> Result<Self, DigitError> {
        if scores.len() != NUM_CLASSES {
            return Err(DigitError::InferenceError(format!(
                "expected {} class scores, got {}",
                NUM_CLASSES,
                scores.len()
            )));
        }
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(DigitError::InferenceError(
                "model produced non-finite scores".to_string(),
            ));
        }

        let probabilities = if apply_softmax {
            softmax(scores)
        } else {
            scores.to_vec()
        };

        // Ties resolve to the lowest digit
        let (digit, confidence) = probabilities.iter().copied().enumerate().fold(
            (0usize, f32::NEG_INFINITY),
            |best, (i, p)| if p > best.1 { (i, p) } else { best },
        );

        Ok(Self {
            digit: digit as u8,
            confidence,
            probabilities,
        })
    }

    /// Text shown to the user, e.g. `7 (98.12%)`
    pub fn display(&self) -> String {
        format!("{} ({:.2}%)", self.digit, self.confidence * 100.0)
    }
}

fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Trait that all classifier engines must implement
pub trait DigitClassifier: Send + Sync {
    /// Returns the engine identifier (e.g., "rten")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the engine
    fn description(&self) -> &'static str;

    /// Classify a normalized 28x28 sample
    fn classify(&self, sample: &NormalizedSample) -> Result<Prediction, DigitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_and_confidence() {
        let scores = [0.01, 0.02, 0.0, 0.9, 0.01, 0.01, 0.01, 0.02, 0.01, 0.01];
        let prediction = Prediction::from_scores(&scores, false).unwrap();
        assert_eq!(prediction.digit, 3);
        assert_eq!(prediction.confidence, 0.9);
        assert_eq!(prediction.display(), "3 (90.00%)");
    }

    #[test]
    fn test_ties_pick_lowest_digit() {
        let scores = [0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0];
        assert_eq!(Prediction::from_scores(&scores, false).unwrap().digit, 1);
    }

    #[test]
    fn test_softmax_normalizes_logits() {
        let logits = [1.0, 2.0, 8.0, 0.0, -3.0, 0.5, 0.0, 0.0, 1.0, 0.0];
        let prediction = Prediction::from_scores(&logits, true).unwrap();
        let total: f32 = prediction.probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
        assert_eq!(prediction.digit, 2);
        assert!(prediction.confidence > 0.9 && prediction.confidence < 1.0);
    }

    #[test]
    fn test_rejects_wrong_class_count() {
        assert!(matches!(
            Prediction::from_scores(&[0.5, 0.5], false),
            Err(DigitError::InferenceError(_))
        ));
        let mut scores = [0.0f32; 10];
        scores[4] = f32::NAN;
        assert!(Prediction::from_scores(&scores, false).is_err());
    }
}
