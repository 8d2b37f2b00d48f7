#![allow(dead_code)]

use digitpad::{DigitClassifier, DigitError, NormalizedSample, Prediction};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Classifier stand-in that always answers 4 (87.5%) and counts its calls
pub struct FixedClassifier {
    calls: Arc<AtomicUsize>,
}

impl FixedClassifier {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl DigitClassifier for FixedClassifier {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn description(&self) -> &'static str {
        "Always predicts 4"
    }

    fn classify(&self, sample: &NormalizedSample) -> Result<Prediction, DigitError> {
        assert_eq!(sample.to_input().len(), 784);
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut scores = [0.0f32; 10];
        scores[4] = 0.875;
        scores[9] = 0.125;
        Prediction::from_scores(&scores, false)
    }
}

pub fn call_count(calls: &Arc<AtomicUsize>) -> usize {
    calls.load(Ordering::SeqCst)
}
