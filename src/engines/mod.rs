//! Classifier engine implementations
//!
//! Engines are conditionally compiled based on feature flags.

#[cfg(feature = "engine-rten")]
pub mod rten;

use crate::config::RecognizerConfig;
use crate::engine::DigitClassifier;
use crate::error::DigitError;

/// Build the classifier the enabled features provide
pub fn create(config: &RecognizerConfig) -> Result<Box<dyn DigitClassifier>, DigitError> {
    #[cfg(feature = "engine-rten")]
    {
        tracing::info!("Initializing rten engine...");
        let engine = rten::RtenClassifier::new(config)?;
        return Ok(Box::new(engine));
    }

    #[cfg(not(feature = "engine-rten"))]
    {
        let _ = config;
        Err(DigitError::InitializationError(
            "No classifier engines available. Build with --features engine-rten".to_string(),
        ))
    }
}
