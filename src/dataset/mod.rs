//! Labeled sample persistence
//!
//! Samples are stored as CSV: a `label,p0,...,p783` header followed by one row
//! per sample. Files are only ever appended to.

pub mod reader;
pub mod writer;

pub use reader::read_samples;
pub use writer::SampleWriter;

use crate::error::DigitError;
use crate::preprocessing::SAMPLE_PIXELS;
use std::fmt;

/// Digit class label, always in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(u8);

impl Label {
    /// Parse user input: a single decimal digit, surrounding whitespace allowed
    pub fn parse(text: &str) -> Result<Self, DigitError> {
        let trimmed = text.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => Ok(Self(c as u8 - b'0')),
            _ => Err(DigitError::InvalidLabel(text.to_string())),
        }
    }

    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitError::InvalidLabel(value.to_string()))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A normalized sample with its label, as stored on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRecord {
    label: Label,
    pixels: Vec<u8>,
}

impl LabeledRecord {
    pub(crate) fn new(label: Label, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), SAMPLE_PIXELS);
        Self { label, pixels }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Row-major pixel values
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// CSV header: `label,p0,...,p783`
pub fn header() -> Vec<String> {
    std::iter::once("label".to_string())
        .chain((0..SAMPLE_PIXELS).map(|i| format!("p{}", i)))
        .collect()
}
