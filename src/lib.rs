//! Handwritten digit recognition from a freehand canvas.
//!
//! The drawing surface ([`canvas`]) is normalized into a 28x28 sample
//! ([`preprocessing`]) that is either classified by a pre-trained model
//! ([`engine`], [`engines`]) or appended to a labeled CSV dataset
//! ([`dataset`]).

pub mod canvas;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod engines;
pub mod error;
pub mod headless;
pub mod logging;
pub mod preprocessing;

#[cfg(feature = "gui")]
pub mod gui;

pub use canvas::{Canvas, Point, PointerEvent, StrokeState};
pub use dataset::{Label, LabeledRecord, SampleWriter};
pub use engine::{DigitClassifier, Prediction};
pub use error::DigitError;
pub use preprocessing::{NormalizedSample, Pipeline};
