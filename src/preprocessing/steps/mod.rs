//! Individual preprocessing steps

pub mod center;
pub mod crop;
pub mod grayscale;
pub mod resize;
