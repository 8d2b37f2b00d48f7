use crate::error::DigitError;
use image::{imageops, imageops::FilterType, GrayImage};

/// Scaled dimensions that fit `(width, height)` into a `target` square.
/// Uses `floor(dim * target / max_dim)` and never returns a zero side.
pub fn fit_dimensions(width: u32, height: u32, target: u32) -> (u32, u32) {
    let max_dim = width.max(height).max(1) as u64;
    let scale = |dim: u32| ((dim as u64 * target as u64) / max_dim).max(1) as u32;
    (scale(width), scale(height))
}

/// Resize so the longer side equals `target`, preserving aspect ratio
pub fn apply(image: GrayImage, target: u32) -> Result<GrayImage, DigitError> {
    if target == 0 {
        return Err(DigitError::PreprocessingError(
            "target size must be positive".to_string(),
        ));
    }

    let (width, height) = image.dimensions();
    let (new_width, new_height) = fit_dimensions(width, height, target);

    if (new_width, new_height) == (width, height) {
        return Ok(image);
    }

    Ok(imageops::resize(
        &image,
        new_width,
        new_height,
        FilterType::Lanczos3,
    ))
}
