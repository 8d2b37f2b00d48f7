use crate::error::DigitError;
use image::{imageops, GrayImage};

/// Top-left offset that centers `dim` inside `target` (floor division)
pub fn offset(target: u32, dim: u32) -> u32 {
    target.saturating_sub(dim) / 2
}

/// Paste the image onto a zero-filled `target` x `target` square, centered
pub fn apply(image: GrayImage, target: u32) -> Result<GrayImage, DigitError> {
    let (width, height) = image.dimensions();
    if width > target || height > target {
        return Err(DigitError::PreprocessingError(format!(
            "{}x{} does not fit into {}x{}",
            width, height, target, target
        )));
    }

    let mut canvas = GrayImage::new(target, target);
    let x = offset(target, width);
    let y = offset(target, height);
    imageops::replace(&mut canvas, &image, x as i64, y as i64);
    Ok(canvas)
}
