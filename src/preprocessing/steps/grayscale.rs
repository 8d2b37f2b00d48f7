use crate::error::DigitError;
use image::{DynamicImage, GrayImage};

/// Convert an image to 8-bit luma
/// Canvas buffers are already luma; image files usually are not
pub fn apply(image: DynamicImage) -> Result<GrayImage, DigitError> {
    Ok(match image {
        DynamicImage::ImageLuma8(gray) => gray,
        other => other.to_luma8(),
    })
}
