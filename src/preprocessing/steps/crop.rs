use crate::error::DigitError;
use image::{imageops, GrayImage};

/// Smallest axis-aligned rectangle containing every non-zero pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Locate the ink. `None` when the image has no non-zero pixel.
pub fn bounding_box(image: &GrayImage) -> Option<BoundingBox> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[0] == 0 {
            continue;
        }
        found = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    found.then(|| BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Crop to the bounding box of the drawn mark
pub fn apply(image: GrayImage) -> Result<GrayImage, DigitError> {
    let bbox = bounding_box(&image).ok_or(DigitError::EmptyCanvas)?;
    Ok(imageops::crop_imm(&image, bbox.x, bbox.y, bbox.width, bbox.height).to_image())
}
