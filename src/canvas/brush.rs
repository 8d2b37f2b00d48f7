use super::stroke::Point;
use image::{GrayImage, Luma};

/// Ink value painted by the brush
pub const INK: Luma<u8> = Luma([255u8]);

/// Round-capped, round-joined brush, painted without antialiasing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    diameter: f32,
}

impl Brush {
    /// Width is rounded to whole pixels, minimum 1
    pub fn new(width: f32) -> Self {
        Self {
            diameter: width.round().max(1.0),
        }
    }

    /// Odd widths center on the pixel, even widths on the pixel corner,
    /// so a straight stroke covers exactly `width` pixels across.
    fn center_bias(&self) -> f32 {
        if self.diameter as u32 % 2 == 1 {
            0.5
        } else {
            0.0
        }
    }

    /// Paint the capsule around `from -> to`: every pixel whose center lies
    /// strictly closer than `width / 2` to the segment. Pixels outside the
    /// image are clipped.
    pub fn paint_segment(&self, image: &mut GrayImage, from: Point, to: Point) {
        let radius = self.diameter / 2.0;
        let bias = self.center_bias();
        let (ax, ay) = (from.x as f32 + bias, from.y as f32 + bias);
        let (bx, by) = (to.x as f32 + bias, to.y as f32 + bias);
        let (width, height) = image.dimensions();

        let x0 = ((ax.min(bx) - radius).floor() as i64).max(0);
        let y0 = ((ay.min(by) - radius).floor() as i64).max(0);
        let x1 = ((ax.max(bx) + radius).ceil() as i64).min(width as i64 - 1);
        let y1 = ((ay.max(by) + radius).ceil() as i64).min(height as i64 - 1);

        for py in y0..=y1 {
            for px in x0..=x1 {
                let d2 = distance_sq_to_segment(
                    (px as f32 + 0.5, py as f32 + 0.5),
                    (ax, ay),
                    (bx, by),
                );
                if d2 < radius * radius {
                    image.put_pixel(px as u32, py as u32, INK);
                }
            }
        }
    }
}

fn distance_sq_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    (p.0 - cx).powi(2) + (p.1 - cy).powi(2)
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BRUSH_WIDTH)
    }
}
