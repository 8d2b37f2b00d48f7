//! Freehand drawing surface
//!
//! Pointer input drives an explicit [`StrokeState`] machine, and every segment
//! it emits is rasterized into a fixed-size grayscale buffer. No GUI runtime
//! is needed to exercise any of it.

pub mod brush;
pub mod stroke;

pub use brush::Brush;
pub use stroke::{Point, PointerEvent, StrokeState};

use image::GrayImage;

/// Fixed-size single-channel drawing buffer, white ink on black
pub struct Canvas {
    image: GrayImage,
    brush: Brush,
    state: StrokeState,
}

impl Canvas {
    /// Create a blank `size` x `size` canvas with the default brush
    pub fn new(size: u32) -> Self {
        Self::with_brush(size, Brush::default())
    }

    pub fn with_brush(size: u32, brush: Brush) -> Self {
        Self {
            image: GrayImage::new(size, size),
            brush,
            state: StrokeState::Idle,
        }
    }

    /// Feed a pointer event. Returns true when the buffer changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match self.state.transition(event) {
            Some((from, to)) => {
                self.brush.paint_segment(&mut self.image, from, to);
                true
            }
            None => false,
        }
    }

    /// Replay a whole stroke: press at the first point, move through the rest, release
    pub fn draw_stroke(&mut self, points: &[Point]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        let mut changed = self.handle(PointerEvent::Press(*first));
        for point in rest {
            changed |= self.handle(PointerEvent::Move(*point));
        }
        self.handle(PointerEvent::Release);
        changed
    }

    /// Zero the buffer and drop any stroke in progress
    pub fn clear(&mut self) {
        self.image.fill(0);
        self.state = StrokeState::Idle;
    }

    pub fn is_blank(&self) -> bool {
        self.image.as_raw().iter().all(|&p| p == 0)
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new(280);
        assert!(canvas.is_blank());
        assert_eq!(canvas.image().dimensions(), (280, 280));
    }

    #[test]
    fn test_press_alone_does_not_paint() {
        let mut canvas = Canvas::new(100);
        assert!(!canvas.handle(PointerEvent::Press(Point::new(50, 50))));
        assert!(canvas.is_blank());
        assert!(canvas.state().is_drawing());
    }

    #[test]
    fn test_move_while_drawing_paints() {
        let mut canvas = Canvas::new(100);
        canvas.handle(PointerEvent::Press(Point::new(20, 50)));
        assert!(canvas.handle(PointerEvent::Move(Point::new(80, 50))));
        assert_eq!(canvas.image().get_pixel(50, 50).0[0], 255);
    }

    #[test]
    fn test_move_after_release_does_not_paint() {
        let mut canvas = Canvas::new(100);
        canvas.handle(PointerEvent::Press(Point::new(20, 50)));
        canvas.handle(PointerEvent::Release);
        assert!(!canvas.handle(PointerEvent::Move(Point::new(80, 50))));
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_clear_resets_buffer_and_state() {
        let mut canvas = Canvas::new(100);
        canvas.handle(PointerEvent::Press(Point::new(20, 20)));
        canvas.handle(PointerEvent::Move(Point::new(40, 40)));
        canvas.clear();
        assert!(canvas.is_blank());
        assert_eq!(canvas.state(), StrokeState::Idle);
        assert_eq!(canvas.size(), 100);
    }

    #[test]
    fn test_draw_stroke_replays_events() {
        let mut canvas = Canvas::new(100);
        let changed = canvas.draw_stroke(&[Point::new(10, 10), Point::new(10, 90)]);
        assert!(changed);
        assert_eq!(canvas.state(), StrokeState::Idle);
        assert_eq!(canvas.image().get_pixel(10, 50).0[0], 255);
        assert!(!canvas.draw_stroke(&[]));
    }
}
