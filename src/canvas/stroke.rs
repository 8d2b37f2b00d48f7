/// Canvas pixel coordinate. May lie outside the canvas while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a sub-pixel pointer position to the nearest pixel
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }
}

/// Primary-button pointer input, already mapped into canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release,
}

/// Stroke state of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing { last: Point },
}

/// A segment the canvas must paint as the result of a transition
pub type Segment = (Point, Point);

impl StrokeState {
    /// Advance the state machine. Returns the segment to paint, if any.
    pub fn transition(&mut self, event: PointerEvent) -> Option<Segment> {
        match (*self, event) {
            (_, PointerEvent::Press(p)) => {
                *self = StrokeState::Drawing { last: p };
                None
            }
            (StrokeState::Drawing { last }, PointerEvent::Move(p)) => {
                *self = StrokeState::Drawing { last: p };
                Some((last, p))
            }
            (StrokeState::Idle, PointerEvent::Move(_)) => None,
            (_, PointerEvent::Release) => {
                *self = StrokeState::Idle;
                None
            }
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, StrokeState::Drawing { .. })
    }
}
