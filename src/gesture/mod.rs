//! Touch gesture recognition for swipe rows and pull-to-refresh.
//!
//! Both gestures share one sampling skeleton (`Recognizer`): a start sample
//! fixes the origin, every move is measured against that origin, and the end
//! sample decides between commit and reset.

pub mod pull;
pub mod recognizer;
pub mod swipe;

pub use pull::{IndicatorState, PullToRefresh, Reloader};
pub use recognizer::EndOutcome;
pub use swipe::{Confirm, DeleteOutcome, RowView, SwipeRow};

/// Displacement (px) past which a gesture commits.
pub const DEFAULT_COMMIT_THRESHOLD_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Dominant axis of a displacement. Ties count as neither.
    pub fn dominant(dx: f64, dy: f64) -> Option<Axis> {
        let (ax, ay) = (dx.abs(), dy.abs());
        if ax > ay {
            Some(Axis::Horizontal)
        } else if ay > ax {
            Some(Axis::Vertical)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Leftward drag on a list row that reveals its delete action.
    DragReveal,
    /// Downward drag from the top of the page that reloads it.
    PullRefresh,
}

impl GestureKind {
    pub fn axis(self) -> Axis {
        match self {
            GestureKind::DragReveal => Axis::Horizontal,
            GestureKind::PullRefresh => Axis::Vertical,
        }
    }

    /// Displacement along the gesture axis, positive in the expected direction.
    pub fn primary_delta(self, origin: Point, point: Point) -> f64 {
        match self {
            GestureKind::DragReveal => origin.x - point.x,
            GestureKind::PullRefresh => point.y - origin.y,
        }
    }
}
