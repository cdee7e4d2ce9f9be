use super::{Axis, GestureKind, Point};

/// Result of feeding one move sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No gesture in progress, or motion is off-axis / in the wrong direction.
    Ignored,
    /// Motion belongs to this gesture; default scrolling should be suppressed.
    Tracked { offset: f64, progress: f64 },
}

/// Terminal decision at gesture end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndOutcome {
    /// No gesture was in progress.
    Idle,
    /// Final displacement passed the threshold.
    Commit,
    /// Final displacement stayed within the threshold.
    Reset,
}

/// Per-instance start -> move* -> end state machine.
///
/// `origin` is `Some` exactly while a gesture is in progress. Displacement is
/// always measured from `origin`, never from the previous sample. `current`
/// only follows samples that were tracked, so the end decision agrees with
/// what the drag showed.
#[derive(Clone, Debug)]
pub struct Recognizer {
    kind: GestureKind,
    threshold: f64,
    origin: Option<Point>,
    current: Option<Point>,
}

impl Recognizer {
    pub fn new(kind: GestureKind, threshold: f64) -> Self {
        Self {
            kind,
            threshold: threshold.max(1.0),
            origin: None,
            current: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[cfg(test)]
    pub fn in_progress(&self) -> bool {
        self.origin.is_some()
    }

    pub fn start(&mut self, point: Point) {
        self.origin = Some(point);
        self.current = Some(point);
    }

    pub fn track(&mut self, point: Point) -> MoveOutcome {
        let Some(origin) = self.origin else {
            return MoveOutcome::Ignored;
        };
        let dx = origin.x - point.x;
        let dy = origin.y - point.y;
        let delta = self.kind.primary_delta(origin, point);
        if Axis::dominant(dx, dy) != Some(self.kind.axis()) || delta <= 0.0 {
            return MoveOutcome::Ignored;
        }
        self.current = Some(point);
        let offset = delta.min(self.threshold);
        MoveOutcome::Tracked {
            offset,
            progress: offset / self.threshold,
        }
    }

    pub fn finish(&mut self) -> EndOutcome {
        let (Some(origin), Some(current)) = (self.origin.take(), self.current.take()) else {
            return EndOutcome::Idle;
        };
        if self.kind.primary_delta(origin, current) > self.threshold {
            EndOutcome::Commit
        } else {
            EndOutcome::Reset
        }
    }

    /// Drops any in-progress gesture without a decision.
    pub fn clear(&mut self) {
        self.origin = None;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe() -> Recognizer {
        Recognizer::new(GestureKind::DragReveal, 100.0)
    }

    #[test]
    fn move_and_end_without_start_do_nothing() {
        let mut r = swipe();
        assert_eq!(r.track(Point::new(10.0, 0.0)), MoveOutcome::Ignored);
        assert_eq!(r.finish(), EndOutcome::Idle);
        assert!(!r.in_progress());
    }

    #[test]
    fn offset_is_clamped_to_threshold() {
        let mut r = swipe();
        r.start(Point::new(300.0, 50.0));
        match r.track(Point::new(120.0, 55.0)) {
            MoveOutcome::Tracked { offset, progress } => {
                assert_eq!(offset, 100.0);
                assert_eq!(progress, 1.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn vertical_motion_does_not_drive_a_swipe() {
        let mut r = swipe();
        r.start(Point::new(300.0, 50.0));
        assert_eq!(r.track(Point::new(280.0, 150.0)), MoveOutcome::Ignored);
        assert!(r.in_progress());
    }

    #[test]
    fn rightward_motion_is_ignored() {
        let mut r = swipe();
        r.start(Point::new(100.0, 50.0));
        assert_eq!(r.track(Point::new(180.0, 50.0)), MoveOutcome::Ignored);
        assert_eq!(r.finish(), EndOutcome::Reset);
    }

    #[test]
    fn end_decision_uses_last_sample_against_origin() {
        let mut r = swipe();
        r.start(Point::new(300.0, 50.0));
        r.track(Point::new(150.0, 50.0));
        r.track(Point::new(240.0, 50.0));
        assert_eq!(r.finish(), EndOutcome::Reset);

        r.start(Point::new(300.0, 50.0));
        r.track(Point::new(180.0, 52.0));
        assert_eq!(r.finish(), EndOutcome::Commit);
    }

    #[test]
    fn exactly_threshold_does_not_commit() {
        let mut r = swipe();
        r.start(Point::new(300.0, 0.0));
        r.track(Point::new(200.0, 0.0));
        assert_eq!(r.finish(), EndOutcome::Reset);
    }

    #[test]
    fn tap_without_moves_resets() {
        let mut r = swipe();
        r.start(Point::new(500.0, 20.0));
        assert_eq!(r.finish(), EndOutcome::Reset);
    }

    #[test]
    fn finish_twice_is_idle_the_second_time() {
        let mut r = swipe();
        r.start(Point::new(300.0, 0.0));
        r.track(Point::new(100.0, 0.0));
        assert_eq!(r.finish(), EndOutcome::Commit);
        assert_eq!(r.finish(), EndOutcome::Idle);
        assert!(!r.in_progress());
    }

    #[test]
    fn off_axis_drift_does_not_count_at_end() {
        let mut r = swipe();
        r.start(Point::new(300.0, 100.0));
        r.track(Point::new(260.0, 105.0));
        assert_eq!(r.track(Point::new(180.0, 400.0)), MoveOutcome::Ignored);
        assert_eq!(r.finish(), EndOutcome::Reset);
    }

    #[test]
    fn end_keeps_last_tracked_sample() {
        let mut r = swipe();
        r.start(Point::new(300.0, 0.0));
        r.track(Point::new(150.0, 0.0));
        assert_eq!(r.track(Point::new(140.0, 300.0)), MoveOutcome::Ignored);
        assert_eq!(r.finish(), EndOutcome::Commit);
    }

    #[test]
    fn pull_tracks_downward_motion() {
        let mut r = Recognizer::new(GestureKind::PullRefresh, 100.0);
        r.start(Point::new(50.0, 10.0));
        assert_eq!(
            r.track(Point::new(52.0, 60.0)),
            MoveOutcome::Tracked { offset: 50.0, progress: 0.5 }
        );
        assert_eq!(r.track(Point::new(52.0, 0.0)), MoveOutcome::Ignored);
    }
}
