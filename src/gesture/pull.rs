//! Pull-to-refresh on the whole viewport.

use std::rc::Rc;

use super::recognizer::{EndOutcome, MoveOutcome, Recognizer};
use super::{GestureKind, Point};
use crate::schedule::{Scheduler, TaskId};

/// Resting position of the indicator (hidden above the viewport), in px.
pub const INDICATOR_HIDDEN_TOP_PX: f64 = -50.0;

pub trait Reloader {
    fn reload(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PullLabel {
    Pull,
    Release,
    Refreshing,
}

impl PullLabel {
    pub fn text(self) -> &'static str {
        match self {
            PullLabel::Pull => "↓ Pull to refresh",
            PullLabel::Release => "↑ Release to refresh",
            PullLabel::Refreshing => "🔄 Refreshing...",
        }
    }
}

/// What the pull indicator element should look like.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorState {
    pub top_px: f64,
    pub label: PullLabel,
    pub active: bool,
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self {
            top_px: INDICATOR_HIDDEN_TOP_PX,
            label: PullLabel::Pull,
            active: false,
        }
    }
}

impl IndicatorState {
    fn dragging(progress: f64) -> Self {
        Self {
            top_px: INDICATOR_HIDDEN_TOP_PX * (1.0 - progress),
            label: if progress >= 1.0 {
                PullLabel::Release
            } else {
                PullLabel::Pull
            },
            active: false,
        }
    }

    fn refreshing(self) -> Self {
        Self {
            label: PullLabel::Refreshing,
            active: true,
            ..self
        }
    }
}

pub struct PullToRefresh {
    recognizer: Recognizer,
    indicator: IndicatorState,
    pending_refresh: Option<TaskId>,
    refresh_delay_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    reloader: Rc<dyn Reloader>,
}

impl PullToRefresh {
    pub fn new(
        threshold: f64,
        refresh_delay_ms: u32,
        scheduler: Rc<dyn Scheduler>,
        reloader: Rc<dyn Reloader>,
    ) -> Self {
        Self {
            recognizer: Recognizer::new(GestureKind::PullRefresh, threshold),
            indicator: IndicatorState::default(),
            pending_refresh: None,
            refresh_delay_ms,
            scheduler,
            reloader,
        }
    }

    pub fn indicator(&self) -> IndicatorState {
        self.indicator
    }

    #[cfg(test)]
    pub fn is_tracking(&self) -> bool {
        self.recognizer.in_progress()
    }

    /// Arms only when the page is scrolled to the very top.
    pub fn touch_start(&mut self, point: Point, scroll_y: f64) {
        if scroll_y != 0.0 || self.pending_refresh.is_some() {
            return;
        }
        self.recognizer.start(point);
    }

    /// Returns true when the browser's default scroll should be suppressed.
    pub fn touch_move(&mut self, point: Point, scroll_y: f64) -> bool {
        if scroll_y != 0.0 {
            return false;
        }
        match self.recognizer.track(point) {
            MoveOutcome::Tracked { progress, .. } => {
                self.indicator = IndicatorState::dragging(progress);
                log::trace!("pull progress {progress:.2}");
                true
            }
            MoveOutcome::Ignored => false,
        }
    }

    pub fn touch_end(&mut self) -> EndOutcome {
        let outcome = self.recognizer.finish();
        match outcome {
            EndOutcome::Commit => {
                self.indicator = self.indicator.refreshing();
                let reloader = self.reloader.clone();
                let id = self
                    .scheduler
                    .schedule(self.refresh_delay_ms, Box::new(move || reloader.reload()));
                self.pending_refresh = Some(id);
                log::info!("refresh scheduled in {}ms", self.refresh_delay_ms);
            }
            EndOutcome::Reset => {
                self.indicator = IndicatorState::default();
            }
            EndOutcome::Idle => {}
        }
        outcome
    }
}

impl Drop for PullToRefresh {
    // the shell unmounted before the reload fired
    fn drop(&mut self) {
        if let Some(id) = self.pending_refresh.take() {
            if self.scheduler.cancel(id) {
                log::debug!("pending refresh cancelled");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingReloader(Cell<u32>);

    impl Reloader for CountingReloader {
        fn reload(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn setup() -> (Rc<ManualScheduler>, Rc<CountingReloader>, PullToRefresh) {
        let sched = Rc::new(ManualScheduler::default());
        let reloader = Rc::new(CountingReloader::default());
        let pull = PullToRefresh::new(100.0, 1_000, sched.clone(), reloader.clone());
        (sched, reloader, pull)
    }

    #[test]
    fn pull_past_threshold_schedules_reload() {
        let (sched, reloader, mut pull) = setup();
        pull.touch_start(Point::new(100.0, 20.0), 0.0);
        assert!(pull.touch_move(Point::new(102.0, 150.0), 0.0));
        assert_eq!(pull.indicator().label, PullLabel::Release);
        assert_eq!(pull.indicator().top_px, 0.0);
        assert_eq!(pull.touch_end(), EndOutcome::Commit);

        let ind = pull.indicator();
        assert_eq!(ind.label, PullLabel::Refreshing);
        assert!(ind.active);
        sched.advance(999);
        assert_eq!(reloader.0.get(), 0);
        sched.advance(1);
        assert_eq!(reloader.0.get(), 1);
    }

    #[test]
    fn start_below_top_records_nothing() {
        let (sched, reloader, mut pull) = setup();
        pull.touch_start(Point::new(100.0, 20.0), 35.0);
        assert!(!pull.is_tracking());
        assert!(!pull.touch_move(Point::new(100.0, 400.0), 0.0));
        assert_eq!(pull.touch_end(), EndOutcome::Idle);
        assert_eq!(pull.indicator(), IndicatorState::default());
        sched.advance(5_000);
        assert_eq!(reloader.0.get(), 0);
    }

    #[test]
    fn partial_pull_moves_indicator_then_resets() {
        let (sched, _reloader, mut pull) = setup();
        pull.touch_start(Point::new(100.0, 0.0), 0.0);
        assert!(pull.touch_move(Point::new(100.0, 50.0), 0.0));
        let ind = pull.indicator();
        assert_eq!(ind.top_px, -25.0);
        assert_eq!(ind.label, PullLabel::Pull);
        assert_eq!(pull.touch_end(), EndOutcome::Reset);
        assert_eq!(pull.indicator(), IndicatorState::default());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn upward_drag_does_not_block_scrolling() {
        let (_sched, _reloader, mut pull) = setup();
        pull.touch_start(Point::new(100.0, 300.0), 0.0);
        assert!(!pull.touch_move(Point::new(100.0, 200.0), 0.0));
    }

    #[test]
    fn second_pull_while_refreshing_is_ignored() {
        let (sched, reloader, mut pull) = setup();
        pull.touch_start(Point::new(0.0, 0.0), 0.0);
        pull.touch_move(Point::new(0.0, 180.0), 0.0);
        pull.touch_end();
        pull.touch_start(Point::new(0.0, 0.0), 0.0);
        assert!(!pull.is_tracking());
        assert_eq!(sched.pending(), 1);
        sched.advance(1_000);
        assert_eq!(reloader.0.get(), 1);
    }

    #[test]
    fn sideways_swipe_with_downward_drift_does_not_reload() {
        let (sched, reloader, mut pull) = setup();
        pull.touch_start(Point::new(300.0, 0.0), 0.0);
        assert!(!pull.touch_move(Point::new(50.0, 110.0), 0.0));
        assert_eq!(pull.indicator(), IndicatorState::default());
        assert_eq!(pull.touch_end(), EndOutcome::Reset);
        sched.advance(5_000);
        assert_eq!(reloader.0.get(), 0);
    }

    #[test]
    fn pull_to_exact_threshold_shows_release_but_does_not_refresh() {
        let (sched, reloader, mut pull) = setup();
        pull.touch_start(Point::new(100.0, 0.0), 0.0);
        assert!(pull.touch_move(Point::new(100.0, 100.0), 0.0));
        assert_eq!(pull.indicator().label, PullLabel::Release);
        assert_eq!(pull.touch_end(), EndOutcome::Reset);
        assert_eq!(pull.indicator(), IndicatorState::default());
        assert_eq!(sched.pending(), 0);
        sched.advance(5_000);
        assert_eq!(reloader.0.get(), 0);
    }

    #[test]
    fn dropping_cancels_pending_refresh() {
        let (sched, reloader, mut pull) = setup();
        pull.touch_start(Point::new(0.0, 0.0), 0.0);
        pull.touch_move(Point::new(0.0, 180.0), 0.0);
        assert_eq!(pull.touch_end(), EndOutcome::Commit);
        drop(pull);
        assert_eq!(sched.pending(), 0);
        sched.advance(5_000);
        assert_eq!(reloader.0.get(), 0);
    }

    #[test]
    fn double_end_stays_neutral() {
        let (_sched, _reloader, mut pull) = setup();
        pull.touch_start(Point::new(0.0, 0.0), 0.0);
        pull.touch_move(Point::new(0.0, 30.0), 0.0);
        assert_eq!(pull.touch_end(), EndOutcome::Reset);
        assert_eq!(pull.touch_end(), EndOutcome::Idle);
        assert_eq!(pull.indicator(), IndicatorState::default());
    }
}
