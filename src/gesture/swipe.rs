//! Swipe-to-delete list rows.

use super::recognizer::{EndOutcome, MoveOutcome, Recognizer};
use super::{GestureKind, Point};
use crate::schedule::Scheduler;

/// Presentation surface of one row. Implemented over `HtmlElement` in the browser.
pub trait RowView: Clone + 'static {
    /// Horizontal offset to the left, in px. Zero is neutral.
    fn set_offset(&self, px: f64);
    fn set_revealed(&self, revealed: bool);
    fn play_exit(&self);
    fn detach(&self);
}

/// User confirmation before a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row is not revealed, or is already leaving.
    Inactive,
    Declined,
    /// Exit animation started; the row detaches after the exit delay.
    Removing,
}

pub struct SwipeRow<V: RowView> {
    view: V,
    recognizer: Recognizer,
    revealed: bool,
    removing: bool,
}

impl<V: RowView> SwipeRow<V> {
    pub fn new(view: V, threshold: f64) -> Self {
        Self {
            view,
            recognizer: Recognizer::new(GestureKind::DragReveal, threshold),
            revealed: false,
            removing: false,
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn touch_start(&mut self, point: Point) {
        if self.removing {
            return;
        }
        self.recognizer.start(point);
    }

    /// Returns true when the browser's default scroll should be suppressed.
    pub fn touch_move(&mut self, point: Point) -> bool {
        match self.recognizer.track(point) {
            MoveOutcome::Tracked { offset, .. } => {
                self.view.set_offset(offset);
                true
            }
            MoveOutcome::Ignored => false,
        }
    }

    pub fn touch_end(&mut self) -> EndOutcome {
        let outcome = self.recognizer.finish();
        match outcome {
            EndOutcome::Commit => {
                self.revealed = true;
                self.view.set_revealed(true);
                self.view.set_offset(self.recognizer.threshold());
                log::debug!("row revealed");
            }
            EndOutcome::Reset => {
                self.revealed = false;
                self.view.set_offset(0.0);
                self.view.set_revealed(false);
            }
            EndOutcome::Idle => {}
        }
        outcome
    }

    /// Delete action on a revealed row: confirm, animate out, detach after `exit_ms`.
    pub fn request_delete(
        &mut self,
        confirm: &dyn Confirm,
        prompt: &str,
        scheduler: &dyn Scheduler,
        exit_ms: u32,
    ) -> DeleteOutcome {
        if !self.revealed || self.removing {
            return DeleteOutcome::Inactive;
        }
        if !confirm.confirm(prompt) {
            return DeleteOutcome::Declined;
        }
        self.removing = true;
        self.recognizer.clear();
        self.view.play_exit();
        let view = self.view.clone();
        scheduler.schedule(exit_ms, Box::new(move || view.detach()));
        log::info!("row deleted, detaching in {exit_ms}ms");
        DeleteOutcome::Removing
    }
}
