//! Single-shot deferred tasks (row exit animation, refresh reload).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo::timers::callback::Timeout;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Runs `task` once after `delay_ms`.
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskId;
    /// Returns false if the task already ran or was never scheduled.
    fn cancel(&self, id: TaskId) -> bool;
}

/// Browser timers. Pending `Timeout`s are owned here so they can be cancelled.
///
/// A fired `Timeout` cannot be dropped from inside its own callback, so it is
/// parked in `spent` and released on the next `schedule`/`cancel` call.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    pending: Rc<RefCell<HashMap<TaskId, Timeout>>>,
    spent: Rc<RefCell<Vec<Timeout>>>,
}

impl BrowserScheduler {
    fn release_spent(&self) {
        self.spent.borrow_mut().clear();
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskId {
        self.release_spent();
        let id = TaskId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let pending = Rc::downgrade(&self.pending);
        let spent = Rc::downgrade(&self.spent);
        let timeout = Timeout::new(delay_ms, move || {
            let fired = pending
                .upgrade()
                .and_then(|pending| pending.borrow_mut().remove(&id));
            task();
            match (fired, spent.upgrade()) {
                (Some(fired), Some(spent)) => spent.borrow_mut().push(fired),
                (Some(fired), None) => {
                    let _ = fired.forget();
                }
                _ => {}
            }
        });
        self.pending.borrow_mut().insert(id, timeout);
        id
    }

    fn cancel(&self, id: TaskId) -> bool {
        self.release_spent();
        self.pending.borrow_mut().remove(&id).is_some()
    }
}

/// Deterministic clock for tests: tasks run only when `advance` passes their deadline.
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<u64>,
    next_id: Cell<u64>,
    queue: RefCell<Vec<(u64, TaskId, Task)>>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn advance(&self, ms: u64) {
        let now = self.now_ms.get() + ms;
        self.now_ms.set(now);
        loop {
            let due = {
                let mut queue = self.queue.borrow_mut();
                let idx = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= now)
                    .min_by_key(|(_, (at, id, _))| (*at, id.0))
                    .map(|(i, _)| i);
                idx.map(|i| queue.remove(i))
            };
            match due {
                Some((_, _, task)) => task(),
                None => break,
            }
        }
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskId {
        let id = TaskId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let at = self.now_ms.get() + u64::from(delay_ms);
        self.queue.borrow_mut().push((at, id, task));
        id
    }

    fn cancel(&self, id: TaskId) -> bool {
        let mut queue = self.queue.borrow_mut();
        let before = queue.len();
        queue.retain(|(_, queued, _)| *queued != id);
        queue.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_tasks_run_at_their_deadline() {
        let sched = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        sched.schedule(300, Box::new(move || f.set(f.get() + 1)));
        sched.advance(299);
        assert_eq!(fired.get(), 0);
        sched.advance(1);
        assert_eq!(fired.get(), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn cancelled_tasks_never_run() {
        let sched = ManualScheduler::default();
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        let id = sched.schedule(10, Box::new(move || f.set(true)));
        assert!(sched.cancel(id));
        assert!(!sched.cancel(id));
        sched.advance(50);
        assert!(!fired.get());
    }
}
