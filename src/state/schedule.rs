//! Deferred actions driven by the UI tick.
//!
//! Tasks carry the instant they become due and are collected by
//! `take_due`. A task can be cancelled any time before it is collected.

use std::time::{Duration, Instant};

/// Identifies a scheduled task.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct ScheduledTask<A> {
    id: TaskId,
    due: Instant,
    action: A,
}

/// Holds actions waiting for their due instant.
///
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    next_id: u64,
    tasks: Vec<ScheduledTask<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Scheduler {
            next_id: 0,
            tasks: vec![],
        }
    }
}

impl<A> Scheduler<A> {
    /// Schedule the action to become due `delay` after `now`.
    ///
    pub fn schedule(&mut self, delay: Duration, now: Instant, action: A) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due: now + delay,
            action,
        });
        id
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    ///
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Remove and return the actions due at `now`, earliest first.
    ///
    pub fn take_due(&mut self, now: Instant) -> Vec<A> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|task| task.due <= now);
        self.tasks = pending;
        due.sort_by_key(|task| (task.due, task.id.0));
        due.into_iter().map(|task| task.action).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
