//! Virtual-clock scheduler for tests.

use super::{Scheduler, Timer, TimerHandle, TimerId};
use std::time::Duration;

/// A scheduler that never sleeps. Time only moves when a test asks it to.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: TimerId,
    pending: Vec<(Duration, TimerId, Timer)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> Vec<Timer> {
        self.pending.iter().map(|(_, _, t)| *t).collect()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Ties resolve in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, Timer)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (at, _, _))| *at <= until)
            .min_by_key(|(_, (at, id, _))| (*at, *id))
            .map(|(i, _)| i)?;
        let (at, id, timer) = self.pending.remove(idx);
        self.now = self.now.max(at);
        Some((id, timer))
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, timer: Timer) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push((self.now + delay, id, timer));
        TimerHandle { id }
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(_, id, _)| *id != handle.id);
        self.pending.len() != before
    }
}
