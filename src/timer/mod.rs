//! One-shot delayed continuations.
//!
//! Everything on the page that "happens later" (the simulated submit delay,
//! toast dismissal, the hero intro) is a [`Timer`] handed to a
//! [`Scheduler`]. When the delay elapses the main loop receives
//! `AppEvent::Timer` and dispatches it like any other event, so timers never
//! touch application state from another task.

#[cfg(test)]
pub mod manual;

use crate::app::event::AppEvent;
use crate::page::notify::ToastId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

pub type TimerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// The simulated contact form submission has finished.
    SubmitComplete,
    /// A toast has been visible long enough and starts leaving.
    ToastExit(ToastId),
    /// A leaving toast finished its exit animation.
    ToastRemove(ToastId),
    /// Start of the staggered hero reveal.
    HeroIntro,
    /// Reveal the hero element at this index.
    HeroReveal(usize),
}

/// Returned by [`Scheduler::schedule`]; pass it to [`Scheduler::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    pub id: TimerId,
}

pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, timer: Timer) -> TimerHandle;

    /// Cancel a pending timer. Returns false if it already fired or was
    /// never scheduled here.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Called by the event loop once a timer's event has been received.
    fn fired(&mut self, _id: TimerId) {}
}

/// Schedules timers as tokio sleep tasks that post back to the event loop.
pub struct TokioScheduler {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    next_id: TimerId,
    pending: HashMap<TimerId, AbortHandle>,
}

impl TokioScheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            next_id: 0,
            pending: HashMap::new(),
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Abort every pending timer. Used on shutdown.
    pub fn cancel_all(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, timer: Timer) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;

        let tx = self.event_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::Timer { id, timer });
        });
        self.pending.insert(id, task.abort_handle());
        tracing::trace!(id, ?timer, delay_ms = delay.as_millis() as u64, "timer scheduled");
        TimerHandle { id }
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.remove(&handle.id) {
            Some(task) => {
                task.abort();
                tracing::trace!(id = handle.id, "timer cancelled");
                true
            }
            None => false,
        }
    }

    fn fired(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let handle = scheduler.schedule(Duration::from_millis(2000), Timer::SubmitComplete);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        match rx.recv().await {
            Some(AppEvent::Timer { id, timer }) => {
                assert_eq!(id, handle.id);
                assert_eq!(timer, Timer::SubmitComplete);
                scheduler.fired(id);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let handle = scheduler.schedule(Duration::from_millis(4000), Timer::ToastExit(1));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_fire_in_deadline_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        scheduler.schedule(Duration::from_millis(300), Timer::ToastRemove(7));
        scheduler.schedule(Duration::from_millis(100), Timer::HeroIntro);

        tokio::time::sleep(Duration::from_millis(400)).await;
        let first = rx.recv().await;
        let second = rx.recv().await;
        assert!(matches!(first, Some(AppEvent::Timer { timer: Timer::HeroIntro, .. })));
        assert!(matches!(second, Some(AppEvent::Timer { timer: Timer::ToastRemove(7), .. })));
    }
}
