//! Transient toast notifications.
//!
//! A toast stays up for the visible period, then plays a short exit
//! animation before it is removed. Both steps are timers, so several toasts
//! can be in flight at once.

use crate::timer::{Scheduler, Timer};
use std::time::Duration;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub message: String,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
    next_id: ToastId,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn notify<S: Scheduler + ?Sized>(
        &mut self,
        title: &str,
        message: &str,
        visible_for: Duration,
        timers: &mut S,
    ) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.to_string(),
            message: message.to_string(),
            phase: ToastPhase::Visible,
        });
        timers.schedule(visible_for, Timer::ToastExit(id));
        tracing::debug!(id, title, "toast shown");
        id
    }

    /// Start the exit animation. Unknown or already leaving toasts are ignored.
    pub fn begin_exit<S: Scheduler + ?Sized>(&mut self, id: ToastId, exit_for: Duration, timers: &mut S) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Leaving;
                timers.schedule(exit_for, Timer::ToastRemove(id));
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;

    const VISIBLE: Duration = Duration::from_millis(4000);
    const EXIT: Duration = Duration::from_millis(300);

    /// Fire every timer due by `until`, the way the event loop would.
    fn run_until(toasts: &mut Notifications, timers: &mut ManualScheduler, until_ms: u64) {
        let until = Duration::from_millis(until_ms);
        while let Some((_, timer)) = timers.pop_due(until) {
            match timer {
                Timer::ToastExit(id) => {
                    toasts.begin_exit(id, EXIT, timers);
                }
                Timer::ToastRemove(id) => {
                    toasts.remove(id);
                }
                other => panic!("unexpected timer {:?}", other),
            }
        }
        timers.set_now(until);
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut toasts = Notifications::new();
        let mut timers = ManualScheduler::new();
        let id = toasts.notify("Resume Download", "Your Resume download will begin shortly.", VISIBLE, &mut timers);

        run_until(&mut toasts, &mut timers, 3999);
        assert_eq!(toasts.toasts()[0].phase, ToastPhase::Visible);

        run_until(&mut toasts, &mut timers, 4000);
        assert_eq!(toasts.toasts()[0].phase, ToastPhase::Leaving);
        assert_eq!(toasts.toasts()[0].id, id);

        run_until(&mut toasts, &mut timers, 4299);
        assert_eq!(toasts.toasts().len(), 1);

        run_until(&mut toasts, &mut timers, 4300);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_overlapping_toasts_expire_independently() {
        let mut toasts = Notifications::new();
        let mut timers = ManualScheduler::new();
        toasts.notify("One", "first", VISIBLE, &mut timers);
        run_until(&mut toasts, &mut timers, 1000);
        toasts.notify("Two", "second", VISIBLE, &mut timers);

        run_until(&mut toasts, &mut timers, 4300);
        let titles: Vec<_> = toasts.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Two"]);

        run_until(&mut toasts, &mut timers, 5300);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_exit_is_only_scheduled_once() {
        let mut toasts = Notifications::new();
        let mut timers = ManualScheduler::new();
        let id = toasts.notify("t", "m", VISIBLE, &mut timers);
        assert!(toasts.begin_exit(id, EXIT, &mut timers));
        assert!(!toasts.begin_exit(id, EXIT, &mut timers));
        assert!(!toasts.begin_exit(99, EXIT, &mut timers));
    }
}
