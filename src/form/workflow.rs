//! Contact form submit lifecycle.
//!
//! ```text
//! Idle --submit(invalid)--> Idle   (errors displayed)
//! Idle --submit(valid)--> Submitting --(delay)--> Succeeded --(fields cleared)--> Idle
//! ```
//!
//! Nothing is sent anywhere. The "submission" is a fixed delay after which
//! the success modal is shown and the form is reset.

use crate::form::field::{Emphasis, Field};
use crate::form::rules::{self, FieldError};
use crate::form::snapshot::FormSnapshot;
use crate::page::tree::{Control, Overlay, UiTree};
use crate::timer::{Scheduler, Timer, TimerHandle};
use std::time::Duration;

/// Label shown on the submit control while a submission is pending.
pub const LOADING_LABEL: &str = "⟳ Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Validation failed; errors are in rule order.
    Invalid(Vec<FieldError>),
    /// Validation passed and the delayed completion is scheduled.
    Accepted,
    /// A submission is already pending; nothing was touched.
    Busy,
}

pub struct FormWorkflow {
    state: SubmitState,
    submit_delay: Duration,
    original_label: Option<String>,
    pending: Option<TimerHandle>,
    completed: u64,
}

impl FormWorkflow {
    pub fn new(submit_delay: Duration) -> Self {
        Self {
            state: SubmitState::Idle,
            submit_delay,
            original_label: None,
            pending: None,
            completed: 0,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Number of submissions that reached `Succeeded`.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }

    fn transition(&mut self, next: SubmitState) {
        tracing::debug!(from = ?self.state, to = ?next, "contact form state");
        self.state = next;
    }

    /// Blank every error slot and put every input back to neutral emphasis.
    pub fn clear_errors<U: UiTree + ?Sized>(&self, ui: &mut U) {
        for field in Field::ALL {
            ui.set_error_text(field, "");
            ui.set_emphasis(field, Emphasis::Neutral);
        }
    }

    pub fn submit<U, S>(&mut self, snapshot: FormSnapshot, ui: &mut U, timers: &mut S) -> SubmitResult
    where
        U: UiTree + ?Sized,
        S: Scheduler + ?Sized,
    {
        if self.state == SubmitState::Submitting {
            tracing::debug!("submit ignored, submission already pending");
            return SubmitResult::Busy;
        }

        self.clear_errors(ui);

        self.transition(SubmitState::Validating);
        let errors = rules::validate(&snapshot);

        if !errors.is_empty() {
            for err in &errors {
                ui.set_error_text(err.field, &err.message());
                ui.set_emphasis(err.field, Emphasis::Error);
            }
            tracing::info!(errors = errors.len(), "contact form rejected");
            self.transition(SubmitState::Idle);
            return SubmitResult::Invalid(errors);
        }

        self.transition(SubmitState::Submitting);
        self.original_label = Some(ui.control_label(Control::Submit).to_string());
        ui.set_control_label(Control::Submit, LOADING_LABEL);
        ui.set_control_enabled(Control::Submit, false);
        self.pending = Some(timers.schedule(self.submit_delay, Timer::SubmitComplete));
        tracing::info!(delay_ms = self.submit_delay.as_millis() as u64, "contact form accepted");
        SubmitResult::Accepted
    }

    /// Finish a pending submission. Returns false if none was pending.
    pub fn complete<U: UiTree + ?Sized>(&mut self, ui: &mut U) -> bool {
        if self.state != SubmitState::Submitting {
            return false;
        }
        self.pending = None;

        if let Some(label) = self.original_label.take() {
            ui.set_control_label(Control::Submit, &label);
        }
        ui.set_control_enabled(Control::Submit, true);

        self.transition(SubmitState::Succeeded);
        self.completed += 1;
        ui.show_overlay(Overlay::SuccessModal);
        for field in Field::ALL {
            ui.clear_field(field);
        }
        tracing::info!("contact form submitted");

        self.transition(SubmitState::Idle);
        true
    }
}
