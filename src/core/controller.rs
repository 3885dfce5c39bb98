//! Waitlist form controller
//!
//! Owns the single `FormState` and drives a `FormView` through step changes,
//! validation feedback and the submission lifecycle. The view is injected so
//! the same logic runs against reactive signals in the browser and a recording
//! fake in tests.

use std::collections::BTreeSet;
use std::time::Duration;

use leptos::logging::{log, warn};

use super::config::WaitlistConfig;
use super::form::{FormFields, FormState, Step, TransitionError};
use super::payload::{PageContext, WaitlistPayload};
use super::submission::{SubmitError, WaitlistTransport};

/// What the controller needs from the page
pub trait FormView {
    /// Current values of the text inputs
    fn read_fields(&self) -> FormFields;

    /// Currently checked tool tags
    fn read_selected_tools(&self) -> BTreeSet<String>;

    /// Show the container for `step`, hide the others
    fn show_step(&mut self, step: Step);

    /// Active flags of the three step indicators
    fn set_indicators(&mut self, active: [bool; 3]);

    /// Outline the email input as invalid for `duration`
    fn flag_email(&mut self, duration: Duration);

    fn set_submit_enabled(&mut self, enabled: bool);

    fn submit_label(&self) -> String;

    fn set_submit_label(&mut self, label: &str);

    /// Error display text, `None` clears it
    fn show_error(&mut self, message: Option<&str>);

    /// Empty every input and uncheck every tool
    fn clear_inputs(&mut self);
}

/// Controller for the multi-step waitlist form
#[derive(Debug)]
pub struct WaitlistController<V> {
    state: FormState,
    view: V,
    config: WaitlistConfig,
    /// Submit label to restore once the in-flight request settles
    pending_label: Option<String>,
}

impl<V: FormView> WaitlistController<V> {
    pub fn new(view: V, config: WaitlistConfig) -> Self {
        let mut controller = Self {
            state: FormState::new(),
            view,
            config,
            pending_label: None,
        };
        controller.enter(Step::One);
        controller
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn config(&self) -> &WaitlistConfig {
        &self.config
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.pending_label.is_some()
    }

    /// "Next" pressed on step `from`
    pub fn advance(&mut self, from: Step) -> Result<Step, TransitionError> {
        self.sync_from_view();
        match self.state.advance_target(from) {
            Ok(next) => {
                self.enter(next);
                Ok(next)
            }
            Err(err @ TransitionError::Invalid(_)) => {
                self.view.flag_email(self.config.email_flag_duration);
                Err(err)
            }
            Err(err) => {
                warn!("[waitlist] {}", err);
                Err(err)
            }
        }
    }

    /// "Back" pressed on step `from`
    pub fn retreat(&mut self, from: Step) -> Result<Step, TransitionError> {
        match self.state.retreat_target(from) {
            Ok(previous) => {
                self.enter(previous);
                Ok(previous)
            }
            Err(err) => {
                warn!("[waitlist] {}", err);
                Err(err)
            }
        }
    }

    /// First half of a submission: lock the trigger and build the payload.
    ///
    /// Returns `None` unless the form is on step 3 with no submission in flight.
    pub fn begin_submit(&mut self, page: &PageContext) -> Option<WaitlistPayload> {
        if self.state.current_step() != Step::Three {
            warn!("[waitlist] submit ignored on step {}", self.state.current_step());
            return None;
        }
        if self.is_submitting() {
            warn!("[waitlist] submission already in flight, ignoring");
            return None;
        }

        self.sync_from_view();

        let original_label = self.view.submit_label();
        self.view.set_submit_enabled(false);
        self.view.set_submit_label(&self.config.pending_label);
        self.pending_label = Some(original_label);

        Some(WaitlistPayload::assemble(&self.state, page))
    }

    /// Second half of a submission: show the outcome and unlock the trigger
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> Step {
        match outcome {
            Ok(()) => {
                log!("[waitlist] signup accepted");
                self.enter(Step::Success);
            }
            Err(err) => {
                let message = err.user_message();
                warn!("[waitlist] signup failed: {:?}", err);
                self.state.fail(message.clone());
                self.view.show_error(Some(&message));
                self.view.show_step(Step::Error);
            }
        }

        if let Some(label) = self.pending_label.take() {
            self.view.set_submit_label(&label);
        }
        self.view.set_submit_enabled(true);

        self.state.current_step()
    }

    /// Full submission through `transport`.
    ///
    /// Returns the resulting step, or `None` if the submission was not started.
    pub async fn submit<T: WaitlistTransport>(
        &mut self,
        transport: &T,
        page: &PageContext,
    ) -> Option<Step> {
        let payload = self.begin_submit(page)?;
        let outcome = transport.submit(&self.config.endpoint, &payload).await;
        Some(self.finish_submit(outcome))
    }

    /// Back to step 3 from the error display, values intact
    pub fn retry(&mut self) -> Result<Step, TransitionError> {
        let step = self.state.retry()?;
        self.enter(step);
        Ok(step)
    }

    /// Clear everything and return to step 1
    pub fn reset(&mut self) {
        self.state.reset();
        self.view.clear_inputs();
        self.enter(Step::One);
    }

    fn enter(&mut self, step: Step) {
        self.state.go_to(step);
        self.view.show_error(None);
        self.view.show_step(step);
        if let Some(active) = step.indicator_states() {
            self.view.set_indicators(active);
        }
    }

    fn sync_from_view(&mut self) {
        let fields = self.view.read_fields();
        let tools = self.view.read_selected_tools();
        self.state.capture(fields, tools);
    }
}
