//! Waitlist form state and step transitions
//!
//! `FormState` is the single mutable entity behind the multi-step signup form.
//! Transition rules are pure: `advance_target` / `retreat_target` compute the
//! next step without touching the state, and `go_to` commits it.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Form step identifiers, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    One,
    Two,
    Three,
    Success,
    Error,
}

impl Step {
    /// All steps, numbered ones first
    pub const ALL: [Step; 5] = [Step::One, Step::Two, Step::Three, Step::Success, Step::Error];

    /// Position of a numbered step (1..=3), `None` for the terminal displays
    pub fn number(&self) -> Option<u8> {
        match self {
            Step::One => Some(1),
            Step::Two => Some(2),
            Step::Three => Some(3),
            Step::Success | Step::Error => None,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Step::One),
            2 => Some(Step::Two),
            3 => Some(Step::Three),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::One => "1",
            Step::Two => "2",
            Step::Three => "3",
            Step::Success => "success",
            Step::Error => "error",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Step::ALL.into_iter().find(|step| step.as_str() == s)
    }

    /// Whether this is one of the terminal success/error displays
    pub fn is_terminal(&self) -> bool {
        self.number().is_none()
    }

    /// Active flags for the three step indicators.
    ///
    /// Indicators for steps up to and including the current one are active.
    /// Terminal displays return `None`: the indicators keep their last layout.
    pub fn indicator_states(&self) -> Option<[bool; 3]> {
        let current = self.number()?;
        Some([1, 2, 3].map(|n| n <= current))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named text inputs of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Role,
    CompanySize,
    PainPoint,
    ExcitementReason,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Email,
        Field::Role,
        Field::CompanySize,
        Field::PainPoint,
        Field::ExcitementReason,
    ];

    /// Input element name used by the page
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Role => "role",
            Field::CompanySize => "companySize",
            Field::PainPoint => "painPoint",
            Field::ExcitementReason => "excitementReason",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Raw string values of every text field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub email: String,
    pub role: String,
    pub company_size: String,
    pub pain_point: String,
    pub excitement_reason: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Role => &self.role,
            Field::CompanySize => &self.company_size,
            Field::PainPoint => &self.pain_point,
            Field::ExcitementReason => &self.excitement_reason,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Role => &mut self.role,
            Field::CompanySize => &mut self.company_size,
            Field::PainPoint => &mut self.pain_point,
            Field::ExcitementReason => &mut self.excitement_reason,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Why an email was refused at step 1
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailMissing,

    #[error("Please enter a valid email")]
    EmailMalformed,
}

/// Step 1 gate: non-empty and containing `@`
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        Err(ValidationError::EmailMissing)
    } else if !email.contains('@') {
        Err(ValidationError::EmailMalformed)
    } else {
        Ok(())
    }
}

/// Refused step transition
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("cannot advance from step {0}")]
    CannotAdvance(Step),

    #[error("cannot go back from step {0}")]
    CannotRetreat(Step),

    #[error("cannot retry from step {0}")]
    CannotRetry(Step),
}

/// State of the waitlist form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    current_step: Step,
    fields: FormFields,
    selected_tools: BTreeSet<String>,
    last_error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn selected_tools(&self) -> &BTreeSet<String> {
        &self.selected_tools
    }

    /// Check or uncheck a tool tag
    pub fn toggle_tool(&mut self, tool: impl Into<String>, checked: bool) {
        let tool = tool.into();
        if checked {
            self.selected_tools.insert(tool);
        } else {
            self.selected_tools.remove(&tool);
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace every input value with what the page currently shows
    pub fn capture(&mut self, fields: FormFields, tools: BTreeSet<String>) {
        self.fields = fields;
        self.selected_tools = tools;
    }

    /// Step reached by pressing "next" on `from`
    pub fn advance_target(&self, from: Step) -> Result<Step, TransitionError> {
        match from {
            Step::One => {
                validate_email(&self.fields.email)?;
                Ok(Step::Two)
            }
            // Role, company size and pain point are all optional.
            Step::Two => Ok(Step::Three),
            other => Err(TransitionError::CannotAdvance(other)),
        }
    }

    /// Step reached by pressing "back" on `from`
    pub fn retreat_target(&self, from: Step) -> Result<Step, TransitionError> {
        match from {
            Step::Two => Ok(Step::One),
            Step::Three => Ok(Step::Two),
            other => Err(TransitionError::CannotRetreat(other)),
        }
    }

    /// Commit a step change
    pub fn go_to(&mut self, step: Step) {
        if step != Step::Error {
            self.last_error = None;
        }
        self.current_step = step;
    }

    /// Enter the error display with a message
    pub fn fail(&mut self, message: impl Into<String>) {
        self.current_step = Step::Error;
        self.last_error = Some(message.into());
    }

    /// Back to step 3 after a failed submission, keeping every value
    pub fn retry(&mut self) -> Result<Step, TransitionError> {
        if self.current_step != Step::Error {
            return Err(TransitionError::CannotRetry(self.current_step));
        }
        self.go_to(Step::Three);
        Ok(Step::Three)
    }

    /// Clear everything and return to step 1
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_email(email: &str) -> FormState {
        let mut state = FormState::new();
        state.set_field(Field::Email, email);
        state
    }

    #[test]
    fn test_initial_state() {
        let state = FormState::new();
        assert_eq!(state.current_step(), Step::One);
        assert!(state.fields().is_empty());
        assert!(state.selected_tools().is_empty());
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailMissing));
        assert_eq!(validate_email("nobody"), Err(ValidationError::EmailMalformed));
        assert!(validate_email("a@b.com").is_ok());
        // Only the @ is checked
        assert!(validate_email("@").is_ok());
    }

    #[test]
    fn test_advance_from_one_requires_email() {
        for email in ["", "plainaddress", "still no at sign"] {
            let state = state_with_email(email);
            assert!(matches!(
                state.advance_target(Step::One),
                Err(TransitionError::Invalid(_))
            ));
        }

        for email in ["a@b.com", "x@y", "first.last+tag@example.org"] {
            let state = state_with_email(email);
            assert_eq!(state.advance_target(Step::One), Ok(Step::Two));
        }
    }

    #[test]
    fn test_advance_from_two_ignores_optional_fields() {
        let empty = FormState::new();
        assert_eq!(empty.advance_target(Step::Two), Ok(Step::Three));

        let mut filled = FormState::new();
        filled.set_field(Field::Role, "CTO");
        filled.set_field(Field::CompanySize, "11-50");
        filled.set_field(Field::PainPoint, "too many tabs");
        assert_eq!(filled.advance_target(Step::Two), Ok(Step::Three));
    }

    #[test]
    fn test_advance_undefined_steps() {
        let state = state_with_email("a@b.com");
        for step in [Step::Three, Step::Success, Step::Error] {
            assert_eq!(
                state.advance_target(step),
                Err(TransitionError::CannotAdvance(step))
            );
        }
    }

    #[test]
    fn test_retreat() {
        let state = FormState::new();
        assert_eq!(state.retreat_target(Step::Two), Ok(Step::One));
        assert_eq!(state.retreat_target(Step::Three), Ok(Step::Two));
        for step in [Step::One, Step::Success, Step::Error] {
            assert_eq!(
                state.retreat_target(step),
                Err(TransitionError::CannotRetreat(step))
            );
        }
    }

    #[test]
    fn test_toggle_tool() {
        let mut state = FormState::new();
        state.toggle_tool("notion", true);
        state.toggle_tool("slack", true);
        state.toggle_tool("notion", true);
        assert_eq!(state.selected_tools().len(), 2);

        state.toggle_tool("notion", false);
        assert_eq!(
            state.selected_tools().iter().collect::<Vec<_>>(),
            vec!["slack"]
        );

        // Unchecking an unknown tag is harmless
        state.toggle_tool("jira", false);
        assert_eq!(state.selected_tools().len(), 1);
    }

    #[test]
    fn test_reset_from_every_step() {
        for step in Step::ALL {
            let mut state = state_with_email("a@b.com");
            state.set_field(Field::PainPoint, "context switching");
            state.toggle_tool("linear", true);
            state.go_to(step);
            if step == Step::Error {
                state.fail("dup");
            }

            state.reset();

            assert_eq!(state, FormState::new());
        }
    }

    #[test]
    fn test_fail_and_retry() {
        let mut state = state_with_email("a@b.com");
        state.go_to(Step::Three);
        state.fail("dup");
        assert_eq!(state.current_step(), Step::Error);
        assert_eq!(state.last_error(), Some("dup"));

        assert_eq!(state.retry(), Ok(Step::Three));
        assert!(state.last_error().is_none());
        assert_eq!(state.field(Field::Email), "a@b.com");
    }

    #[test]
    fn test_retry_only_from_error() {
        let mut state = FormState::new();
        assert_eq!(state.retry(), Err(TransitionError::CannotRetry(Step::One)));
        assert_eq!(state.current_step(), Step::One);
    }

    #[test]
    fn test_indicator_states() {
        assert_eq!(Step::One.indicator_states(), Some([true, false, false]));
        assert_eq!(Step::Two.indicator_states(), Some([true, true, false]));
        assert_eq!(Step::Three.indicator_states(), Some([true, true, true]));
        assert_eq!(Step::Success.indicator_states(), None);
        assert_eq!(Step::Error.indicator_states(), None);
    }

    #[test]
    fn test_step_string_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_str(step.as_str()), Some(step));
        }
        assert_eq!(Step::from_str("4"), None);
        assert_eq!(Step::from_number(2), Some(Step::Two));
        assert_eq!(Step::from_number(0), None);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::CompanySize.name(), "companySize");
        assert_eq!(Field::from_name("excitementReason"), Some(Field::ExcitementReason));
        assert_eq!(Field::from_name("phone"), None);
    }
}
