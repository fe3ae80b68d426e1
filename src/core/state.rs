//! # Application State
//!
//! ```text
//! App
//! ├── form: FormState               // the input field values
//! ├── loading: bool                 // a submission is in flight
//! ├── error: Option<String>         // fixed failure message
//! ├── response: Option<String>      // last successful response text
//! └── next_submission: u64          // id counter for log correlation
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;

/// The one message shown for every kind of submission failure.
pub const SUBMIT_ERROR_MESSAGE: &str = "Error submitting form";

/// Fields that exist on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Prompt,
}

impl FormField {
    /// Maps an input name to its field. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "prompt" => Some(FormField::Prompt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub prompt: String,
}

impl FormState {
    /// Replaces one field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Prompt => self.prompt = value,
        }
    }
}

/// Identifies one submission in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct App {
    pub form: FormState,
    pub loading: bool,
    pub error: Option<String>,
    pub response: Option<String>,
    next_submission: u64,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next submission id.
    pub fn next_submission_id(&mut self) -> SubmissionId {
        self.next_submission += 1;
        SubmissionId(self.next_submission)
    }
}
