//! # Actions
//!
//! Everything that can happen to the form becomes an `Action`.
//! User types? That's `Action::UpdateField`.
//! Endpoint answers? That's `Action::SubmissionResolved`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! adapter must run. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{info, warn};

use crate::client::ClientError;
use crate::core::state::{App, FormField, SUBMIT_ERROR_MESSAGE, SubmissionId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UpdateField { field: FormField, value: String },
    Submit,
    SubmissionResolved {
        id: SubmissionId,
        result: Result<String, ClientError>,
    },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Post `prompt` to the endpoint and report back with `SubmissionResolved`.
    SpawnRequest { id: SubmissionId, prompt: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::UpdateField { field, value } => {
            app.form.set(field, value);
            Effect::None
        }
        Action::Submit => {
            // Required field: an empty prompt never leaves the form.
            if app.form.prompt.is_empty() {
                return Effect::None;
            }
            app.loading = true;
            app.error = None;
            let id = app.next_submission_id();
            info!("Submitting {} (prompt len={})", id, app.form.prompt.len());
            Effect::SpawnRequest {
                id,
                prompt: app.form.prompt.clone(),
            }
        }
        Action::SubmissionResolved { id, result } => {
            match result {
                Ok(text) => {
                    info!("Submission {} succeeded ({} bytes)", id, text.len());
                    app.response = Some(text);
                }
                Err(e) => {
                    warn!("Submission {} failed: {}", id, e);
                    app.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
                }
            }
            app.loading = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
