//! Submission state shared by the create forms.
//!
//! `Idle -> Validating -> Idle (invalid, error set)`
//! `Idle -> Validating -> Submitting -> Idle (success or failure)`

use crate::error::ApiError;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const SUBMITTING_LABEL: &str = "Creating...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Default)]
pub struct FormStatus {
    phase: Phase,
    error: Option<String>,
}

impl FormStatus {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Busy flag: true while a create request is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn reject(&mut self, err: ApiError) {
        self.error = Some(err.to_string());
    }

    pub(crate) fn start(&mut self) {
        self.phase = Phase::Submitting;
        self.error = None;
    }

    /// Return to `Idle`. On failure the banner text is the server's detail,
    /// else `fallback`.
    pub(crate) fn settle<T>(&mut self, outcome: Result<T, ApiError>, fallback: &str) -> Option<T> {
        self.phase = Phase::Idle;
        match outcome {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(error = %err, "create request failed");
                self.error = Some(err.banner_message(fallback));
                None
            }
        }
    }
}

/// All fields must be non-empty after trimming.
pub(crate) fn require_filled(fields: &[&str]) -> Result<(), ApiError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ApiError::Validation(FILL_ALL_FIELDS.to_string()));
    }
    Ok(())
}
