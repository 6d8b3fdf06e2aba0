use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{FieldInput, FormVariant, Skill, Submission};
use super::state::FieldValues;
use super::validation::{ErrorMap, ValidationConfig, ValidationEngine};

/// Outbound hook handed every accepted submission (console logger, display
/// layer, test recorder).
pub trait SubmissionSink: Send + Sync {
    fn publish(&self, submission: &Submission) -> Result<(), SinkError>;
}

/// Emission failure raised by a sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("submission could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// Built-in collaborator that logs the accepted submission as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn publish(&self, submission: &Submission) -> Result<(), SinkError> {
        let payload = serde_json::to_string(submission)?;
        info!(%payload, "form data submitted");
        Ok(())
    }
}

/// Error raised by the submit path. A validation rejection keeps the live
/// error map attached so the caller can surface it inline.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("submission rejected: {} field(s) failed validation", .0.len())]
    Invalid(ErrorMap),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// The form component: live field values, a live error map, and the submit
/// path composing the validation engine with the emission sink.
pub struct RegistrationForm<S> {
    engine: ValidationEngine,
    values: FieldValues,
    errors: ErrorMap,
    sink: Arc<S>,
}

impl<S> RegistrationForm<S>
where
    S: SubmissionSink,
{
    pub fn new(variant: FormVariant, sink: Arc<S>) -> Self {
        Self::with_config(variant, ValidationConfig::default(), sink)
    }

    pub fn with_config(variant: FormVariant, config: ValidationConfig, sink: Arc<S>) -> Self {
        Self {
            engine: ValidationEngine::new(variant, config),
            values: FieldValues::default(),
            errors: ErrorMap::default(),
            sink,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.engine.variant()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// The error map as of the most recent mutation or submit attempt. Empty
    /// until the first input event arrives.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Record one input event and re-run validation so errors stay live.
    pub fn apply(&mut self, input: FieldInput) {
        self.values.apply(input);
        self.revalidate();
    }

    /// Toggle a skill selection and re-run validation.
    pub fn toggle_skill(&mut self, skill: Skill) {
        self.values.toggle_skill(skill);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = self.engine.check(&self.values);
    }

    /// All-or-nothing submit. Any field error blocks the emission and leaves
    /// the state untouched; on success the submission is handed to the sink
    /// and the form resets to its defaults. A sink failure also leaves the
    /// state in place, since the emission was never acknowledged.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        match self.engine.validate(&self.values) {
            Ok(submission) => {
                self.sink.publish(&submission)?;
                info!(
                    variant = self.engine.variant().label(),
                    skills = submission.skills.len(),
                    "submission accepted"
                );
                self.values.reset();
                self.errors = ErrorMap::default();
                Ok(submission)
            }
            Err(errors) => {
                debug!(
                    variant = self.engine.variant().label(),
                    rejected_fields = errors.len(),
                    "submission blocked by validation"
                );
                self.errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }
}
