//! Registration form intake library.
//!
//! Models the non-presentational half of a registration form: a declarative
//! field schema with per-field validation rules, live error state recomputed on
//! every input event, a skills multi-select with toggle semantics, and an
//! all-or-nothing submit path that emits a validated [`form::Submission`] to a
//! pluggable sink before resetting the form to its defaults.

pub mod config;
pub mod form;
pub mod telemetry;

pub use config::{AppConfig, AppEnvironment, ConfigError, TelemetryConfig};
pub use form::{
    ConsoleSink, ErrorMap, ExperienceLevel, ExtendedDetails, FieldInput, FieldName,
    FieldValidationError, FieldValues, FileUpload, FormVariant, RegistrationForm, Role, Skill,
    SinkError, Submission, SubmissionSink, SubmitError, ValidationConfig, ValidationEngine,
};
pub use telemetry::TelemetryError;
