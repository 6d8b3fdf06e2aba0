//! Registration form intake: field schema, live validation, and submit path.
//!
//! The rendering layer is an external collaborator; this module owns everything
//! behind it — the live field values, the variant-gated rule set, the skills
//! multi-select, and the all-or-nothing emission of a validated [`Submission`].

pub mod domain;
pub mod state;
pub mod submit;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ExperienceLevel, ExtendedDetails, FieldInput, FieldName, FileUpload, FormVariant, Role, Skill,
    Submission,
};
pub use state::FieldValues;
pub use submit::{ConsoleSink, RegistrationForm, SinkError, SubmissionSink, SubmitError};
pub use validation::{ErrorMap, FieldValidationError, ValidationConfig, ValidationEngine};
