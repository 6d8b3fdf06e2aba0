mod config;
pub(crate) mod rules;

pub use config::ValidationConfig;

use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{ExtendedDetails, FieldName, FormVariant, Submission};
use super::state::FieldValues;

/// A single field rejection, carrying the offending field and its message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {}", .field.label(), .message)]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

/// Field-keyed rejection messages. Fields that pass are absent; a field whose
/// rule set raises several complaints (the extended password) keeps them all,
/// first message first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMap(BTreeMap<FieldName, Vec<String>>);

impl ErrorMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn first_message(&self, field: FieldName) -> Option<&str> {
        self.0
            .get(&field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn messages(&self, field: FieldName) -> &[String] {
        self.0
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn errors(&self) -> impl Iterator<Item = FieldValidationError> + '_ {
        self.0.iter().flat_map(|(field, messages)| {
            messages.iter().map(|message| FieldValidationError {
                field: *field,
                message: message.clone(),
            })
        })
    }

    fn push(&mut self, field: FieldName, message: String) {
        self.0.entry(field).or_default().push(message);
    }

    fn extend_field(&mut self, field: FieldName, messages: Vec<String>) {
        self.0.entry(field).or_default().extend(messages);
    }
}

/// Stateless evaluator applying the variant-gated rule set to live values.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    variant: FormVariant,
    config: ValidationConfig,
}

impl ValidationEngine {
    pub fn new(variant: FormVariant, config: ValidationConfig) -> Self {
        Self { variant, config }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run every rule and report the failing fields. Used after each input
    /// event to keep the error state live.
    pub fn check(&self, values: &FieldValues) -> ErrorMap {
        match self.validate(values) {
            Ok(_) => ErrorMap::default(),
            Err(errors) => errors,
        }
    }

    /// Coerce-and-collect pass over every field. A `Submission` is produced
    /// only when no rule raised a message; rule evaluation is independent per
    /// field, so one failure never masks another.
    pub fn validate(&self, values: &FieldValues) -> Result<Submission, ErrorMap> {
        let mut errors = ErrorMap::default();

        let full_name = gather(
            &mut errors,
            FieldName::FullName,
            rules::full_name(&values.full_name, &self.config),
        );
        let email = gather(&mut errors, FieldName::Email, rules::email(&values.email));
        let password = gather_all(
            &mut errors,
            FieldName::Password,
            rules::password(&values.password, &self.config, self.variant),
        );
        let age = gather(
            &mut errors,
            FieldName::Age,
            rules::age(&values.age, &self.config),
        );
        let role = gather(&mut errors, FieldName::Role, rules::role(&values.role));
        let skills = gather(
            &mut errors,
            FieldName::Skills,
            rules::skills(&values.skills),
        );
        let experience = gather(
            &mut errors,
            FieldName::Experience,
            rules::experience(&values.experience),
        );

        let extended = match self.variant {
            FormVariant::Standard => None,
            FormVariant::Extended => {
                let start_date = gather(
                    &mut errors,
                    FieldName::StartDate,
                    rules::start_date(&values.start_date),
                );
                let available_hours = gather(
                    &mut errors,
                    FieldName::AvailableHours,
                    rules::available_hours(&values.available_hours, &self.config),
                );
                let bio = gather(
                    &mut errors,
                    FieldName::Bio,
                    rules::bio(&values.bio, &self.config),
                );
                let profile_image = gather(
                    &mut errors,
                    FieldName::ProfileImage,
                    rules::profile_image(values.profile_image.as_ref(), &self.config),
                );

                match (start_date, available_hours, bio, profile_image) {
                    (Some(start_date), Some(available_hours), Some(bio), Some(profile_image)) => {
                        Some(ExtendedDetails {
                            start_date,
                            available_hours,
                            bio,
                            profile_image,
                            newsletter: values.newsletter,
                        })
                    }
                    _ => None,
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        match (full_name, email, password, age, role, skills, experience) {
            (
                Some(full_name),
                Some(email),
                Some(password),
                Some(age),
                Some(role),
                Some(skills),
                Some(experience),
            ) => Ok(Submission {
                full_name,
                email,
                password,
                age,
                role,
                skills,
                experience,
                remote: values.remote,
                extended,
            }),
            _ => Err(errors),
        }
    }
}

fn gather<T>(errors: &mut ErrorMap, field: FieldName, outcome: Result<T, String>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(field, message);
            None
        }
    }
}

fn gather_all<T>(
    errors: &mut ErrorMap,
    field: FieldName,
    outcome: Result<T, Vec<String>>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(messages) => {
            errors.extend_field(field, messages);
            None
        }
    }
}
