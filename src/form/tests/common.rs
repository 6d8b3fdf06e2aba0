use std::sync::{Arc, Mutex};

use crate::form::domain::{FieldInput, FileUpload, FormVariant, Skill, Submission};
use crate::form::state::FieldValues;
use crate::form::submit::{RegistrationForm, SinkError, SubmissionSink};
use crate::form::validation::{ValidationConfig, ValidationEngine};

pub(super) fn png_upload(byte_len: u64) -> FileUpload {
    FileUpload {
        file_name: "avatar.png".to_string(),
        byte_len,
        content_type: "image/png".to_string(),
    }
}

pub(super) fn pdf_upload(byte_len: u64) -> FileUpload {
    FileUpload {
        file_name: "resume.pdf".to_string(),
        byte_len,
        content_type: "application/pdf".to_string(),
    }
}

pub(super) fn valid_standard_values() -> FieldValues {
    FieldValues {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "abcdefgh".to_string(),
        age: "18".to_string(),
        role: "Developer".to_string(),
        skills: vec![Skill::React],
        experience: "Junior".to_string(),
        remote: false,
        ..FieldValues::default()
    }
}

pub(super) fn valid_extended_values() -> FieldValues {
    FieldValues {
        password: "Abcd123!".to_string(),
        start_date: "2026-09-14".to_string(),
        available_hours: "20".to_string(),
        bio: "Ten years of systems work.".to_string(),
        profile_image: Some(png_upload(512 * 1024)),
        newsletter: true,
        ..valid_standard_values()
    }
}

pub(super) fn engine(variant: FormVariant) -> ValidationEngine {
    ValidationEngine::new(variant, ValidationConfig::default())
}

pub(super) fn build_form(variant: FormVariant) -> (RegistrationForm<RecordingSink>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let form = RegistrationForm::new(variant, sink.clone());
    (form, sink)
}

/// Drive the form through its public input surface, one event per field, the
/// way the rendering layer would.
pub(super) fn fill<S: SubmissionSink>(form: &mut RegistrationForm<S>, values: &FieldValues) {
    form.apply(FieldInput::FullName(values.full_name.clone()));
    form.apply(FieldInput::Email(values.email.clone()));
    form.apply(FieldInput::Password(values.password.clone()));
    form.apply(FieldInput::Age(values.age.clone()));
    form.apply(FieldInput::Role(values.role.clone()));
    form.apply(FieldInput::Experience(values.experience.clone()));
    form.apply(FieldInput::Remote(values.remote));
    form.apply(FieldInput::StartDate(values.start_date.clone()));
    form.apply(FieldInput::AvailableHours(values.available_hours.clone()));
    form.apply(FieldInput::Bio(values.bio.clone()));
    form.apply(FieldInput::ProfileImage(values.profile_image.clone()));
    form.apply(FieldInput::Newsletter(values.newsletter));
    for skill in &values.skills {
        form.toggle_skill(*skill);
    }
}

#[derive(Default)]
pub(super) struct RecordingSink {
    submissions: Mutex<Vec<Submission>>,
}

impl RecordingSink {
    pub(super) fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().expect("sink mutex poisoned").clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn publish(&self, submission: &Submission) -> Result<(), SinkError> {
        self.submissions
            .lock()
            .expect("sink mutex poisoned")
            .push(submission.clone());
        Ok(())
    }
}

pub(super) struct OfflineSink;

impl SubmissionSink for OfflineSink {
    fn publish(&self, _submission: &Submission) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("display layer offline".to_string()))
    }
}
