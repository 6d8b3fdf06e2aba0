use std::sync::Arc;

use super::common::*;
use crate::form::domain::{FieldInput, FieldName, FormVariant, Skill};
use crate::form::state::FieldValues;
use crate::form::submit::{ConsoleSink, RegistrationForm, SubmitError};

#[test]
fn valid_standard_submit_emits_once_and_resets() {
    let (mut form, sink) = build_form(FormVariant::Standard);
    fill(&mut form, &valid_standard_values());

    let submission = form.submit().expect("valid form submits");

    assert_eq!(sink.submissions(), vec![submission]);
    assert_eq!(*form.values(), FieldValues::default());
    assert!(form.errors().is_empty());
}

#[test]
fn valid_extended_submit_emits_once_and_resets() {
    let (mut form, sink) = build_form(FormVariant::Extended);
    fill(&mut form, &valid_extended_values());

    let submission = form.submit().expect("valid extended form submits");

    assert_eq!(sink.submissions().len(), 1);
    let details = submission.extended.expect("extended details captured");
    assert_eq!(details.available_hours, 20);
    assert_eq!(*form.values(), FieldValues::default());
}

#[test]
fn invalid_submit_blocks_emission_and_keeps_state() {
    let (mut form, sink) = build_form(FormVariant::Standard);
    let mut values = valid_standard_values();
    values.age = "17".to_string();
    fill(&mut form, &values);

    match form.submit() {
        Err(SubmitError::Invalid(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.contains(FieldName::Age));
        }
        other => panic!("expected validation rejection, got {other:?}"),
    }

    assert!(sink.submissions().is_empty());
    assert_eq!(form.values().age, "17");
    assert!(form.errors().contains(FieldName::Age));
}

#[test]
fn empty_form_submit_reports_every_required_field() {
    let (mut form, sink) = build_form(FormVariant::Standard);

    match form.submit() {
        Err(SubmitError::Invalid(errors)) => {
            for field in [
                FieldName::FullName,
                FieldName::Email,
                FieldName::Password,
                FieldName::Age,
                FieldName::Role,
                FieldName::Skills,
                FieldName::Experience,
            ] {
                assert!(errors.contains(field), "missing error for {field:?}");
            }
        }
        other => panic!("expected validation rejection, got {other:?}"),
    }
    assert!(sink.submissions().is_empty());
}

#[test]
fn errors_stay_live_as_fields_change() {
    let (mut form, _) = build_form(FormVariant::Standard);
    fill(&mut form, &valid_standard_values());
    assert!(form.errors().is_empty());

    form.apply(FieldInput::Email("broken".to_string()));
    assert!(form.errors().contains(FieldName::Email));

    form.apply(FieldInput::Email("ada@example.com".to_string()));
    assert!(form.errors().is_empty());
}

#[test]
fn toggling_away_the_last_skill_surfaces_the_skills_error() {
    let (mut form, _) = build_form(FormVariant::Standard);
    fill(&mut form, &valid_standard_values());

    form.toggle_skill(Skill::React);
    assert!(form.errors().contains(FieldName::Skills));

    form.toggle_skill(Skill::React);
    assert!(form.errors().is_empty());
}

#[test]
fn sink_failure_surfaces_and_keeps_state() {
    let sink = Arc::new(OfflineSink);
    let mut form = RegistrationForm::new(FormVariant::Standard, sink);
    fill(&mut form, &valid_standard_values());

    match form.submit() {
        Err(SubmitError::Sink(error)) => {
            assert!(error.to_string().contains("offline"));
        }
        other => panic!("expected sink failure, got {other:?}"),
    }

    assert_ne!(*form.values(), FieldValues::default());
}

#[test]
fn console_sink_publishes_without_error() {
    let sink = Arc::new(ConsoleSink);
    let mut form = RegistrationForm::new(FormVariant::Standard, sink);
    fill(&mut form, &valid_standard_values());
    form.submit().expect("console sink accepts the submission");
}

#[test]
fn resubmit_after_reset_requires_fresh_input() {
    let (mut form, sink) = build_form(FormVariant::Standard);
    fill(&mut form, &valid_standard_values());
    form.submit().expect("first submit succeeds");

    match form.submit() {
        Err(SubmitError::Invalid(_)) => {}
        other => panic!("expected rejection of the reset form, got {other:?}"),
    }
    assert_eq!(sink.submissions().len(), 1);
}
