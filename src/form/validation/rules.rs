use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::config::ValidationConfig;
use crate::form::domain::{ExperienceLevel, FileUpload, FormVariant, Role, Skill};

/// HTML date controls deliver ISO calendar dates.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

const IMAGE_TYPE_MESSAGE: &str = "Only JPEG or PNG images are allowed";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

/// Character classes the extended password rule demands, paired with the
/// message surfaced when the class is missing.
const PASSWORD_CLASS_PATTERNS: [(&str, &str); 4] = [
    (r"[A-Z]", "Password must contain at least 1 uppercase letter"),
    (r"[a-z]", "Password must contain at least 1 lowercase letter"),
    (r"\d", "Password must contain at least 1 number"),
    (
        r"[!@#$%^&*(),.?:{}|<>]",
        "Password must contain at least 1 special character",
    ),
];

static PASSWORD_CLASSES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

fn password_classes() -> &'static [(Regex, &'static str)] {
    PASSWORD_CLASSES.get_or_init(|| {
        PASSWORD_CLASS_PATTERNS
            .into_iter()
            .map(|(pattern, message)| {
                (
                    Regex::new(pattern).expect("password class pattern compiles"),
                    message,
                )
            })
            .collect()
    })
}

pub(crate) fn full_name(raw: &str, config: &ValidationConfig) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < config.min_full_name_chars {
        return Err(format!(
            "Full name must be at least {} characters",
            config.min_full_name_chars
        ));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn email(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if !email_pattern().is_match(trimmed) {
        return Err("Invalid email".to_string());
    }
    Ok(trimmed.to_string())
}

/// The length rule applies to both variants; the character-class rules only to
/// the extended one. Every violated rule contributes its own message.
pub(crate) fn password(
    raw: &str,
    config: &ValidationConfig,
    variant: FormVariant,
) -> Result<String, Vec<String>> {
    let mut messages = Vec::new();

    if raw.chars().count() < config.min_password_chars {
        messages.push(format!(
            "Password must be at least {} characters",
            config.min_password_chars
        ));
    }

    if variant.is_extended() {
        for (pattern, message) in password_classes() {
            if !pattern.is_match(raw) {
                messages.push((*message).to_string());
            }
        }
    }

    if messages.is_empty() {
        Ok(raw.to_string())
    } else {
        Err(messages)
    }
}

pub(crate) fn age(raw: &str, config: &ValidationConfig) -> Result<u32, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("Must be at least {}", config.minimum_age));
    }
    let value: u32 = trimmed
        .parse()
        .map_err(|_| "Age must be a whole number".to_string())?;
    if value < config.minimum_age {
        return Err(format!("Must be at least {}", config.minimum_age));
    }
    Ok(value)
}

pub(crate) fn role(raw: &str) -> Result<Role, String> {
    Role::from_input(raw).ok_or_else(|| "Please select a role".to_string())
}

pub(crate) fn skills(selected: &[Skill]) -> Result<Vec<Skill>, String> {
    if selected.is_empty() {
        return Err("Select at least one skill".to_string());
    }
    Ok(selected.to_vec())
}

pub(crate) fn experience(raw: &str) -> Result<ExperienceLevel, String> {
    ExperienceLevel::from_input(raw).ok_or_else(|| "Select your experience level".to_string())
}

pub(crate) fn start_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Start date is required".to_string());
    }
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT)
        .map_err(|_| "Start date must be a valid calendar date".to_string())
}

pub(crate) fn available_hours(raw: &str, config: &ValidationConfig) -> Result<u32, String> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| "Available hours must be a whole number".to_string())?;
    if value < config.min_available_hours {
        return Err(format!(
            "Minimum of {} hour(s) required",
            config.min_available_hours
        ));
    }
    if value > config.max_available_hours {
        return Err(format!(
            "Cannot exceed {} hours",
            config.max_available_hours
        ));
    }
    Ok(value)
}

pub(crate) fn bio(raw: &str, config: &ValidationConfig) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < config.min_bio_chars {
        return Err(format!(
            "Bio must be at least {} characters",
            config.min_bio_chars
        ));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn profile_image(
    upload: Option<&FileUpload>,
    config: &ValidationConfig,
) -> Result<FileUpload, String> {
    let Some(upload) = upload else {
        return Err("Profile image is required".to_string());
    };

    if upload.byte_len > config.max_image_bytes {
        return Err(format!(
            "Maximum file size is {}MB",
            config.max_image_bytes / (1024 * 1024)
        ));
    }

    let parsed: mime::Mime = upload
        .content_type
        .parse()
        .map_err(|_| IMAGE_TYPE_MESSAGE.to_string())?;
    let accepted = parsed.essence_str() == mime::IMAGE_JPEG.essence_str()
        || parsed.essence_str() == mime::IMAGE_PNG.essence_str();
    if !accepted {
        return Err(IMAGE_TYPE_MESSAGE.to_string());
    }

    Ok(upload.clone())
}
