use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Field identifiers shared by the validation engine, error map, and input events.
///
/// Serialized names match the wire/control names of the rendered form so error
/// payloads line up with the inputs they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    Password,
    Age,
    Role,
    Skills,
    Experience,
    Remote,
    StartDate,
    AvailableHours,
    Bio,
    ProfileImage,
    Newsletter,
}

impl FieldName {
    pub const fn label(self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::Age => "age",
            FieldName::Role => "role",
            FieldName::Skills => "skills",
            FieldName::Experience => "experience",
            FieldName::Remote => "remote",
            FieldName::StartDate => "startDate",
            FieldName::AvailableHours => "availableHours",
            FieldName::Bio => "bio",
            FieldName::ProfileImage => "profileImage",
            FieldName::Newsletter => "newsletter",
        }
    }
}

/// Which rendition of the form is active. Extended adds the onboarding fields
/// and the stricter password rules; Standard ignores them entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormVariant {
    Standard,
    Extended,
}

impl FormVariant {
    pub const fn is_extended(self) -> bool {
        matches!(self, FormVariant::Extended)
    }

    pub const fn label(self) -> &'static str {
        match self {
            FormVariant::Standard => "standard",
            FormVariant::Extended => "extended",
        }
    }
}

/// Role options offered by the select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Developer,
    Designer,
    Writer,
    Other,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Developer, Role::Designer, Role::Writer, Role::Other];

    pub const fn label(self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::Designer => "Designer",
            Role::Writer => "Writer",
            Role::Other => "Other",
        }
    }

    /// Maps a select-control value back onto the enum; `None` for the empty
    /// placeholder option or anything outside the offered set.
    pub fn from_input(value: &str) -> Option<Self> {
        Role::ALL
            .into_iter()
            .find(|role| role.label() == value.trim())
    }
}

/// Skill options offered by the multi-select checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skill {
    React,
    #[serde(rename = "Node.js")]
    NodeJs,
    #[serde(rename = "UI-Design")]
    UiDesign,
    Python,
}

impl Skill {
    pub const ALL: [Skill; 4] = [Skill::React, Skill::NodeJs, Skill::UiDesign, Skill::Python];

    pub const fn label(self) -> &'static str {
        match self {
            Skill::React => "React",
            Skill::NodeJs => "Node.js",
            Skill::UiDesign => "UI-Design",
            Skill::Python => "Python",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.label() == value.trim())
    }
}

/// Experience options offered by the radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
        }
    }

    pub fn from_input(value: &str) -> Option<Self> {
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| level.label() == value.trim())
    }
}

/// Reference to a file picked through the browser control. The picker is an
/// external collaborator; only the metadata needed for validation crosses over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub file_name: String,
    pub byte_len: u64,
    pub content_type: String,
}

/// A single user-input event addressed at one field. Numeric controls deliver
/// raw text and are coerced during validation, matching the form controls.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    FullName(String),
    Email(String),
    Password(String),
    Age(String),
    Role(String),
    Experience(String),
    Remote(bool),
    StartDate(String),
    AvailableHours(String),
    Bio(String),
    ProfileImage(Option<FileUpload>),
    Newsletter(bool),
}

/// The complete, validated set of field values at the moment of a successful
/// submit. Only the validation engine constructs these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub role: Role,
    pub skills: Vec<Skill>,
    pub experience: ExperienceLevel,
    pub remote: bool,
    #[serde(flatten)]
    pub extended: Option<ExtendedDetails>,
}

/// Fields captured only by the extended rendition of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedDetails {
    pub start_date: NaiveDate,
    pub available_hours: u32,
    pub bio: String,
    pub profile_image: FileUpload,
    pub newsletter: bool,
}
