use super::domain::{FieldInput, FileUpload, Skill};

/// Live values for every control, exactly as the user has entered them.
///
/// Text-backed controls (including the numeric ones) hold raw strings; coercion
/// happens in the validation rules so a half-typed number is a field error
/// rather than lost input.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValues {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub role: String,
    pub skills: Vec<Skill>,
    pub experience: String,
    pub remote: bool,
    pub start_date: String,
    pub available_hours: String,
    pub bio: String,
    pub profile_image: Option<FileUpload>,
    pub newsletter: bool,
}

impl Default for FieldValues {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            age: String::new(),
            role: String::new(),
            skills: Vec::new(),
            experience: String::new(),
            remote: false,
            start_date: String::new(),
            // The hours slider rests at zero until moved.
            available_hours: "0".to_string(),
            bio: String::new(),
            profile_image: None,
            newsletter: false,
        }
    }
}

impl FieldValues {
    /// Apply one input event to the field it addresses.
    pub fn apply(&mut self, input: FieldInput) {
        match input {
            FieldInput::FullName(value) => self.full_name = value,
            FieldInput::Email(value) => self.email = value,
            FieldInput::Password(value) => self.password = value,
            FieldInput::Age(value) => self.age = value,
            FieldInput::Role(value) => self.role = value,
            FieldInput::Experience(value) => self.experience = value,
            FieldInput::Remote(value) => self.remote = value,
            FieldInput::StartDate(value) => self.start_date = value,
            FieldInput::AvailableHours(value) => self.available_hours = value,
            FieldInput::Bio(value) => self.bio = value,
            FieldInput::ProfileImage(value) => self.profile_image = value,
            FieldInput::Newsletter(value) => self.newsletter = value,
        }
    }

    /// Remove the skill if selected, append it otherwise. Selection order is
    /// preserved for the remaining entries so the display stays stable.
    pub fn toggle_skill(&mut self, skill: Skill) {
        if let Some(position) = self.skills.iter().position(|selected| *selected == skill) {
            self.skills.remove(position);
        } else {
            self.skills.push(skill);
        }
    }

    pub fn skill_selected(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }

    /// Return every field to its mount-time default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
