use serde::{Deserialize, Serialize};

/// Numeric dials backing the field rules. Defaults mirror the rendered form;
/// deployments can override individual limits through `AppConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub min_full_name_chars: usize,
    pub min_password_chars: usize,
    pub minimum_age: u32,
    pub min_available_hours: u32,
    pub max_available_hours: u32,
    pub min_bio_chars: usize,
    pub max_image_bytes: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_full_name_chars: 3,
            min_password_chars: 8,
            minimum_age: 18,
            min_available_hours: 1,
            max_available_hours: 60,
            min_bio_chars: 10,
            max_image_bytes: 2 * 1024 * 1024,
        }
    }
}
