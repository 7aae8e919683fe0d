use serde::{Deserialize, Serialize};

/// One row of the country dictionary. Seeded by a migration and read-only
/// at runtime; registration validates the caller's country against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2, uppercase
    pub code: String,
    pub name: String,
    /// Default interface language for users registering from this country
    pub language_code: String,
}

impl Country {
    pub fn new(code: &str, name: &str, language_code: &str) -> Self {
        Self {
            code: code.to_uppercase(),
            name: name.into(),
            language_code: language_code.into(),
        }
    }
}
