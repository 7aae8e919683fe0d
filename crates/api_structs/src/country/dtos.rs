use lingora_domain::Country;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDTO {
    pub code: String,
    pub name: String,
    pub language_code: String,
}

impl CountryDTO {
    pub fn new(country: Country) -> Self {
        Self {
            code: country.code,
            name: country.name,
            language_code: country.language_code,
        }
    }
}
