use lingora_domain::Country;
use serde::{Deserialize, Serialize};

use crate::dtos::CountryDTO;

pub mod list_countries {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub countries: Vec<CountryDTO>,
    }

    impl APIResponse {
        pub fn new(countries: Vec<Country>) -> Self {
            Self {
                countries: countries.into_iter().map(CountryDTO::new).collect(),
            }
        }
    }
}
