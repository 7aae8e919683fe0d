use super::ICountryRepo;
use lingora_domain::Country;

pub struct InMemoryCountryRepo {
    countries: Vec<Country>,
}

impl InMemoryCountryRepo {
    /// Seeded with the same dictionary as the initial migration
    pub fn new() -> Self {
        Self {
            countries: vec![
                Country::new("BR", "Brazil", "pt"),
                Country::new("CN", "China", "zh"),
                Country::new("FR", "France", "fr"),
                Country::new("DE", "Germany", "de"),
                Country::new("IT", "Italy", "it"),
                Country::new("JP", "Japan", "ja"),
                Country::new("NO", "Norway", "nb"),
                Country::new("KR", "South Korea", "ko"),
                Country::new("ES", "Spain", "es"),
                Country::new("SE", "Sweden", "sv"),
                Country::new("GB", "United Kingdom", "en"),
                Country::new("US", "United States", "en"),
            ],
        }
    }
}

#[async_trait::async_trait]
impl ICountryRepo for InMemoryCountryRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Country>> {
        let mut countries = self.countries.clone();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(countries)
    }

    async fn find_by_code(&self, code: &str) -> anyhow::Result<Option<Country>> {
        Ok(self
            .countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned())
    }
}
