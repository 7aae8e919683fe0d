mod inmemory;
mod postgres;

use lingora_domain::Country;

pub use inmemory::InMemoryCountryRepo;
pub use postgres::PostgresCountryRepo;

#[async_trait::async_trait]
pub trait ICountryRepo: Send + Sync {
    /// Dictionary rows ordered by country name
    async fn find_all(&self) -> anyhow::Result<Vec<Country>>;
    /// Case-insensitive lookup by ISO alpha-2 code
    async fn find_by_code(&self, code: &str) -> anyhow::Result<Option<Country>>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context_inmemory;

    #[tokio::test]
    async fn lists_the_dictionary_ordered_by_name() {
        let ctx = setup_context_inmemory();

        let countries = ctx.repos.countries.find_all().await.unwrap();
        assert!(!countries.is_empty());
        for pair in countries.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[tokio::test]
    async fn code_lookup_ignores_case_and_rejects_unknown_codes() {
        let ctx = setup_context_inmemory();

        let norway = ctx.repos.countries.find_by_code("no").await.unwrap();
        assert_eq!(norway.unwrap().language_code, "nb");

        assert!(ctx
            .repos
            .countries
            .find_by_code("XX")
            .await
            .unwrap()
            .is_none());
    }
}
