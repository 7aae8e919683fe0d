use super::ICountryRepo;
use lingora_domain::Country;
use sqlx::{FromRow, PgPool};

pub struct PostgresCountryRepo {
    pool: PgPool,
}

impl PostgresCountryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CountryRaw {
    country_code: String,
    name: String,
    language_code: String,
}

impl From<CountryRaw> for Country {
    fn from(raw: CountryRaw) -> Self {
        Self {
            code: raw.country_code,
            name: raw.name,
            language_code: raw.language_code,
        }
    }
}

#[async_trait::async_trait]
impl ICountryRepo for PostgresCountryRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Country>> {
        let rows = sqlx::query_as::<_, CountryRaw>(
            r#"
            SELECT * FROM dict_countries
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|c| c.into()).collect())
    }

    async fn find_by_code(&self, code: &str) -> anyhow::Result<Option<Country>> {
        let row = sqlx::query_as::<_, CountryRaw>(
            r#"
            SELECT * FROM dict_countries
            WHERE country_code = $1
            "#,
        )
        .bind(code.to_uppercase())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|c| c.into()))
    }
}
