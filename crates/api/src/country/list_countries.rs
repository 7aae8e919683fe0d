use crate::error::LingoraError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lingora_api_structs::list_countries::*;
use lingora_domain::Country;
use lingora_infra::LingoraContext;

// Public endpoint, registration forms need it before a session exists
pub async fn list_countries_controller(
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let usecase = ListCountriesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|countries| HttpResponse::Ok().json(APIResponse::new(countries)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct ListCountriesUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListCountriesUseCase {
    type Response = Vec<Country>;
    type Error = UseCaseError;

    const NAME: &'static str = "ListCountries";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .countries
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lingora_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn lists_the_seeded_dictionary_by_name() {
        let ctx = setup_context_inmemory();

        let countries = ListCountriesUseCase {}.execute(&ctx).await.unwrap();
        assert_eq!(countries[0].name, "Brazil");
        assert!(countries
            .iter()
            .any(|c| c.code == "NO" && c.language_code == "nb"));
        for pair in countries.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }
}
