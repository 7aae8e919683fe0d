use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::UserProfileResponse;
use lingora_domain::{User, UserProfile};
use lingora_infra::LingoraContext;

pub async fn get_profile_controller(
    http_req: HttpRequest,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetProfileUseCase { user };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(UserProfileResponse::new(res.user, res.profile)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct GetProfileUseCase {
    pub user: User,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
    pub profile: UserProfile,
}

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
impl UseCase for GetProfileUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "GetProfile";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let profile = match ctx.repos.users.find_profile(&self.user.id).await {
            Some(profile) => profile,
            // Accounts that predate profiles get one on first read
            None => {
                let profile = UserProfile::new(
                    self.user.id.clone(),
                    self.user.country.clone(),
                    ctx.sys.now(),
                );
                ctx.repos
                    .users
                    .insert_profile(&profile)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                profile
            }
        };

        Ok(UseCaseRes {
            user: self.user.clone(),
            profile,
        })
    }
}
