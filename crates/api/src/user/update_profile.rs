use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::update_profile::*;
use lingora_api_structs::UserProfileResponse;
use lingora_domain::{User, UserProfile};
use lingora_infra::LingoraContext;

pub async fn update_profile_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateProfileUseCase {
        user,
        nickname: body.nickname,
        avatar: body.avatar,
        phone: body.phone,
        native_language: body.native_language,
        living_country: body.living_country,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(UserProfileResponse::new(res.user, res.profile)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct UpdateProfileUseCase {
    pub user: User,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub native_language: Option<String>,
    pub living_country: Option<String>,
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
impl UseCase for UpdateProfileUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateProfile";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let existing = ctx.repos.users.find_profile(&self.user.id).await;
        let is_new = existing.is_none();
        let mut profile = existing.unwrap_or_else(|| {
            UserProfile::new(
                self.user.id.clone(),
                self.user.country.clone(),
                ctx.sys.now(),
            )
        });

        if let Some(nickname) = &self.nickname {
            profile.nickname = nickname.clone();
        }
        if let Some(avatar) = &self.avatar {
            profile.avatar = avatar.clone();
        }
        if let Some(phone) = &self.phone {
            profile.phone = phone.clone();
        }
        if let Some(native_language) = &self.native_language {
            profile.native_language = native_language.clone();
        }
        if let Some(living_country) = &self.living_country {
            profile.living_country = living_country.clone();
        }
        profile.updated = ctx.sys.now();

        let res = if is_new {
            ctx.repos.users.insert_profile(&profile).await
        } else {
            ctx.repos.users.save_profile(&profile).await
        };
        res.map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes {
            user: self.user.clone(),
            profile,
        })
    }
}
