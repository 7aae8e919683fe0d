use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::list_members::*;
use lingora_domain::{FamilyMember, ID};
use lingora_infra::LingoraContext;

pub async fn list_members_controller(
    http_req: HttpRequest,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = ListMembersUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|members| HttpResponse::Ok().json(APIResponse::new(members)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct ListMembersUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for LingoraError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListMembersUseCase {
    type Response = Vec<FamilyMember>;
    type Error = UseCaseError;

    const NAME: &'static str = "ListMembers";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.members.find_by_user(&self.user_id).await)
    }
}
