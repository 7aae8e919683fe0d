use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::remove_member::*;
use lingora_domain::{FamilyMember, ID};
use lingora_infra::LingoraContext;

pub async fn remove_member_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = RemoveMemberUseCase {
        user_id: user.id,
        member_id: path.member_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|member| HttpResponse::Ok().json(APIResponse::new(member)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct RemoveMemberUseCase {
    pub user_id: ID,
    pub member_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    MemberNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MemberNotFound(id) => {
                Self::NotFound(format!("The family member with id: {} was not found", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RemoveMemberUseCase {
    type Response = FamilyMember;
    type Error = UseCaseError;

    const NAME: &'static str = "RemoveMember";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let member = ctx
            .repos
            .members
            .find(&self.member_id)
            .await
            .filter(|m| m.user_id == self.user_id)
            .ok_or_else(|| UseCaseError::MemberNotFound(self.member_id.clone()))?;

        ctx.repos
            .members
            .delete(&member.id)
            .await
            .ok_or(UseCaseError::StorageError)?;

        Ok(member)
    }
}
