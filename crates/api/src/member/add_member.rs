use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::add_member::*;
use lingora_domain::{scheduling::parse_date, FamilyMember, ID};
use lingora_infra::LingoraContext;

pub async fn add_member_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = AddMemberUseCase {
        user_id: user.id,
        member_id: body.id,
        name: body.name,
        email: body.email,
        rel_type: body.rel_type,
        rel_desc: body.rel_desc,
        gender: body.gender,
        birthday: body.birthday,
        personality: body.personality,
        character: body.character,
    };

    execute(usecase, &ctx)
        .await
        .map(|member| HttpResponse::Ok().json(APIResponse::new(member)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct AddMemberUseCase {
    pub user_id: ID,
    /// When set, updates an existing member owned by the user
    pub member_id: Option<ID>,
    pub name: String,
    pub email: Option<String>,
    pub rel_type: Option<String>,
    pub rel_desc: Option<String>,
    pub gender: Option<i16>,
    pub birthday: Option<String>,
    pub personality: Option<String>,
    pub character: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    MemberNotFound(ID),
    InvalidBirthday(String),
    StorageError,
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MemberNotFound(id) => {
                Self::NotFound(format!("The family member with id: {} was not found", id))
            }
            UseCaseError::InvalidBirthday(birthday) => Self::BadClientData(format!(
                "Invalid birthday: {}, expected format YYYY-MM-DD",
                birthday
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddMemberUseCase {
    type Response = FamilyMember;
    type Error = UseCaseError;

    const NAME: &'static str = "AddMember";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let birthday = match &self.birthday {
            Some(birthday) => Some(
                parse_date(birthday)
                    .map_err(|_| UseCaseError::InvalidBirthday(birthday.clone()))?,
            ),
            None => None,
        };

        let (mut member, is_new) = match &self.member_id {
            Some(member_id) => {
                let member = ctx
                    .repos
                    .members
                    .find(member_id)
                    .await
                    .filter(|m| m.user_id == self.user_id)
                    .ok_or_else(|| UseCaseError::MemberNotFound(member_id.clone()))?;
                (member, false)
            }
            None => (
                FamilyMember::new(self.user_id.clone(), self.name.clone(), ctx.sys.now()),
                true,
            ),
        };

        member.name = self.name.clone();
        if let Some(email) = &self.email {
            member.email = email.clone();
        }
        if let Some(rel_type) = &self.rel_type {
            member.rel_type = rel_type.clone();
        }
        if let Some(rel_desc) = &self.rel_desc {
            member.rel_desc = rel_desc.clone();
        }
        if let Some(gender) = self.gender {
            member.gender = gender;
        }
        if let Some(birthday) = birthday {
            member.birthday = Some(birthday);
        }
        if let Some(personality) = &self.personality {
            member.personality = personality.clone();
        }
        if let Some(character) = &self.character {
            member.character = character.clone();
        }
        member.updated = ctx.sys.now();

        let res = if is_new {
            ctx.repos.members.insert(&member).await
        } else {
            ctx.repos.members.save(&member).await
        };
        res.map_err(|_| UseCaseError::StorageError)?;

        Ok(member)
    }
}
