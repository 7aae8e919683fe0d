use crate::error::LingoraError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lingora_api_structs::get_teacher_timeslots::*;
use lingora_domain::{AvailabilitySlot, ID};
use lingora_infra::LingoraContext;

pub async fn get_teacher_timeslots_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let usecase = GetTeacherTimeslotsUseCase {
        teacher_id: path.teacher_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|slots| HttpResponse::Ok().json(APIResponse::new(slots)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct GetTeacherTimeslotsUseCase {
    pub teacher_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    TeacherNotFound(ID),
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::TeacherNotFound(id) => {
                Self::NotFound(format!("The teacher with id: {} was not found", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTeacherTimeslotsUseCase {
    type Response = Vec<AvailabilitySlot>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetTeacherTimeslots";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.teachers.find(&self.teacher_id).await.is_none() {
            return Err(UseCaseError::TeacherNotFound(self.teacher_id.clone()));
        }

        Ok(ctx.repos.teachers.find_availability(&self.teacher_id).await)
    }
}
