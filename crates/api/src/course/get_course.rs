use crate::error::LingoraError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lingora_api_structs::get_course::*;
use lingora_domain::{Course, ID};
use lingora_infra::LingoraContext;

pub async fn get_course_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let usecase = GetCourseUseCase {
        course_id: path.course_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|course| HttpResponse::Ok().json(APIResponse::new(course)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct GetCourseUseCase {
    pub course_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The course with id: {} was not found", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCourseUseCase {
    type Response = Course;
    type Error = UseCaseError;

    const NAME: &'static str = "GetCourse";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .courses
            .find(&self.course_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.course_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use lingora_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn finds_course_by_id() {
        let ctx = setup_context_inmemory();
        let course = Course::new("Mandarin 101".into(), "zh".into(), Utc::now());
        ctx.repos.courses.insert(&course).await.unwrap();

        let mut usecase = GetCourseUseCase {
            course_id: course.id.clone(),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().name, "Mandarin 101");

        let mut missing = GetCourseUseCase {
            course_id: ID::new(),
        };
        assert!(matches!(
            missing.execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }
}
