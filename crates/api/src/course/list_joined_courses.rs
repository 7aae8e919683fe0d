use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::list_joined_courses::*;
use lingora_domain::{Course, Enrollment, ID};
use lingora_infra::LingoraContext;

pub async fn list_joined_courses_controller(
    http_req: HttpRequest,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = ListJoinedCoursesUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|enrollments| HttpResponse::Ok().json(APIResponse::new(enrollments)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct ListJoinedCoursesUseCase {
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
impl UseCase for ListJoinedCoursesUseCase {
    type Response = Vec<(Enrollment, Course)>;
    type Error = UseCaseError;

    const NAME: &'static str = "ListJoinedCourses";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx
            .repos
            .enrollments
            .find_by_user_with_courses(&self.user_id)
            .await)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use lingora_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn lists_enrollments_with_their_course_data() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();

        let course = Course::new("Mandarin 101".into(), "zh".into(), Utc::now());
        ctx.repos.courses.insert(&course).await.unwrap();
        let enrollment = Enrollment::new(user_id.clone(), course.id.clone(), Utc::now());
        ctx.repos.enrollments.insert(&enrollment).await.unwrap();

        let other = Enrollment::new(ID::new(), course.id.clone(), Utc::now());
        ctx.repos.enrollments.insert(&other).await.unwrap();

        let mut usecase = ListJoinedCoursesUseCase { user_id };
        let joined = usecase.execute(&ctx).await.unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].0.id, enrollment.id);
        assert_eq!(joined[0].1.name, "Mandarin 101");
    }
}
