use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::join_course::*;
use lingora_domain::{CourseStatus, Enrollment, ID};
use lingora_infra::LingoraContext;

pub async fn join_course_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = JoinCourseUseCase {
        user_id: user.id,
        course_id: path.course_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|enrollment| HttpResponse::Created().json(APIResponse::new(enrollment)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct JoinCourseUseCase {
    pub user_id: ID,
    pub course_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    CourseNotFound(ID),
    CourseNotPublished(ID),
    StorageError,
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::CourseNotFound(id) => {
                Self::NotFound(format!("The course with id: {} was not found", id))
            }
            UseCaseError::CourseNotPublished(id) => Self::BadClientData(format!(
                "The course with id: {} is not open for enrollment",
                id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for JoinCourseUseCase {
    type Response = Enrollment;
    type Error = UseCaseError;

    const NAME: &'static str = "JoinCourse";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let course = ctx
            .repos
            .courses
            .find(&self.course_id)
            .await
            .ok_or_else(|| UseCaseError::CourseNotFound(self.course_id.clone()))?;
        if course.status != CourseStatus::Published {
            return Err(UseCaseError::CourseNotPublished(self.course_id.clone()));
        }

        // Joining twice is a no-op that hands back the existing enrollment
        if let Some(enrollment) = ctx
            .repos
            .enrollments
            .find_by_user_and_course(&self.user_id, &self.course_id)
            .await
        {
            return Ok(enrollment);
        }

        let enrollment = Enrollment::new(
            self.user_id.clone(),
            self.course_id.clone(),
            ctx.sys.now(),
        );
        ctx.repos
            .enrollments
            .insert(&enrollment)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(enrollment)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use lingora_domain::{Course, EnrollmentStatus};
    use lingora_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn joins_published_course_once() {
        let ctx = setup_context_inmemory();
        let course = Course::new("Mandarin 101".into(), "zh".into(), Utc::now());
        ctx.repos.courses.insert(&course).await.unwrap();
        let user_id = ID::new();

        let mut usecase = JoinCourseUseCase {
            user_id: user_id.clone(),
            course_id: course.id.clone(),
        };
        let enrollment = usecase.execute(&ctx).await.unwrap();
        assert_eq!(enrollment.status, EnrollmentStatus::Applied);

        let mut again = JoinCourseUseCase {
            user_id: user_id.clone(),
            course_id: course.id.clone(),
        };
        let second = again.execute(&ctx).await.unwrap();
        assert_eq!(second.id, enrollment.id);

        let joined = ctx
            .repos
            .enrollments
            .find_by_user_with_courses(&user_id)
            .await;
        assert_eq!(joined.len(), 1);
    }

    #[actix_web::test]
    async fn rejects_unpublished_courses() {
        let ctx = setup_context_inmemory();
        let mut course = Course::new("Mandarin 101".into(), "zh".into(), Utc::now());
        course.status = CourseStatus::Draft;
        ctx.repos.courses.insert(&course).await.unwrap();

        let mut usecase = JoinCourseUseCase {
            user_id: ID::new(),
            course_id: course.id.clone(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::CourseNotPublished(_))
        ));
    }
}
