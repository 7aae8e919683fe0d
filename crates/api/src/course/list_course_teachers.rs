use crate::error::LingoraError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lingora_api_structs::list_course_teachers::*;
use lingora_domain::{Teacher, ID};
use lingora_infra::LingoraContext;

pub async fn list_course_teachers_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let usecase = ListCourseTeachersUseCase {
        course_id: path.course_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|teachers| HttpResponse::Ok().json(APIResponse::new(teachers)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct ListCourseTeachersUseCase {
    pub course_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    CourseNotFound(ID),
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::CourseNotFound(id) => {
                Self::NotFound(format!("The course with id: {} was not found", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListCourseTeachersUseCase {
    type Response = Vec<Teacher>;
    type Error = UseCaseError;

    const NAME: &'static str = "ListCourseTeachers";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.courses.find(&self.course_id).await.is_none() {
            return Err(UseCaseError::CourseNotFound(self.course_id.clone()));
        }

        Ok(ctx.repos.teachers.find_by_course(&self.course_id).await)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use lingora_domain::{Course, Teacher};
    use lingora_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn lists_teachers_linked_to_course() {
        let ctx = setup_context_inmemory();
        let course = Course::new("Mandarin 101".into(), "zh".into(), Utc::now());
        ctx.repos.courses.insert(&course).await.unwrap();
        let teacher = Teacher::new("Li Wei".into(), "zh".into(), Utc::now());
        ctx.repos.teachers.insert(&teacher).await.unwrap();
        ctx.repos
            .teachers
            .add_to_course(&teacher.id, &course.id)
            .await
            .unwrap();

        let mut usecase = ListCourseTeachersUseCase {
            course_id: course.id.clone(),
        };
        let teachers = usecase.execute(&ctx).await.unwrap();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].id, teacher.id);

        let mut missing = ListCourseTeachersUseCase {
            course_id: ID::new(),
        };
        assert!(missing.execute(&ctx).await.is_err());
    }
}
