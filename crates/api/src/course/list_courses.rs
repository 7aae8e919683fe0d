use crate::error::LingoraError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lingora_api_structs::list_courses::*;
use lingora_domain::Course;
use lingora_infra::LingoraContext;

/// Default and maximum page sizes for paginated listings
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamps 1-based `pn` / `ps` query params to sane values
pub fn sanitize_page_params(pn: Option<i64>, ps: Option<i64>) -> (i64, i64) {
    let pn = pn.unwrap_or(1).max(1);
    let ps = ps.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (pn, ps)
}

pub async fn list_courses_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let (pn, ps) = sanitize_page_params(query.pn, query.ps);
    let usecase = ListCoursesUseCase { pn, ps };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.courses, pn, ps, res.total)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct ListCoursesUseCase {
    pub pn: i64,
    pub ps: i64,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub courses: Vec<Course>,
    pub total: i64,
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
impl UseCase for ListCoursesUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "ListCourses";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let skip = (self.pn - 1) * self.ps;
        let courses = ctx.repos.courses.find_published(skip, self.ps).await;
        let total = ctx
            .repos
            .courses
            .count_published()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { courses, total })
    }
}
