use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::get_bookings_in_range::*;
use lingora_api_structs::BookingListResponse;
use lingora_domain::scheduling::{parse_date, SchedulingError};
use lingora_domain::{Booking, ID};
use lingora_infra::LingoraContext;

pub async fn get_bookings_in_range_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetBookingsInRangeUseCase {
        user_id: user.id,
        start_date: query.start_date.clone(),
        end_date: query.end_date.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|bookings| HttpResponse::Ok().json(BookingListResponse::new(bookings)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct GetBookingsInRangeUseCase {
    pub user_id: ID,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    Scheduling(SchedulingError),
    StorageError,
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Scheduling(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookingsInRangeUseCase {
    type Response = Vec<Booking>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetBookingsInRange";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let start = parse_date(&self.start_date).map_err(UseCaseError::Scheduling)?;
        let end = parse_date(&self.end_date).map_err(UseCaseError::Scheduling)?;
        if start > end {
            return Err(UseCaseError::Scheduling(SchedulingError::InvalidRange));
        }

        ctx.repos
            .bookings
            .find_by_user_in_range(&self.user_id, start, end)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
