use crate::course::sanitize_page_params;
use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::list_bookings::*;
use lingora_domain::{Booking, ID};
use lingora_infra::LingoraContext;

pub async fn list_bookings_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let (pn, ps) = sanitize_page_params(query.pn, query.ps);
    let usecase = ListBookingsUseCase {
        user_id: user.id,
        pn,
        ps,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.bookings, pn, ps, res.total)))
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct ListBookingsUseCase {
    pub user_id: ID,
    pub pn: i64,
    pub ps: i64,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub bookings: Vec<Booking>,
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
impl UseCase for ListBookingsUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "ListBookings";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let skip = (self.pn - 1) * self.ps;
        let bookings = ctx
            .repos
            .bookings
            .find_by_user(&self.user_id, skip, self.ps)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let total = ctx
            .repos
            .bookings
            .count_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { bookings, total })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use lingora_domain::{BookingNumber, BookingStatus};
    use lingora_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn pages_through_bookings_in_lesson_order() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();
        let now = Utc::now();

        let dates = ["2025-03-17", "2025-03-03", "2025-03-10"];
        for date in dates {
            let lesson_date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
            ctx.repos
                .bookings
                .insert_batch(&[Booking {
                    id: Default::default(),
                    booking_no: BookingNumber::generate(lesson_date),
                    teacher_id: ID::new(),
                    course_id: ID::new(),
                    user_id: user_id.clone(),
                    lesson_date,
                    start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                    status: BookingStatus::Pending,
                    created: now,
                    updated: now,
                }])
                .await
                .unwrap();
        }

        let mut first_page = ListBookingsUseCase {
            user_id: user_id.clone(),
            pn: 1,
            ps: 2,
        };
        let res = first_page.execute(&ctx).await.unwrap();
        assert_eq!(res.total, 3);
        assert_eq!(res.bookings.len(), 2);
        assert_eq!(res.bookings[0].lesson_date.to_string(), "2025-03-03");
        assert_eq!(res.bookings[1].lesson_date.to_string(), "2025-03-10");

        let mut second_page = ListBookingsUseCase {
            user_id,
            pn: 2,
            ps: 2,
        };
        let res = second_page.execute(&ctx).await.unwrap();
        assert_eq!(res.total, 3);
        assert_eq!(res.bookings.len(), 1);
        assert_eq!(res.bookings[0].lesson_date.to_string(), "2025-03-17");
    }
}
