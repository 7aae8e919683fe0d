use crate::error::LingoraError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use lingora_api_structs::dtos::BookingDTO;
use lingora_api_structs::get_meeting_info::*;
use lingora_domain::{meeting_url, Booking, ID};
use lingora_infra::LingoraContext;

pub async fn get_meeting_info_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetMeetingInfoUseCase {
        user_id: user.id,
        booking_no: path.booking_no.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                booking_no: res.booking_no,
                meeting_url: res.meeting_url,
                bookings: res.bookings.into_iter().map(BookingDTO::new).collect(),
            })
        })
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct GetMeetingInfoUseCase {
    pub user_id: ID,
    pub booking_no: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub booking_no: String,
    pub meeting_url: String,
    pub bookings: Vec<Booking>,
}

#[derive(Debug)]
pub enum UseCaseError {
    BookingNotFound(String),
    StorageError,
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::BookingNotFound(booking_no) => Self::NotFound(format!(
                "No booking with number: {} was found for this user",
                booking_no
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMeetingInfoUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "GetMeetingInfo";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let bookings = ctx
            .repos
            .bookings
            .find_by_booking_no(&self.user_id, &self.booking_no)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if bookings.is_empty() {
            return Err(UseCaseError::BookingNotFound(self.booking_no.clone()));
        }

        Ok(UseCaseRes {
            booking_no: self.booking_no.clone(),
            meeting_url: meeting_url(&ctx.config.meeting_base_url, &self.booking_no),
            bookings,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use lingora_domain::{BookingNumber, BookingStatus};
    use lingora_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn derives_meeting_url_from_booking_number() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();
        let lesson_date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let booking_no = BookingNumber::generate(lesson_date);
        let now = Utc::now();
        ctx.repos
            .bookings
            .insert_batch(&[Booking {
                id: Default::default(),
                booking_no: booking_no.clone(),
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

        let mut usecase = GetMeetingInfoUseCase {
            user_id: user_id.clone(),
            booking_no: booking_no.as_str().into(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            res.meeting_url,
            format!("{}/room/{}", ctx.config.meeting_base_url, booking_no)
        );
        assert_eq!(res.bookings.len(), 1);

        let mut other_user = GetMeetingInfoUseCase {
            user_id: ID::new(),
            booking_no: booking_no.as_str().into(),
        };
        assert!(matches!(
            other_user.execute(&ctx).await,
            Err(UseCaseError::BookingNotFound(_))
        ));
    }
}
