use crate::error::LingoraError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lingora_api_structs::register_user::*;
use lingora_domain::{User, UserProfile};
use lingora_infra::LingoraContext;

pub async fn register_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let body = body.0;
    let usecase = RegisterUserUseCase {
        email: body.email,
        password: body.password,
        name: body.name,
        country: body.country,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Created().json(APIResponse {
                user_no: res.user.user_no,
            })
        })
        .map_err(LingoraError::from)
}

#[derive(Debug)]
pub struct RegisterUserUseCase {
    pub email: String,
    pub password: String,
    pub name: String,
    pub country: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidEmail(String),
    WeakPassword,
    EmailTaken(String),
    UnknownCountry(String),
    StorageError,
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEmail(email) => {
                Self::BadClientData(format!("Invalid email address: {}", email))
            }
            UseCaseError::WeakPassword => Self::BadClientData(format!(
                "The password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )),
            UseCaseError::EmailTaken(email) => Self::Conflict(format!(
                "A user with the email {} already exists",
                email
            )),
            UseCaseError::UnknownCountry(code) => {
                Self::BadClientData(format!("Unknown country code: {}", code))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

const MIN_PASSWORD_LENGTH: usize = 8;

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "RegisterUser";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let email = self.email.trim().to_lowercase();
        if !email.contains('@') || email.contains(char::is_whitespace) {
            return Err(UseCaseError::InvalidEmail(self.email.clone()));
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(UseCaseError::WeakPassword);
        }
        if ctx.repos.users.find_by_email(&email).await.is_some() {
            return Err(UseCaseError::EmailTaken(email));
        }

        // The dictionary decides the default interface language
        let country = ctx
            .repos
            .countries
            .find_by_code(&self.country)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or_else(|| UseCaseError::UnknownCountry(self.country.clone()))?;

        let mut user = User::new(
            email.clone(),
            self.name.clone(),
            &self.password,
            country.code,
            country.language_code,
            ctx.sys.now(),
        );
        user.login_id = email;

        ctx.repos
            .users
            .insert(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        // Every account starts with an empty profile that the user can
        // fill in later.
        let profile = UserProfile::new(user.id.clone(), user.country.clone(), ctx.sys.now());
        ctx.repos
            .users
            .insert_profile(&profile)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { user })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lingora_domain::UserStatus;
    use lingora_infra::setup_context_inmemory;

    fn usecase() -> RegisterUserUseCase {
        RegisterUserUseCase {
            email: "Student@Example.com".into(),
            password: "correct horse".into(),
            name: "Student".into(),
            country: "no".into(),
        }
    }

    #[actix_web::test]
    async fn registers_a_user_with_profile() {
        let ctx = setup_context_inmemory();

        let res = usecase().execute(&ctx).await.unwrap();
        assert_eq!(res.user.email, "student@example.com");
        assert_eq!(res.user.user_no.len(), 10);
        assert_eq!(res.user.status, UserStatus::Pending);
        assert_eq!(res.user.country, "NO");
        // Language comes from the dictionary, not the request
        assert_eq!(res.user.language, "nb");
        assert!(res.user.verify_password("correct horse"));

        assert!(ctx.repos.users.find(&res.user.id).await.is_some());
        assert!(ctx.repos.users.find_profile(&res.user.id).await.is_some());
    }

    #[actix_web::test]
    async fn rejects_duplicate_email() {
        let ctx = setup_context_inmemory();

        usecase().execute(&ctx).await.unwrap();
        let res = usecase().execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::EmailTaken(_))));
    }

    #[actix_web::test]
    async fn rejects_invalid_email_and_short_password() {
        let ctx = setup_context_inmemory();

        let mut bad_email = usecase();
        bad_email.email = "not-an-email".into();
        assert!(matches!(
            bad_email.execute(&ctx).await,
            Err(UseCaseError::InvalidEmail(_))
        ));

        let mut short_password = usecase();
        short_password.password = "short".into();
        assert!(matches!(
            short_password.execute(&ctx).await,
            Err(UseCaseError::WeakPassword)
        ));
    }

    #[actix_web::test]
    async fn rejects_a_country_outside_the_dictionary() {
        let ctx = setup_context_inmemory();

        let mut unknown_country = usecase();
        unknown_country.country = "XX".into();
        assert!(matches!(
            unknown_country.execute(&ctx).await,
            Err(UseCaseError::UnknownCountry(_))
        ));
    }
}
