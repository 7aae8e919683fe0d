use crate::error::LingoraError;
use crate::shared::auth::create_session_token;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lingora_api_structs::login_user::*;
use lingora_domain::{User, UserStatus};
use lingora_infra::LingoraContext;

pub async fn login_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<LingoraContext>,
) -> Result<HttpResponse, LingoraError> {
    let usecase = LoginUserUseCase {
        login_name: body.0.login_name,
        password: body.0.password,
    };

    let res = execute(usecase, &ctx).await.map_err(LingoraError::from)?;
    let token = create_session_token(&res.user, &ctx)?;

    Ok(HttpResponse::Ok().json(APIResponse {
        user_no: res.user.user_no,
        email: res.user.email,
        name: res.user.name,
        token,
    }))
}

#[derive(Debug)]
pub struct LoginUserUseCase {
    pub login_name: String,
    pub password: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidCredentials,
    AccountSuspended,
}

impl From<UseCaseError> for LingoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCredentials => {
                Self::Unauthorized("Invalid login name or password".into())
            }
            UseCaseError::AccountSuspended => {
                Self::Unauthorized("This account has been suspended".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "LoginUser";

    async fn execute(&mut self, ctx: &LingoraContext) -> Result<Self::Response, Self::Error> {
        let user = ctx
            .repos
            .users
            .find_by_login(self.login_name.trim())
            .await
            .ok_or(UseCaseError::InvalidCredentials)?;

        if !user.verify_password(&self.password) {
            return Err(UseCaseError::InvalidCredentials);
        }
        if user.status == UserStatus::Suspended {
            return Err(UseCaseError::AccountSuspended);
        }

        Ok(UseCaseRes { user })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use lingora_infra::setup_context_inmemory;

    async fn insert_user(ctx: &LingoraContext) -> User {
        let mut user = User::new(
            "student@example.com".into(),
            "Student".into(),
            "correct horse",
            "NO".into(),
            "nb".into(),
            Utc::now(),
        );
        user.status = UserStatus::Active;
        ctx.repos.users.insert(&user).await.unwrap();
        user
    }

    #[actix_web::test]
    async fn logs_in_by_email_and_user_no() {
        let ctx = setup_context_inmemory();
        let user = insert_user(&ctx).await;

        let mut by_email = LoginUserUseCase {
            login_name: user.email.clone(),
            password: "correct horse".into(),
        };
        assert_eq!(by_email.execute(&ctx).await.unwrap().user.id, user.id);

        let mut by_user_no = LoginUserUseCase {
            login_name: user.user_no.clone(),
            password: "correct horse".into(),
        };
        assert_eq!(by_user_no.execute(&ctx).await.unwrap().user.id, user.id);
    }

    #[actix_web::test]
    async fn rejects_wrong_password_and_unknown_user() {
        let ctx = setup_context_inmemory();
        let user = insert_user(&ctx).await;

        let mut wrong_password = LoginUserUseCase {
            login_name: user.email.clone(),
            password: "incorrect horse".into(),
        };
        assert!(matches!(
            wrong_password.execute(&ctx).await,
            Err(UseCaseError::InvalidCredentials)
        ));

        let mut unknown = LoginUserUseCase {
            login_name: "nobody@example.com".into(),
            password: "correct horse".into(),
        };
        assert!(matches!(
            unknown.execute(&ctx).await,
            Err(UseCaseError::InvalidCredentials)
        ));
    }

    #[actix_web::test]
    async fn rejects_suspended_accounts() {
        let ctx = setup_context_inmemory();
        let mut user = insert_user(&ctx).await;
        user.status = UserStatus::Suspended;
        ctx.repos.users.save(&user).await.unwrap();

        let mut usecase = LoginUserUseCase {
            login_name: user.email.clone(),
            password: "correct horse".into(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::AccountSuspended)
        ));
    }
}
