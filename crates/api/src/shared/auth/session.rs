use crate::error::LingoraError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use lingora_domain::User;
use lingora_infra::LingoraContext;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id
    pub sub: String,
    pub user_no: String,
    /// Issued at, unix timestamp in seconds
    pub iat: i64,
    /// Expiration, unix timestamp in seconds
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(user: &User, issued_at: i64, lifetime: i64) -> Self {
        Self {
            sub: user.id.as_string(),
            user_no: user.user_no.clone(),
            iat: issued_at,
            exp: issued_at + lifetime,
        }
    }
}

pub fn create_session_token(user: &User, ctx: &LingoraContext) -> Result<String, LingoraError> {
    let claims = SessionClaims::new(
        user,
        ctx.sys.get_timestamp_millis() / 1000,
        ctx.config.session_lifetime,
    );

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(ctx.config.jwt_signing_secret.as_bytes()),
    )
    .map_err(|_| LingoraError::InternalError)
}

pub fn decode_session_token(token: &str, ctx: &LingoraContext) -> Result<SessionClaims, LingoraError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(ctx.config.jwt_signing_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| LingoraError::Unauthorized("Invalid session token".into()))
}
