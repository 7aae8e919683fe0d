use super::session::decode_session_token;
use crate::error::LingoraError;
use actix_web::HttpRequest;
use lingora_domain::User;
use lingora_infra::LingoraContext;

fn parse_authorization_header(req: &HttpRequest) -> Result<&str, LingoraError> {
    let token = req
        .headers()
        .get("authorization")
        .ok_or_else(|| LingoraError::Unauthorized("Missing authorization header".into()))?
        .to_str()
        .map_err(|_| LingoraError::Unauthorized("Malformed authorization header".into()))?
        .trim();

    token
        .strip_prefix("Bearer ")
        .or_else(|| token.strip_prefix("bearer "))
        .map(str::trim)
        .ok_or_else(|| {
            LingoraError::Unauthorized("The authorization header must be a Bearer token".into())
        })
}

/// Validates the session token and resolves it to the logged in `User`
pub async fn protect_route(
    http_req: &HttpRequest,
    ctx: &LingoraContext,
) -> Result<User, LingoraError> {
    let token = parse_authorization_header(http_req)?;
    let claims = decode_session_token(token, ctx)?;
    let user_id = claims
        .sub
        .parse()
        .map_err(|_| LingoraError::Unauthorized("Invalid session token".into()))?;

    ctx.repos
        .users
        .find(&user_id)
        .await
        .ok_or_else(|| LingoraError::Unauthorized("Session does not belong to a known user".into()))
}
