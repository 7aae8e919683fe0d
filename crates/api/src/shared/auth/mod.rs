mod route_guards;
mod session;

pub use route_guards::protect_route;
pub use session::{create_session_token, SessionClaims};
