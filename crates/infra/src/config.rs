use lingora_domain::scheduling::ConflictScope;
use lingora_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Secret used to sign and verify session tokens
    pub jwt_signing_secret: String,
    /// How long an issued session token stays valid, in seconds
    pub session_lifetime: i64,
    /// Whether booking conflicts are checked per course or across all of
    /// a teacher's courses
    pub booking_conflict_scope: ConflictScope,
    /// Longest date range, in days, a single confirmation request may span.
    /// This is used to avoid having clients book recurring lessons over a
    /// timespan of several years, which creates enormous batches and is
    /// not a meaningful request anyways.
    pub booking_window_max_days: i64,
    /// Base URL meeting room links are derived from
    pub meeting_base_url: String,
}

impl Config {
    pub fn new() -> Self {
        let jwt_signing_secret = match std::env::var("JWT_SIGNING_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find JWT_SIGNING_SECRET environment variable. Going to create one.");
                create_random_secret(32)
            }
        };

        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let booking_conflict_scope = match std::env::var("BOOKING_CONFLICT_SCOPE") {
            Ok(scope) => match scope.parse::<ConflictScope>() {
                Ok(scope) => scope,
                Err(_) => {
                    warn!(
                        "The given BOOKING_CONFLICT_SCOPE: {} is not valid, expected `course` or `teacher`. Falling back to `course`.",
                        scope
                    );
                    ConflictScope::PerCourse
                }
            },
            Err(_) => ConflictScope::PerCourse,
        };

        let default_window = 366;
        let booking_window_max_days = match std::env::var("BOOKING_WINDOW_MAX_DAYS") {
            Ok(days) => match days.parse::<i64>() {
                Ok(days) if days > 0 => days,
                _ => {
                    warn!(
                        "The given BOOKING_WINDOW_MAX_DAYS: {} is not valid, falling back to {}.",
                        days, default_window
                    );
                    default_window
                }
            },
            Err(_) => default_window,
        };

        let meeting_base_url = std::env::var("MEETING_BASE_URL")
            .unwrap_or_else(|_| "https://meet.lingora.app".into());

        Self {
            port,
            jwt_signing_secret,
            session_lifetime: 60 * 60 * 24, // 24 hours
            booking_conflict_scope,
            booking_window_max_days,
            meeting_base_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
