use lazy_static::lazy_static;
use regex::Regex;
use tower_cookies::{
    cookie::{time::Duration, SameSite},
    Cookie,
};
use uuid::Uuid;
use validator::ValidationError;

use crate::config::SessionConfig;

pub const SESSION_COOKIE: &str = "sessionId";

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// `validator` hook; surrounding whitespace is trimmed by the handlers anyway.
pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email.trim()) {
        return Ok(());
    }
    let mut error = ValidationError::new("email");
    error.message = Some("invalid email".into());
    Err(error)
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Fresh opaque session token.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Cookie carrying the session token back to the client.
pub fn session_cookie(session_id: String, config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, session_id);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(Duration::days(config.ttl_days));
    if config.secure_cookie {
        cookie.set_secure(true);
    }
    cookie
}
