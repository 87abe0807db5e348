//! Cookie-backed sessions
//!
//! The session cookie holds nothing but the user's email. The cookie jar
//! percent-encodes values on the way out and decodes them on the way in.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::SessionConfig;

/// Cookie that marks `email` as signed in
#[must_use]
pub fn session_cookie(config: &SessionConfig, email: &str) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), email.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .build()
}

/// Cookie that expires the session immediately
#[must_use]
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((config.cookie_name.clone(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .build();
    cookie.make_removal();
    cookie
}

/// Email of the signed-in user, if the session cookie is present and non-empty
#[must_use]
pub fn session_email(jar: &CookieJar, config: &SessionConfig) -> Option<String> {
    let cookie = jar.get(&config.cookie_name)?;
    let email = cookie.value().trim();
    (!email.is_empty()).then(|| email.to_string())
}
