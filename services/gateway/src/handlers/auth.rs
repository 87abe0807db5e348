//! Session handlers
//!
//! Registration and login accept any non-empty email/password pair and store
//! the email in the session cookie. Credentials are not verified.

use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    config::SessionConfig,
    error::{ApiError, ApiResult},
    models::{CredentialsRequest, SuccessResponse},
    session::{removal_cookie, session_cookie},
};

/// Authentication handlers
#[derive(Clone)]
pub struct AuthHandlers {
    session: Arc<SessionConfig>,
}

impl AuthHandlers {
    pub const fn new(session: Arc<SessionConfig>) -> Self {
        Self { session }
    }

    /// Registration endpoint
    pub async fn register(
        State(handlers): State<Self>,
        jar: CookieJar,
        payload: Result<Json<CredentialsRequest>, JsonRejection>,
    ) -> ApiResult<(CookieJar, Json<SuccessResponse>)> {
        let email = Self::validate(payload)?;
        info!("Registration for user: {}", email);
        Ok(handlers.sign_in(jar, &email))
    }

    /// Login endpoint
    pub async fn login(
        State(handlers): State<Self>,
        jar: CookieJar,
        payload: Result<Json<CredentialsRequest>, JsonRejection>,
    ) -> ApiResult<(CookieJar, Json<SuccessResponse>)> {
        let email = Self::validate(payload)?;
        info!("Login for user: {}", email);
        Ok(handlers.sign_in(jar, &email))
    }

    /// Logout endpoint, always clears the session cookie
    pub async fn logout(
        State(handlers): State<Self>,
        jar: CookieJar,
    ) -> (CookieJar, Json<SuccessResponse>) {
        info!("Logout request");
        (
            jar.add(removal_cookie(&handlers.session)),
            Json(SuccessResponse::ok()),
        )
    }

    fn sign_in(&self, jar: CookieJar, email: &str) -> (CookieJar, Json<SuccessResponse>) {
        (
            jar.add(session_cookie(&self.session, email)),
            Json(SuccessResponse::ok()),
        )
    }

    /// Extract the email from a credentials payload
    fn validate(payload: Result<Json<CredentialsRequest>, JsonRejection>) -> ApiResult<String> {
        let Json(request) = payload.map_err(|e| {
            warn!("Rejected credentials payload: {}", e);
            ApiError::InvalidInput
        })?;

        let email = request.email.as_deref().map(str::trim).unwrap_or_default();
        let password = request.password.as_deref().unwrap_or_default();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::MissingCredentials);
        }

        Ok(email.to_string())
    }
}
