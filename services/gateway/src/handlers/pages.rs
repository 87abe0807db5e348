//! Server-rendered pages

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::{config::SessionConfig, session::session_email};

const INDEX_PAGE: &str = include_str!("../../assets/index.html");
const DASHBOARD_PAGE: &str = include_str!("../../assets/dashboard.html");

/// Page handlers
#[derive(Clone)]
pub struct PageHandlers {
    session: Arc<SessionConfig>,
}

impl PageHandlers {
    pub const fn new(session: Arc<SessionConfig>) -> Self {
        Self { session }
    }

    /// Entry page with the login/registration form
    pub async fn index() -> Html<&'static str> {
        Html(INDEX_PAGE)
    }

    /// Dashboard, only for signed-in users
    pub async fn dashboard(State(handlers): State<Self>, jar: CookieJar) -> Response {
        match session_email(&jar, &handlers.session) {
            Some(email) => Html(render_dashboard(&email)).into_response(),
            None => Redirect::temporary("/").into_response(),
        }
    }
}

/// Fill the dashboard template for `email`
#[must_use]
pub fn render_dashboard(email: &str) -> String {
    DASHBOARD_PAGE.replace("{{email}}", &escape_html(email))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
