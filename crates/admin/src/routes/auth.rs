//! Authentication route handlers.
//!
//! Login page, password login, and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::middleware::{OptionalUser, clear_current_user, set_current_user};
use crate::services::auth as auth_service;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the login page.
///
/// GET /auth/login
pub async fn login_page(OptionalUser(user): OptionalUser) -> Response {
    // Already logged in - straight to the dashboard
    if user.is_some() {
        return Redirect::to("/").into_response();
    }

    LoginTemplate { error: None }.into_response()
}

/// Handle login form submission.
///
/// POST /auth/login
///
/// A single credential check; on failure the page re-renders with the
/// auth error message as-is. Nothing is retried on the server side.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match auth_service::sign_in(state.pool(), &form.email, &form.password).await {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to set session: {e}");
                return LoginTemplate {
                    error: Some("Failed to establish a session. Please try again.".to_string()),
                }
                .into_response();
            }

            tracing::info!(user_id = %user.id, "admin login");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            LoginTemplate {
                error: Some(e.to_string()),
            }
            .into_response()
        }
    }
}

/// Logout and clear session.
///
/// POST /auth/logout
///
/// Local session state is always cleared, even if deleting the stored
/// session record fails, so the UI can never remain stuck authenticated.
pub async fn logout(session: Session) -> impl IntoResponse {
    // Local identity goes first, then the stored record; either failure is
    // only logged and the client still leaves logged out
    if let Err(e) = clear_current_user(&session).await {
        tracing::warn!("Failed to clear session identity: {e}");
    }
    session.clear().await;
    if let Err(e) = session.flush().await {
        tracing::warn!("Failed to delete stored session on logout: {e}");
    }

    crate::error::clear_sentry_user();

    Redirect::to("/auth/login")
}
