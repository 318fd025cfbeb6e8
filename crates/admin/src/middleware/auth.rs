//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring admin authentication in route handlers.

use askama::Template;
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, Profile, session_keys};
use crate::services::guard::{self, Access, SessionSnapshot};
use crate::state::AppState;

/// Fixed message shown to authenticated non-administrators.
pub const DENIED_MESSAGE: &str = "This panel is restricted to administrators.";

/// The acting administrator: session identity plus the profile that
/// attested the admin role for this request.
#[derive(Debug, Clone)]
pub struct AdminContext {
    /// Session-stored identity.
    pub user: CurrentUser,
    /// Profile loaded for this request.
    pub profile: Profile,
}

/// Extractor that requires an authenticated administrator.
///
/// Evaluates the access decision from the session snapshot: no identity
/// redirects to the login page (401 for API requests), an identity whose
/// profile is missing or not `admin` gets the fixed denial page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.profile.name)
/// }
/// ```
pub struct RequireAdmin(pub AdminContext);

/// Error returned when admin authorization fails.
pub enum AdminRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
    /// Authenticated but not an administrator.
    Denied,
    /// Session state unavailable; the client should retry.
    Unsettled,
}

/// Authorization-denied page template.
#[derive(Template)]
#[template(path = "denied.html")]
struct DeniedTemplate {
    message: &'static str,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::Denied => {
                let body = DeniedTemplate {
                    message: DENIED_MESSAGE,
                }
                .render()
                .unwrap_or_else(|_| DENIED_MESSAGE.to_string());
                (StatusCode::FORBIDDEN, Html(body)).into_response()
            }
            Self::Unsettled => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminRejection::Unauthorized)?;

        // Get the current identity from the session
        let user: Option<CurrentUser> = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten();

        // Resolve the profile before evaluating, so the snapshot is settled
        let profile = match &user {
            Some(u) => crate::db::users::get_profile(state.pool(), u.id).await,
            None => None,
        };

        let snapshot = SessionSnapshot {
            resolving: false,
            identity: user.as_ref(),
            profile: profile.as_ref(),
        };

        match guard::evaluate(&snapshot) {
            Access::Allowed => {
                // Both are present when the guard allows
                let (user, profile) = user
                    .zip(profile)
                    .ok_or(AdminRejection::Unsettled)?;
                crate::error::set_sentry_user(user.id.as_i32(), Some(user.email.as_str()));
                Ok(Self(AdminContext { user, profile }))
            }
            Access::Redirect => {
                let is_api = parts.uri.path().starts_with("/api/");
                if is_api {
                    Err(AdminRejection::Unauthorized)
                } else {
                    Err(AdminRejection::RedirectToLogin)
                }
            }
            Access::Denied => Err(AdminRejection::Denied),
            Access::Loading => Err(AdminRejection::Unsettled),
        }
    }
}

/// Extractor that optionally gets the current identity.
///
/// Unlike `RequireAdmin`, this does not reject the request if nobody is
/// logged in, and it does not touch the profile.
pub struct OptionalUser(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentUser>(session_keys::CURRENT_USER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(user))
    }
}

/// Helper to set the current identity in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current identity from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}
