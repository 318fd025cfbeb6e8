//! Approval management screens.
//!
//! One tabbed page (`/approvals?tab=...`) with a module per tab. Every
//! action is a plain form post that redirects back to its tab.

pub mod companies;
pub mod drivers;
pub mod requests;
pub mod trips;
pub mod users;
pub mod vehicles;

use axum::{
    extract::{Query, State},
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// Query parameters selecting the active tab.
#[derive(Debug, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

/// Form carrying an optional note (approve/comment actions).
#[derive(Debug, Deserialize)]
pub struct NoteForm {
    pub note: Option<String>,
}

/// Form carrying an optional reason (reject/suspend actions).
#[derive(Debug, Deserialize)]
pub struct ReasonForm {
    pub reason: Option<String>,
}

/// Display formatting for timestamps across the approval tables.
pub(crate) fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Approval management page.
///
/// GET /approvals?tab=companies|drivers|users|vehicles|trips|requests
///
/// Unknown tab values fall back to the companies tab.
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<TabQuery>,
) -> Result<Response, AppError> {
    match query.tab.as_deref() {
        Some("drivers") => drivers::page(&admin, &state).await,
        Some("users") => users::page(&admin, &state).await,
        Some("vehicles") => vehicles::page(&admin, &state).await,
        Some("trips") => trips::page(&admin, &state).await,
        Some("requests") => requests::page(&admin, &state).await,
        _ => companies::page(&admin, &state).await,
    }
}
