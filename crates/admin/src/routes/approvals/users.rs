//! Users approval tab.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use wassalni_core::UserId;

use super::{NoteForm, ReasonForm, format_date};
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::{AdminContext, RequireAdmin};
use crate::models::Profile;
use crate::services::moderation;
use crate::state::AppState;

/// User profile row view for the template.
#[derive(Debug, Clone)]
pub struct UserView {
    pub user_id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: String,
    pub registered_at: String,
    pub is_approved: bool,
    pub is_active: bool,
}

impl From<&Profile> for UserView {
    fn from(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id.as_i32(),
            name: profile.name.clone(),
            phone: profile.phone_number.to_string(),
            email: profile.email.to_string(),
            role: profile.user_type.to_string(),
            registered_at: format_date(&profile.created_at),
            is_approved: profile.is_approved,
            is_active: profile.is_active,
        }
    }
}

/// Users tab template.
#[derive(Template, WebTemplate)]
#[template(path = "approvals/users.html")]
pub struct UsersTemplate {
    pub admin_name: String,
    pub current_path: String,
    pub active_tab: &'static str,
    pub users: Vec<UserView>,
}

/// Render the users tab.
pub async fn page(admin: &AdminContext, state: &AppState) -> Result<Response, AppError> {
    let profiles = crate::db::users::list_all(state.pool()).await?;
    let users: Vec<UserView> = profiles.iter().map(UserView::from).collect();

    Ok(UsersTemplate {
        admin_name: admin.profile.name.clone(),
        current_path: "/approvals".to_string(),
        active_tab: "users",
        users,
    }
    .into_response())
}

/// POST /approvals/users/{id}/approve
#[instrument(skip(admin, state, form))]
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, AppError> {
    moderation::approve_user(
        state.pool(),
        admin.user.id,
        UserId::new(id),
        form.note.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=users"))
}

/// POST /approvals/users/{id}/reject
#[instrument(skip(admin, state, form))]
pub async fn reject(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ReasonForm>,
) -> Result<Redirect, AppError> {
    moderation::reject_user(
        state.pool(),
        admin.user.id,
        UserId::new(id),
        form.reason.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=users"))
}
