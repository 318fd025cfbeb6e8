//! Trip requests approval tab.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use wassalni_core::{RequestId, RequestStatus};

use super::{ReasonForm, format_date};
use crate::db::requests::RequestWithUser;
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::{AdminContext, RequireAdmin};
use crate::services::moderation;
use crate::state::AppState;

/// Request row view for the template.
#[derive(Debug, Clone)]
pub struct RequestView {
    pub request_id: i32,
    pub customer: String,
    pub customer_phone: String,
    pub origin: String,
    pub destination: String,
    pub requested_at: String,
    pub provider: Option<String>,
    pub is_pending: bool,
    pub status: String,
}

impl From<&RequestWithUser> for RequestView {
    fn from(request: &RequestWithUser) -> Self {
        Self {
            request_id: request.request_id.as_i32(),
            customer: request.customer_name.clone(),
            customer_phone: request.customer_phone.clone(),
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            requested_at: format_date(&request.requested_time),
            provider: request.provider_name.clone(),
            is_pending: request.status == RequestStatus::Pending,
            status: request.status.to_string(),
        }
    }
}

/// Requests tab template.
#[derive(Template, WebTemplate)]
#[template(path = "approvals/requests.html")]
pub struct RequestsTemplate {
    pub admin_name: String,
    pub current_path: String,
    pub active_tab: &'static str,
    pub requests: Vec<RequestView>,
}

/// Render the requests tab.
pub async fn page(admin: &AdminContext, state: &AppState) -> Result<Response, AppError> {
    let requests = crate::db::requests::list_all(state.pool()).await?;
    let requests: Vec<RequestView> = requests.iter().map(RequestView::from).collect();

    Ok(RequestsTemplate {
        admin_name: admin.profile.name.clone(),
        current_path: "/approvals".to_string(),
        active_tab: "requests",
        requests,
    }
    .into_response())
}

/// POST /approvals/requests/{id}/approve
#[instrument(skip(admin, state))]
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    moderation::approve_request(state.pool(), admin.user.id, RequestId::new(id)).await?;
    Ok(Redirect::to("/approvals?tab=requests"))
}

/// POST /approvals/requests/{id}/reject
#[instrument(skip(admin, state, form))]
pub async fn reject(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ReasonForm>,
) -> Result<Redirect, AppError> {
    moderation::reject_request(
        state.pool(),
        admin.user.id,
        RequestId::new(id),
        form.reason.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=requests"))
}
