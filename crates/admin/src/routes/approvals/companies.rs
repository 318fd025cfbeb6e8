//! Companies approval tab.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use wassalni_core::{CompanyId, CompanyType};

use super::{NoteForm, ReasonForm, format_date};
use crate::db::companies::CompanyWithOwner;
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::{AdminContext, RequireAdmin};
use crate::services::moderation;
use crate::state::AppState;

/// Company row view for the template.
#[derive(Debug, Clone)]
pub struct CompanyView {
    pub company_id: i32,
    pub name: String,
    pub type_label: &'static str,
    pub phone: String,
    pub email: Option<String>,
    pub contact_info: Option<String>,
    pub registered_at: String,
    pub is_approved: bool,
    pub is_active: bool,
}

impl From<&CompanyWithOwner> for CompanyView {
    fn from(company: &CompanyWithOwner) -> Self {
        let type_label = match company.company_type {
            CompanyType::Tourism => "Tourism",
            CompanyType::Transport => "Transport",
            CompanyType::Both => "Tourism & Transport",
        };

        // Prefer the owner profile's phone, as registration forms sometimes
        // leave the company contact blank
        let phone = company
            .owner_phone
            .clone()
            .unwrap_or_else(|| company.phone_number.clone());

        let contact_info = company
            .contact_info
            .as_ref()
            .and_then(|v| serde_json::to_string_pretty(v).ok());

        Self {
            company_id: company.company_id.as_i32(),
            name: company.name.clone(),
            type_label,
            phone,
            email: company.owner_email.clone(),
            contact_info,
            registered_at: format_date(&company.created_at),
            is_approved: company.is_approved,
            is_active: company.is_active,
        }
    }
}

/// Companies tab template.
#[derive(Template, WebTemplate)]
#[template(path = "approvals/companies.html")]
pub struct CompaniesTemplate {
    pub admin_name: String,
    pub current_path: String,
    pub active_tab: &'static str,
    pub companies: Vec<CompanyView>,
}

/// Render the companies tab.
pub async fn page(admin: &AdminContext, state: &AppState) -> Result<Response, AppError> {
    let companies = crate::db::companies::list_all(state.pool()).await?;
    let companies: Vec<CompanyView> = companies.iter().map(CompanyView::from).collect();

    Ok(CompaniesTemplate {
        admin_name: admin.profile.name.clone(),
        current_path: "/approvals".to_string(),
        active_tab: "companies",
        companies,
    }
    .into_response())
}

/// POST /approvals/companies/{id}/approve
#[instrument(skip(admin, state, form))]
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, AppError> {
    moderation::approve_company(
        state.pool(),
        admin.user.id,
        CompanyId::new(id),
        form.note.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=companies"))
}

/// POST /approvals/companies/{id}/reject
#[instrument(skip(admin, state, form))]
pub async fn reject(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ReasonForm>,
) -> Result<Redirect, AppError> {
    moderation::reject_company(
        state.pool(),
        admin.user.id,
        CompanyId::new(id),
        form.reason.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=companies"))
}

/// POST /approvals/companies/{id}/suspend
#[instrument(skip(admin, state, form))]
pub async fn suspend(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ReasonForm>,
) -> Result<Redirect, AppError> {
    moderation::suspend_company(
        state.pool(),
        admin.user.id,
        CompanyId::new(id),
        form.reason.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=companies"))
}

/// POST /approvals/companies/{id}/activate
#[instrument(skip(_admin, state))]
pub async fn activate(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    moderation::activate_company(state.pool(), CompanyId::new(id)).await?;
    Ok(Redirect::to("/approvals?tab=companies"))
}

/// POST /approvals/companies/{id}/revoke
#[instrument(skip(_admin, state))]
pub async fn revoke(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    moderation::revoke_company(state.pool(), CompanyId::new(id)).await?;
    Ok(Redirect::to("/approvals?tab=companies"))
}

/// POST /approvals/companies/{id}/comment
#[instrument(skip(admin, state, form))]
pub async fn comment(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, AppError> {
    moderation::comment_company(
        state.pool(),
        admin.user.id,
        CompanyId::new(id),
        form.note.as_deref().unwrap_or_default(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=companies"))
}
