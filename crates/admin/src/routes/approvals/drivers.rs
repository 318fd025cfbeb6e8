//! Drivers approval tab.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use wassalni_core::DriverId;

use super::{NoteForm, ReasonForm, format_date};
use crate::db::drivers::DriverWithOwner;
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::{AdminContext, RequireAdmin};
use crate::services::moderation;
use crate::state::AppState;

/// Driver row view for the template.
#[derive(Debug, Clone)]
pub struct DriverView {
    pub driver_id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub vehicle_type: String,
    pub vehicle_plate: String,
    pub rating: Option<String>,
    pub registered_at: String,
    pub is_approved: bool,
    pub is_active: bool,
}

impl From<&DriverWithOwner> for DriverView {
    fn from(driver: &DriverWithOwner) -> Self {
        Self {
            driver_id: driver.driver_id.as_i32(),
            name: driver.name.clone(),
            phone: driver.phone_number.clone(),
            email: driver.owner_email.clone(),
            vehicle_type: driver.vehicle_type.clone(),
            vehicle_plate: driver.vehicle_plate.clone(),
            rating: driver.rating.map(|r| format!("{r:.1}")),
            registered_at: format_date(&driver.created_at),
            is_approved: driver.is_approved,
            is_active: driver.is_active,
        }
    }
}

/// Drivers tab template.
#[derive(Template, WebTemplate)]
#[template(path = "approvals/drivers.html")]
pub struct DriversTemplate {
    pub admin_name: String,
    pub current_path: String,
    pub active_tab: &'static str,
    pub drivers: Vec<DriverView>,
}

/// Render the drivers tab.
pub async fn page(admin: &AdminContext, state: &AppState) -> Result<Response, AppError> {
    let drivers = crate::db::drivers::list_all(state.pool()).await?;
    let drivers: Vec<DriverView> = drivers.iter().map(DriverView::from).collect();

    Ok(DriversTemplate {
        admin_name: admin.profile.name.clone(),
        current_path: "/approvals".to_string(),
        active_tab: "drivers",
        drivers,
    }
    .into_response())
}

/// POST /approvals/drivers/{id}/approve
#[instrument(skip(admin, state, form))]
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, AppError> {
    moderation::approve_driver(
        state.pool(),
        admin.user.id,
        DriverId::new(id),
        form.note.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=drivers"))
}

/// POST /approvals/drivers/{id}/reject
#[instrument(skip(admin, state, form))]
pub async fn reject(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ReasonForm>,
) -> Result<Redirect, AppError> {
    moderation::reject_driver(
        state.pool(),
        admin.user.id,
        DriverId::new(id),
        form.reason.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=drivers"))
}

/// POST /approvals/drivers/{id}/suspend
#[instrument(skip(admin, state, form))]
pub async fn suspend(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ReasonForm>,
) -> Result<Redirect, AppError> {
    moderation::suspend_driver(
        state.pool(),
        admin.user.id,
        DriverId::new(id),
        form.reason.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=drivers"))
}

/// POST /approvals/drivers/{id}/activate
#[instrument(skip(_admin, state))]
pub async fn activate(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    moderation::activate_driver(state.pool(), DriverId::new(id)).await?;
    Ok(Redirect::to("/approvals?tab=drivers"))
}

/// POST /approvals/drivers/{id}/revoke
#[instrument(skip(_admin, state))]
pub async fn revoke(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    moderation::revoke_driver(state.pool(), DriverId::new(id)).await?;
    Ok(Redirect::to("/approvals?tab=drivers"))
}
