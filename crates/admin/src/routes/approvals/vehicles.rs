//! Vehicles approval tab.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use wassalni_core::VehicleId;

use super::{NoteForm, ReasonForm, format_date};
use crate::db::vehicles::VehicleWithOwner;
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::{AdminContext, RequireAdmin};
use crate::services::moderation;
use crate::state::AppState;

/// Vehicle row view for the template.
#[derive(Debug, Clone)]
pub struct VehicleView {
    pub vehicle_id: i32,
    pub model: String,
    pub plate_number: String,
    pub capacity: i32,
    pub owner: String,
    pub owner_phone: Option<String>,
    pub registered_at: String,
    pub is_approved: bool,
    pub is_active: bool,
}

impl From<&VehicleWithOwner> for VehicleView {
    fn from(vehicle: &VehicleWithOwner) -> Self {
        let owner = vehicle
            .driver_name
            .clone()
            .or_else(|| vehicle.company_name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            vehicle_id: vehicle.vehicle_id.as_i32(),
            model: vehicle.model.clone(),
            plate_number: vehicle.plate_number.clone(),
            capacity: vehicle.capacity,
            owner,
            owner_phone: vehicle.driver_phone.clone(),
            registered_at: format_date(&vehicle.created_at),
            is_approved: vehicle.is_approved,
            is_active: vehicle.is_active,
        }
    }
}

/// Vehicles tab template.
#[derive(Template, WebTemplate)]
#[template(path = "approvals/vehicles.html")]
pub struct VehiclesTemplate {
    pub admin_name: String,
    pub current_path: String,
    pub active_tab: &'static str,
    pub vehicles: Vec<VehicleView>,
}

/// Render the vehicles tab.
pub async fn page(admin: &AdminContext, state: &AppState) -> Result<Response, AppError> {
    let vehicles = crate::db::vehicles::list_all(state.pool()).await?;
    let vehicles: Vec<VehicleView> = vehicles.iter().map(VehicleView::from).collect();

    Ok(VehiclesTemplate {
        admin_name: admin.profile.name.clone(),
        current_path: "/approvals".to_string(),
        active_tab: "vehicles",
        vehicles,
    }
    .into_response())
}

/// POST /approvals/vehicles/{id}/approve
#[instrument(skip(admin, state, form))]
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, AppError> {
    moderation::approve_vehicle(
        state.pool(),
        admin.user.id,
        VehicleId::new(id),
        form.note.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=vehicles"))
}

/// POST /approvals/vehicles/{id}/reject
#[instrument(skip(admin, state, form))]
pub async fn reject(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ReasonForm>,
) -> Result<Redirect, AppError> {
    moderation::reject_vehicle(
        state.pool(),
        admin.user.id,
        VehicleId::new(id),
        form.reason.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=vehicles"))
}
