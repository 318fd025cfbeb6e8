//! Trips approval tab.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use wassalni_core::{TripId, TripStatus};

use super::{ReasonForm, format_date};
use crate::db::trips::TripWithProvider;
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::{AdminContext, RequireAdmin};
use crate::services::moderation;
use crate::state::AppState;

/// Trip row view for the template.
#[derive(Debug, Clone)]
pub struct TripView {
    pub trip_id: i32,
    pub provider: String,
    pub provider_kind: String,
    pub origin: String,
    pub destination: String,
    pub departure_at: String,
    pub price: String,
    pub seats: String,
    pub is_pending: bool,
    pub status: String,
}

impl From<&TripWithProvider> for TripView {
    fn from(trip: &TripWithProvider) -> Self {
        Self {
            trip_id: trip.trip_id.as_i32(),
            provider: trip
                .provider_name
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            provider_kind: trip.provider_type.to_string(),
            origin: trip.origin.clone(),
            destination: trip.destination.clone(),
            departure_at: format_date(&trip.departure_time),
            price: format!("{:.0} IQD", trip.price),
            seats: format!("{}/{}", trip.seats_available, trip.seats_total),
            is_pending: trip.status == TripStatus::Pending,
            status: trip.status.to_string(),
        }
    }
}

/// Trips tab template.
#[derive(Template, WebTemplate)]
#[template(path = "approvals/trips.html")]
pub struct TripsTemplate {
    pub admin_name: String,
    pub current_path: String,
    pub active_tab: &'static str,
    pub trips: Vec<TripView>,
}

/// Render the trips tab.
pub async fn page(admin: &AdminContext, state: &AppState) -> Result<Response, AppError> {
    let trips = crate::db::trips::list_reviewable(state.pool()).await?;
    let trips: Vec<TripView> = trips.iter().map(TripView::from).collect();

    Ok(TripsTemplate {
        admin_name: admin.profile.name.clone(),
        current_path: "/approvals".to_string(),
        active_tab: "trips",
        trips,
    }
    .into_response())
}

/// POST /approvals/trips/{id}/approve
#[instrument(skip(admin, state))]
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    moderation::approve_trip(state.pool(), admin.user.id, TripId::new(id)).await?;
    Ok(Redirect::to("/approvals?tab=trips"))
}

/// POST /approvals/trips/{id}/reject
#[instrument(skip(admin, state, form))]
pub async fn reject(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ReasonForm>,
) -> Result<Redirect, AppError> {
    moderation::reject_trip(
        state.pool(),
        admin.user.id,
        TripId::new(id),
        form.reason.as_deref(),
    )
    .await?;
    Ok(Redirect::to("/approvals?tab=trips"))
}
