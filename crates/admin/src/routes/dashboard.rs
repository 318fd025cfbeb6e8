//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// Dashboard metrics formatted for display.
#[derive(Debug, Clone)]
pub struct DashboardMetrics {
    pub total_users: i64,
    pub total_drivers: i64,
    pub total_companies: i64,
    pub active_requests: i64,
    pub completed_requests: i64,
    pub total_revenue: String,
    pub pending_companies: i64,
    pub pending_drivers: i64,
    pub pending_trips: i64,
    pub total_pending: i64,
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin_name: String,
    pub current_path: String,
    pub metrics: DashboardMetrics,
}

/// Dashboard page handler.
///
/// GET /
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<DashboardTemplate, AppError> {
    let stats = crate::db::stats::dashboard(state.pool()).await?;

    let metrics = DashboardMetrics {
        total_users: stats.total_users,
        total_drivers: stats.total_drivers,
        total_companies: stats.total_companies,
        active_requests: stats.active_requests,
        completed_requests: stats.completed_requests,
        total_revenue: format!("{:.0} IQD", stats.total_revenue),
        pending_companies: stats.pending_companies,
        pending_drivers: stats.pending_drivers,
        pending_trips: stats.pending_trips,
        total_pending: stats.total_pending(),
    };

    Ok(DashboardTemplate {
        admin_name: admin.profile.name,
        current_path: "/".to_string(),
        metrics,
    })
}
