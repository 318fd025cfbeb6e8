//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check (wired in main)
//! GET  /health/ready           - Readiness check (wired in main)
//!
//! # Dashboard
//! GET  /                       - Dashboard overview
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Password login
//! POST /auth/logout            - Logout
//!
//! # Approvals
//! GET  /approvals?tab=...      - Approval screens (companies, drivers,
//!                                users, vehicles, trips, requests)
//! POST /approvals/companies/{id}/approve | reject | suspend | activate
//!                              | revoke | comment
//! POST /approvals/drivers/{id}/approve | reject | suspend | activate | revoke
//! POST /approvals/users/{id}/approve | reject
//! POST /approvals/vehicles/{id}/approve | reject
//! POST /approvals/trips/{id}/approve | reject
//! POST /approvals/requests/{id}/approve | reject
//! ```

pub mod approvals;
pub mod auth;
pub mod dashboard;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Auth
        .route("/auth/login", get(auth::login_page).post(auth::login))
        .route("/auth/logout", post(auth::logout))
        // Approvals
        .route("/approvals", get(approvals::index))
        // Companies
        .route(
            "/approvals/companies/{id}/approve",
            post(approvals::companies::approve),
        )
        .route(
            "/approvals/companies/{id}/reject",
            post(approvals::companies::reject),
        )
        .route(
            "/approvals/companies/{id}/suspend",
            post(approvals::companies::suspend),
        )
        .route(
            "/approvals/companies/{id}/activate",
            post(approvals::companies::activate),
        )
        .route(
            "/approvals/companies/{id}/revoke",
            post(approvals::companies::revoke),
        )
        .route(
            "/approvals/companies/{id}/comment",
            post(approvals::companies::comment),
        )
        // Drivers
        .route(
            "/approvals/drivers/{id}/approve",
            post(approvals::drivers::approve),
        )
        .route(
            "/approvals/drivers/{id}/reject",
            post(approvals::drivers::reject),
        )
        .route(
            "/approvals/drivers/{id}/suspend",
            post(approvals::drivers::suspend),
        )
        .route(
            "/approvals/drivers/{id}/activate",
            post(approvals::drivers::activate),
        )
        .route(
            "/approvals/drivers/{id}/revoke",
            post(approvals::drivers::revoke),
        )
        // Users
        .route(
            "/approvals/users/{id}/approve",
            post(approvals::users::approve),
        )
        .route(
            "/approvals/users/{id}/reject",
            post(approvals::users::reject),
        )
        // Vehicles
        .route(
            "/approvals/vehicles/{id}/approve",
            post(approvals::vehicles::approve),
        )
        .route(
            "/approvals/vehicles/{id}/reject",
            post(approvals::vehicles::reject),
        )
        // Trips
        .route(
            "/approvals/trips/{id}/approve",
            post(approvals::trips::approve),
        )
        .route(
            "/approvals/trips/{id}/reject",
            post(approvals::trips::reject),
        )
        // Requests
        .route(
            "/approvals/requests/{id}/approve",
            post(approvals::requests::approve),
        )
        .route(
            "/approvals/requests/{id}/reject",
            post(approvals::requests::reject),
        )
}
