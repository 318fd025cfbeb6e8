//! Database operations for the Wassalni `PostgreSQL` database.
//!
//! # Schema: `wassalni`
//!
//! ## Tables
//!
//! - `account` - Authentication identities (email + argon2 password hash)
//! - `users` - User profiles (role + moderation flags), one per account
//! - `companies` / `drivers` - Service providers awaiting or holding approval
//! - `vehicles` - Vehicles registered by providers
//! - `trips` - Scheduled trips offered by providers
//! - `requests` - Customer trip requests
//! - `payments` - Completed payments (revenue reporting)
//! - `notifications` - Side-effect notifications written by admin actions
//! - `admin_reviews` - Audit log of moderation decisions
//! - `session` - tower-sessions storage
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p wassalni-cli -- migrate
//! ```

pub mod accounts;
pub mod companies;
pub mod drivers;
pub mod notifications;
pub mod requests;
pub mod reviews;
pub mod stats;
pub mod trips;
pub mod users;
pub mod vehicles;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
