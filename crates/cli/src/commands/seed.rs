//! Database seeding for local development.
//!
//! # Usage
//!
//! ```bash
//! wassalni-cli seed
//! ```
//!
//! Creates a small, reviewable data set: an approved admin, an approved
//! customer, a pending driver and company, one pending trip, and one
//! pending request with a completed payment. Safe to run once against an
//! empty, migrated database.
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string

use sqlx::PgPool;
use thiserror::Error;

use wassalni_admin::db::accounts::NewProvider;
use wassalni_admin::services::auth::{self, AuthError};
use wassalni_core::{CompanyType, UserType};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Registration failed.
    #[error("Registration error: {0}")]
    Auth(#[from] AuthError),
}

/// Seed the database with sample data.
///
/// # Errors
///
/// Returns `SeedError` if the database is unreachable or any insert fails
/// (including running twice, since the seed emails are unique).
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .map_err(|_| SeedError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    let pool = PgPool::connect(&database_url).await?;

    // Approved admin
    let admin = auth::register(
        &pool,
        "admin@wassalni.local",
        "admin-dev-password",
        "Platform Admin",
        "07700000001",
        UserType::Admin,
        None,
    )
    .await?;
    wassalni_admin::db::users::set_flags(&pool, admin.id, true, true)
        .await
        .map_err(AuthError::Repository)?;

    // Customer (auto-approved at registration)
    let customer = auth::register(
        &pool,
        "customer@wassalni.local",
        "customer-dev-password",
        "Sara Customer",
        "07700000002",
        UserType::Customer,
        None,
    )
    .await?;

    // Pending driver
    auth::register(
        &pool,
        "driver@wassalni.local",
        "driver-dev-password",
        "Ali Driver",
        "07700000003",
        UserType::Driver,
        Some(NewProvider::Driver {
            vehicle_type: "sedan".to_owned(),
            vehicle_plate: "BGD-1234".to_owned(),
        }),
    )
    .await?;

    // Pending company
    let company_owner = auth::register(
        &pool,
        "company@wassalni.local",
        "company-dev-password",
        "Basra Lines",
        "07700000004",
        UserType::Company,
        Some(NewProvider::Company {
            company_type: CompanyType::Transport,
            contact_info: serde_json::json!({ "office": "Basra, Corniche St." }),
        }),
    )
    .await?;

    // One pending trip offered by the company
    sqlx::query(
        r"
        INSERT INTO wassalni.trips
            (provider_type, provider_id, origin, destination, departure_time,
             price, seats_total, seats_available)
        SELECT 'company', company_id, 'Baghdad', 'Basra',
               NOW() + INTERVAL '2 days', 25000, 14, 14
        FROM wassalni.companies
        WHERE user_id = $1
        ",
    )
    .bind(company_owner.id)
    .execute(&pool)
    .await?;

    // One pending request from the customer, with a completed payment
    let request_id = sqlx::query_scalar::<_, i32>(
        r"
        INSERT INTO wassalni.requests (user_id, origin, destination, requested_time)
        VALUES ($1, 'Erbil', 'Mosul', NOW() + INTERVAL '1 day')
        RETURNING request_id
        ",
    )
    .bind(customer.id)
    .fetch_one(&pool)
    .await?;

    sqlx::query(
        r"
        INSERT INTO wassalni.payments (request_id, amount, payment_status)
        VALUES ($1, 15000, 'completed')
        ",
    )
    .bind(request_id)
    .execute(&pool)
    .await?;

    tracing::info!("Seed data created (admin@wassalni.local / admin-dev-password)");
    Ok(())
}
