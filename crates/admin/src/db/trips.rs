//! Database operations for trips.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use wassalni_core::{ProviderType, TripId, TripStatus, UserId};

use super::RepositoryError;

/// A trip joined with its provider's name and owning account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TripWithProvider {
    /// Unique trip ID.
    pub trip_id: TripId,
    /// Whether a driver or a company offers this trip.
    pub provider_type: ProviderType,
    /// ID in the matching provider table.
    pub provider_id: i32,
    /// Departure location.
    pub origin: String,
    /// Arrival location.
    pub destination: String,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Ticket price.
    pub price: f64,
    /// Total seats offered.
    pub seats_total: i32,
    /// Seats still available.
    pub seats_available: i32,
    /// Trip lifecycle status.
    pub status: TripStatus,
    /// When the trip was posted.
    pub created_at: DateTime<Utc>,
    /// Resolved provider display name.
    pub provider_name: Option<String>,
    /// Account owning the provider (notification target).
    pub provider_user_id: Option<UserId>,
}

const TRIP_SELECT: &str = r"
    SELECT t.trip_id, t.provider_type, t.provider_id, t.origin, t.destination,
           t.departure_time, t.price, t.seats_total, t.seats_available,
           t.status, t.created_at,
           COALESCE(d.name, c.name) AS provider_name,
           COALESCE(d.user_id, c.user_id) AS provider_user_id
    FROM wassalni.trips t
    LEFT JOIN wassalni.drivers d
        ON t.provider_type = 'driver' AND d.driver_id = t.provider_id
    LEFT JOIN wassalni.companies c
        ON t.provider_type = 'company' AND c.company_id = t.provider_id
";

/// List trips awaiting review or currently running (pending/active),
/// newest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_reviewable(pool: &PgPool) -> Result<Vec<TripWithProvider>, RepositoryError> {
    let query = format!(
        "{TRIP_SELECT} WHERE t.status IN ('pending', 'active') ORDER BY t.created_at DESC"
    );
    let trips = sqlx::query_as::<_, TripWithProvider>(&query)
        .fetch_all(pool)
        .await?;

    Ok(trips)
}

/// Get a trip by ID.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the trip does not exist.
pub async fn get_by_id(pool: &PgPool, trip_id: TripId) -> Result<TripWithProvider, RepositoryError> {
    let query = format!("{TRIP_SELECT} WHERE t.trip_id = $1");
    sqlx::query_as::<_, TripWithProvider>(&query)
        .bind(trip_id)
        .fetch_optional(pool)
        .await?
        .ok_or(RepositoryError::NotFound)
}

/// Move a trip to a new lifecycle status.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the trip does not exist.
pub async fn set_status(
    pool: &PgPool,
    trip_id: TripId,
    status: TripStatus,
) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        r"
        UPDATE wassalni.trips
        SET status = $2, updated_at = NOW()
        WHERE trip_id = $1
        ",
    )
    .bind(trip_id)
    .bind(status)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
