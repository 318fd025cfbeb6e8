//! Database operations for customer trip requests.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use wassalni_core::{ProviderType, RequestId, RequestStatus, UserId};

use super::RepositoryError;

/// A trip request joined with the requesting user and assigned provider.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RequestWithUser {
    /// Unique request ID.
    pub request_id: RequestId,
    /// Requesting customer's account.
    pub user_id: UserId,
    /// Pickup location.
    pub origin: String,
    /// Drop-off location.
    pub destination: String,
    /// When the customer wants to travel.
    pub requested_time: DateTime<Utc>,
    /// Provider kind the request was assigned to, if any.
    pub assigned_type: Option<ProviderType>,
    /// Provider ID the request was assigned to, if any.
    pub assigned_to: Option<i32>,
    /// Request lifecycle status.
    pub status: RequestStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// Requesting customer's name.
    pub customer_name: String,
    /// Requesting customer's phone.
    pub customer_phone: String,
    /// Requesting customer's email.
    pub customer_email: String,
    /// Assigned provider's display name, if assigned.
    pub provider_name: Option<String>,
}

/// List all requests, pending first, newest first. The requesting user is
/// joined inner (requests without a profile are data corruption, not rows
/// to display).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<RequestWithUser>, RepositoryError> {
    let requests = sqlx::query_as::<_, RequestWithUser>(
        r"
        SELECT r.request_id, r.user_id, r.origin, r.destination, r.requested_time,
               r.assigned_type, r.assigned_to, r.status, r.created_at,
               u.name AS customer_name, u.phone_number AS customer_phone,
               u.email AS customer_email,
               COALESCE(d.name, c.name) AS provider_name
        FROM wassalni.requests r
        INNER JOIN wassalni.users u ON u.user_id = r.user_id
        LEFT JOIN wassalni.drivers d
            ON r.assigned_type = 'driver' AND d.driver_id = r.assigned_to
        LEFT JOIN wassalni.companies c
            ON r.assigned_type = 'company' AND c.company_id = r.assigned_to
        ORDER BY r.status ASC, r.created_at DESC
        ",
    )
    .fetch_all(pool)
    .await?;

    Ok(requests)
}

/// Get a request by ID.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the request does not exist.
pub async fn get_by_id(
    pool: &PgPool,
    request_id: RequestId,
) -> Result<RequestWithUser, RepositoryError> {
    sqlx::query_as::<_, RequestWithUser>(
        r"
        SELECT r.request_id, r.user_id, r.origin, r.destination, r.requested_time,
               r.assigned_type, r.assigned_to, r.status, r.created_at,
               u.name AS customer_name, u.phone_number AS customer_phone,
               u.email AS customer_email,
               COALESCE(d.name, c.name) AS provider_name
        FROM wassalni.requests r
        INNER JOIN wassalni.users u ON u.user_id = r.user_id
        LEFT JOIN wassalni.drivers d
            ON r.assigned_type = 'driver' AND d.driver_id = r.assigned_to
        LEFT JOIN wassalni.companies c
            ON r.assigned_type = 'company' AND c.company_id = r.assigned_to
        WHERE r.request_id = $1
        ",
    )
    .bind(request_id)
    .fetch_optional(pool)
    .await?
    .ok_or(RepositoryError::NotFound)
}

/// Move a request to a new lifecycle status.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the request does not exist.
pub async fn set_status(
    pool: &PgPool,
    request_id: RequestId,
    status: RequestStatus,
) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        r"
        UPDATE wassalni.requests
        SET status = $2, updated_at = NOW()
        WHERE request_id = $1
        ",
    )
    .bind(request_id)
    .bind(status)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
