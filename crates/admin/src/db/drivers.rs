//! Database operations for drivers.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use wassalni_core::{DriverId, UserId};

use super::RepositoryError;

/// A driver joined with their profile contact details.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DriverWithOwner {
    /// Unique driver ID.
    pub driver_id: DriverId,
    /// Owning account ID. Absent for phone-only registrations that have not
    /// been linked to an account yet.
    pub user_id: Option<UserId>,
    /// Driver display name.
    pub name: String,
    /// Driver contact phone.
    pub phone_number: String,
    /// Vehicle category (sedan, van, bus, ...).
    pub vehicle_type: String,
    /// Vehicle registration plate.
    pub vehicle_plate: String,
    /// Average rating, if any trips were rated.
    pub rating: Option<f64>,
    /// Whether an admin has approved this driver.
    pub is_approved: bool,
    /// Whether the driver is currently active.
    pub is_active: bool,
    /// When the driver registered.
    pub created_at: DateTime<Utc>,
    /// Owner profile email.
    pub owner_email: Option<String>,
}

/// List all drivers, unapproved first, newest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<DriverWithOwner>, RepositoryError> {
    let drivers = sqlx::query_as::<_, DriverWithOwner>(
        r"
        SELECT d.driver_id, d.user_id, d.name, d.phone_number, d.vehicle_type,
               d.vehicle_plate, d.rating, d.is_approved, d.is_active, d.created_at,
               u.email AS owner_email
        FROM wassalni.drivers d
        LEFT JOIN wassalni.users u ON u.user_id = d.user_id
        ORDER BY d.is_approved ASC, d.created_at DESC
        ",
    )
    .fetch_all(pool)
    .await?;

    Ok(drivers)
}

/// Get a driver by ID.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the driver does not exist.
pub async fn get_by_id(pool: &PgPool, driver_id: DriverId) -> Result<DriverWithOwner, RepositoryError> {
    sqlx::query_as::<_, DriverWithOwner>(
        r"
        SELECT d.driver_id, d.user_id, d.name, d.phone_number, d.vehicle_type,
               d.vehicle_plate, d.rating, d.is_approved, d.is_active, d.created_at,
               u.email AS owner_email
        FROM wassalni.drivers d
        LEFT JOIN wassalni.users u ON u.user_id = d.user_id
        WHERE d.driver_id = $1
        ",
    )
    .bind(driver_id)
    .fetch_optional(pool)
    .await?
    .ok_or(RepositoryError::NotFound)
}

/// Approve a driver: mark them approved and active, and sync the profile's
/// approval flag, in one transaction.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the driver does not exist.
pub async fn approve(pool: &PgPool, driver_id: DriverId) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r"
        UPDATE wassalni.drivers
        SET is_approved = TRUE, is_active = TRUE, updated_at = NOW()
        WHERE driver_id = $1
        ",
    )
    .bind(driver_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    sqlx::query(
        r"
        UPDATE wassalni.users
        SET is_approved = TRUE, updated_at = NOW()
        WHERE user_id = (SELECT user_id FROM wassalni.drivers WHERE driver_id = $1)
        ",
    )
    .bind(driver_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Delete a driver row. Rejected driver registrations are removed entirely
/// rather than kept around with cleared flags.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the driver does not exist.
pub async fn delete(pool: &PgPool, driver_id: DriverId) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        r"
        DELETE FROM wassalni.drivers
        WHERE driver_id = $1
        ",
    )
    .bind(driver_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

/// Revoke a previously granted approval: clear both driver flags and the
/// profile's approval flag, in one transaction.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the driver does not exist.
pub async fn revoke(pool: &PgPool, driver_id: DriverId) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r"
        UPDATE wassalni.drivers
        SET is_approved = FALSE, is_active = FALSE, updated_at = NOW()
        WHERE driver_id = $1
        ",
    )
    .bind(driver_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    sqlx::query(
        r"
        UPDATE wassalni.users
        SET is_approved = FALSE, updated_at = NOW()
        WHERE user_id = (SELECT user_id FROM wassalni.drivers WHERE driver_id = $1)
        ",
    )
    .bind(driver_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Set the active flag on a driver and sync the profile, in one transaction.
/// Used for suspend (false) and reactivate (true).
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the driver does not exist.
pub async fn set_active(
    pool: &PgPool,
    driver_id: DriverId,
    is_active: bool,
) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r"
        UPDATE wassalni.drivers
        SET is_active = $2, updated_at = NOW()
        WHERE driver_id = $1
        ",
    )
    .bind(driver_id)
    .bind(is_active)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    sqlx::query(
        r"
        UPDATE wassalni.users
        SET is_active = $2, updated_at = NOW()
        WHERE user_id = (SELECT user_id FROM wassalni.drivers WHERE driver_id = $1)
        ",
    )
    .bind(driver_id)
    .bind(is_active)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}
