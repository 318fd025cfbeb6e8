//! Database operations for vehicles.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use wassalni_core::{CompanyId, DriverId, VehicleId};

use super::RepositoryError;

/// A vehicle joined with its owning driver/company names.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VehicleWithOwner {
    /// Unique vehicle ID.
    pub vehicle_id: VehicleId,
    /// Owning driver, if driver-owned.
    pub driver_id: Option<DriverId>,
    /// Owning company, if company-owned.
    pub company_id: Option<CompanyId>,
    /// Vehicle model description.
    pub model: String,
    /// Registration plate.
    pub plate_number: String,
    /// Passenger capacity.
    pub capacity: i32,
    /// Whether an admin has approved this vehicle.
    pub is_approved: bool,
    /// Whether the vehicle is in service.
    pub is_active: bool,
    /// When the vehicle was registered.
    pub created_at: DateTime<Utc>,
    /// Owning driver's name.
    pub driver_name: Option<String>,
    /// Owning driver's phone.
    pub driver_phone: Option<String>,
    /// Owning company's name.
    pub company_name: Option<String>,
}

/// List all vehicles, newest first, with owner names resolved.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<VehicleWithOwner>, RepositoryError> {
    let vehicles = sqlx::query_as::<_, VehicleWithOwner>(
        r"
        SELECT v.vehicle_id, v.driver_id, v.company_id, v.model, v.plate_number,
               v.capacity, v.is_approved, v.is_active, v.created_at,
               d.name AS driver_name, d.phone_number AS driver_phone,
               c.name AS company_name
        FROM wassalni.vehicles v
        LEFT JOIN wassalni.drivers d ON d.driver_id = v.driver_id
        LEFT JOIN wassalni.companies c ON c.company_id = v.company_id
        ORDER BY v.created_at DESC
        ",
    )
    .fetch_all(pool)
    .await?;

    Ok(vehicles)
}

/// Set both moderation flags on a vehicle.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the vehicle does not exist.
pub async fn set_flags(
    pool: &PgPool,
    vehicle_id: VehicleId,
    is_approved: bool,
    is_active: bool,
) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        r"
        UPDATE wassalni.vehicles
        SET is_approved = $2, is_active = $3
        WHERE vehicle_id = $1
        ",
    )
    .bind(vehicle_id)
    .bind(is_approved)
    .bind(is_active)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
