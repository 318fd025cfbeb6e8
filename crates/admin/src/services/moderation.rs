//! Moderation actions behind the approval screens.
//!
//! Each action mutates the entity's flags (or status), records an
//! `admin_reviews` audit row, and leaves a notification for the affected
//! account. The flag mutation is the action; audit and notification are
//! best-effort side effects that are logged on failure, never fatal.

use sqlx::PgPool;

use wassalni_core::{
    CompanyId, DriverId, RequestId, ReviewAction, TripId, TripStatus, RequestStatus, UserId,
    VehicleId,
};

use crate::db::{self, notifications::NewNotification, reviews::NewReview};
use crate::error::AppError;
use crate::services::notify;

/// Record an audit row; failures are logged and swallowed.
async fn audit(
    pool: &PgPool,
    admin_id: UserId,
    target_type: &str,
    target_id: i32,
    action: ReviewAction,
    note: Option<&str>,
) {
    let review = NewReview {
        admin_id,
        target_type,
        target_id,
        action,
        note,
    };
    if let Err(e) = db::reviews::create(pool, review).await {
        tracing::error!(target_type, target_id, "Failed to record admin review: {e}");
    }
}

/// Insert a notification row; failures are logged and swallowed.
async fn send(pool: &PgPool, notification: NewNotification) {
    let user_id = notification.user_id;
    if let Err(e) = db::notifications::create(pool, notification).await {
        tracing::error!(user_id = %user_id, "Failed to send notification: {e}");
    }
}

/// Treat empty/whitespace-only form input as "no note given".
fn non_empty(note: Option<&str>) -> Option<&str> {
    note.map(str::trim).filter(|s| !s.is_empty())
}

// =============================================================================
// Companies
// =============================================================================

/// Approve a company and its owner profile.
///
/// # Errors
///
/// Returns `AppError::Database` if the lookup or flag update fails.
pub async fn approve_company(
    pool: &PgPool,
    admin_id: UserId,
    company_id: CompanyId,
    note: Option<&str>,
) -> Result<(), AppError> {
    let company = db::companies::get_by_id(pool, company_id).await?;
    db::companies::approve(pool, company_id).await?;

    audit(
        pool,
        admin_id,
        "company",
        company_id.as_i32(),
        ReviewAction::Approve,
        non_empty(note),
    )
    .await;

    if let Some(user_id) = company.user_id {
        send(
            pool,
            notify::account_approved(
                user_id,
                &company.name,
                "You can now start offering services.",
            ),
        )
        .await;
    }

    Ok(())
}

/// Reject a company's registration.
///
/// # Errors
///
/// Returns `AppError::Database` if the lookup or flag update fails.
pub async fn reject_company(
    pool: &PgPool,
    admin_id: UserId,
    company_id: CompanyId,
    reason: Option<&str>,
) -> Result<(), AppError> {
    let company = db::companies::get_by_id(pool, company_id).await?;
    db::companies::reject(pool, company_id).await?;

    audit(
        pool,
        admin_id,
        "company",
        company_id.as_i32(),
        ReviewAction::Reject,
        non_empty(reason),
    )
    .await;

    // Rejection is only announced when the admin gave a reason
    if let (Some(user_id), Some(reason)) = (company.user_id, non_empty(reason)) {
        send(
            pool,
            notify::account_rejected(user_id, &company.name, reason),
        )
        .await;
    }

    Ok(())
}

/// Temporarily suspend an approved company.
///
/// # Errors
///
/// Returns `AppError::Database` if the flag update fails.
pub async fn suspend_company(
    pool: &PgPool,
    admin_id: UserId,
    company_id: CompanyId,
    reason: Option<&str>,
) -> Result<(), AppError> {
    db::companies::set_active(pool, company_id, false).await?;

    let note = non_empty(reason).map(|r| format!("Suspended: {r}"));
    audit(
        pool,
        admin_id,
        "company",
        company_id.as_i32(),
        ReviewAction::Comment,
        note.as_deref(),
    )
    .await;

    Ok(())
}

/// Reactivate a suspended company.
///
/// # Errors
///
/// Returns `AppError::Database` if the flag update fails.
pub async fn activate_company(pool: &PgPool, company_id: CompanyId) -> Result<(), AppError> {
    db::companies::set_active(pool, company_id, true).await?;
    Ok(())
}

/// Permanently revoke a company's approval.
///
/// # Errors
///
/// Returns `AppError::Database` if the flag update fails.
pub async fn revoke_company(pool: &PgPool, company_id: CompanyId) -> Result<(), AppError> {
    db::companies::revoke(pool, company_id).await?;
    Ok(())
}

/// Attach a free-form comment to a company's audit trail.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the comment is empty.
pub async fn comment_company(
    pool: &PgPool,
    admin_id: UserId,
    company_id: CompanyId,
    note: &str,
) -> Result<(), AppError> {
    let note = non_empty(Some(note))
        .ok_or_else(|| AppError::BadRequest("comment cannot be empty".to_string()))?;

    audit(
        pool,
        admin_id,
        "company",
        company_id.as_i32(),
        ReviewAction::Comment,
        Some(note),
    )
    .await;

    Ok(())
}

// =============================================================================
// Drivers
// =============================================================================

/// Approve a driver and their profile.
///
/// # Errors
///
/// Returns `AppError::Database` if the lookup or flag update fails.
pub async fn approve_driver(
    pool: &PgPool,
    admin_id: UserId,
    driver_id: DriverId,
    note: Option<&str>,
) -> Result<(), AppError> {
    let driver = db::drivers::get_by_id(pool, driver_id).await?;
    db::drivers::approve(pool, driver_id).await?;

    audit(
        pool,
        admin_id,
        "driver",
        driver_id.as_i32(),
        ReviewAction::Approve,
        non_empty(note),
    )
    .await;

    if let Some(user_id) = driver.user_id {
        send(
            pool,
            notify::account_approved(
                user_id,
                &driver.name,
                "You can now start accepting requests.",
            ),
        )
        .await;
    }

    Ok(())
}

/// Reject a driver registration. The driver row is deleted outright;
/// junk sign-ups are not kept around.
///
/// # Errors
///
/// Returns `AppError::Database` if the lookup or delete fails.
pub async fn reject_driver(
    pool: &PgPool,
    admin_id: UserId,
    driver_id: DriverId,
    reason: Option<&str>,
) -> Result<(), AppError> {
    let driver = db::drivers::get_by_id(pool, driver_id).await?;
    db::drivers::delete(pool, driver_id).await?;

    audit(
        pool,
        admin_id,
        "driver",
        driver_id.as_i32(),
        ReviewAction::Reject,
        non_empty(reason),
    )
    .await;

    if let (Some(user_id), Some(reason)) = (driver.user_id, non_empty(reason)) {
        send(pool, notify::account_rejected(user_id, &driver.name, reason)).await;
    }

    Ok(())
}

/// Temporarily suspend an approved driver.
///
/// # Errors
///
/// Returns `AppError::Database` if the flag update fails.
pub async fn suspend_driver(
    pool: &PgPool,
    admin_id: UserId,
    driver_id: DriverId,
    reason: Option<&str>,
) -> Result<(), AppError> {
    db::drivers::set_active(pool, driver_id, false).await?;

    let note = non_empty(reason).map(|r| format!("Suspended: {r}"));
    audit(
        pool,
        admin_id,
        "driver",
        driver_id.as_i32(),
        ReviewAction::Comment,
        note.as_deref(),
    )
    .await;

    Ok(())
}

/// Reactivate a suspended driver.
///
/// # Errors
///
/// Returns `AppError::Database` if the flag update fails.
pub async fn activate_driver(pool: &PgPool, driver_id: DriverId) -> Result<(), AppError> {
    db::drivers::set_active(pool, driver_id, true).await?;
    Ok(())
}

/// Permanently revoke a driver's approval.
///
/// # Errors
///
/// Returns `AppError::Database` if the flag update fails.
pub async fn revoke_driver(pool: &PgPool, driver_id: DriverId) -> Result<(), AppError> {
    db::drivers::revoke(pool, driver_id).await?;
    Ok(())
}

// =============================================================================
// Users
// =============================================================================

/// Approve a user profile.
///
/// # Errors
///
/// Returns `AppError::Database` if the flag update fails.
pub async fn approve_user(
    pool: &PgPool,
    admin_id: UserId,
    user_id: UserId,
    note: Option<&str>,
) -> Result<(), AppError> {
    db::users::set_flags(pool, user_id, true, true).await?;

    audit(
        pool,
        admin_id,
        "user",
        user_id.as_i32(),
        ReviewAction::Approve,
        non_empty(note),
    )
    .await;

    Ok(())
}

/// Reject (deactivate) a user profile.
///
/// # Errors
///
/// Returns `AppError::Database` if the flag update fails.
pub async fn reject_user(
    pool: &PgPool,
    admin_id: UserId,
    user_id: UserId,
    reason: Option<&str>,
) -> Result<(), AppError> {
    db::users::set_flags(pool, user_id, false, false).await?;

    audit(
        pool,
        admin_id,
        "user",
        user_id.as_i32(),
        ReviewAction::Reject,
        non_empty(reason),
    )
    .await;

    Ok(())
}

// =============================================================================
// Vehicles
// =============================================================================

/// Approve a vehicle.
///
/// # Errors
///
/// Returns `AppError::Database` if the flag update fails.
pub async fn approve_vehicle(
    pool: &PgPool,
    admin_id: UserId,
    vehicle_id: VehicleId,
    note: Option<&str>,
) -> Result<(), AppError> {
    db::vehicles::set_flags(pool, vehicle_id, true, true).await?;

    audit(
        pool,
        admin_id,
        "vehicle",
        vehicle_id.as_i32(),
        ReviewAction::Approve,
        non_empty(note),
    )
    .await;

    Ok(())
}

/// Reject a vehicle.
///
/// # Errors
///
/// Returns `AppError::Database` if the flag update fails.
pub async fn reject_vehicle(
    pool: &PgPool,
    admin_id: UserId,
    vehicle_id: VehicleId,
    reason: Option<&str>,
) -> Result<(), AppError> {
    db::vehicles::set_flags(pool, vehicle_id, false, false).await?;

    audit(
        pool,
        admin_id,
        "vehicle",
        vehicle_id.as_i32(),
        ReviewAction::Reject,
        non_empty(reason),
    )
    .await;

    Ok(())
}

// =============================================================================
// Trips
// =============================================================================

/// Approve a pending trip, opening it for booking.
///
/// # Errors
///
/// Returns `AppError::Database` if the lookup or status update fails.
pub async fn approve_trip(
    pool: &PgPool,
    admin_id: UserId,
    trip_id: TripId,
) -> Result<(), AppError> {
    let trip = db::trips::get_by_id(pool, trip_id).await?;
    db::trips::set_status(pool, trip_id, TripStatus::Active).await?;

    audit(
        pool,
        admin_id,
        "trip",
        trip_id.as_i32(),
        ReviewAction::Approve,
        None,
    )
    .await;

    if let Some(user_id) = trip.provider_user_id {
        send(
            pool,
            notify::trip_approved(user_id, trip_id.as_i32(), &trip.origin, &trip.destination),
        )
        .await;
    }

    Ok(())
}

/// Reject a trip, cancelling it.
///
/// # Errors
///
/// Returns `AppError::Database` if the lookup or status update fails.
pub async fn reject_trip(
    pool: &PgPool,
    admin_id: UserId,
    trip_id: TripId,
    reason: Option<&str>,
) -> Result<(), AppError> {
    let trip = db::trips::get_by_id(pool, trip_id).await?;
    db::trips::set_status(pool, trip_id, TripStatus::Cancelled).await?;

    audit(
        pool,
        admin_id,
        "trip",
        trip_id.as_i32(),
        ReviewAction::Reject,
        non_empty(reason),
    )
    .await;

    if let (Some(user_id), Some(reason)) = (trip.provider_user_id, non_empty(reason)) {
        send(
            pool,
            notify::trip_rejected(
                user_id,
                trip_id.as_i32(),
                &trip.origin,
                &trip.destination,
                reason,
            ),
        )
        .await;
    }

    Ok(())
}

// =============================================================================
// Requests
// =============================================================================

/// Accept a customer trip request.
///
/// # Errors
///
/// Returns `AppError::Database` if the lookup or status update fails.
pub async fn approve_request(
    pool: &PgPool,
    admin_id: UserId,
    request_id: RequestId,
) -> Result<(), AppError> {
    let request = db::requests::get_by_id(pool, request_id).await?;
    db::requests::set_status(pool, request_id, RequestStatus::Accepted).await?;

    audit(
        pool,
        admin_id,
        "request",
        request_id.as_i32(),
        ReviewAction::Approve,
        None,
    )
    .await;

    send(
        pool,
        notify::request_approved(
            request.user_id,
            request_id.as_i32(),
            &request.origin,
            &request.destination,
        ),
    )
    .await;

    Ok(())
}

/// Reject a customer trip request.
///
/// # Errors
///
/// Returns `AppError::Database` if the lookup or status update fails.
pub async fn reject_request(
    pool: &PgPool,
    admin_id: UserId,
    request_id: RequestId,
    reason: Option<&str>,
) -> Result<(), AppError> {
    let request = db::requests::get_by_id(pool, request_id).await?;
    db::requests::set_status(pool, request_id, RequestStatus::Rejected).await?;

    audit(
        pool,
        admin_id,
        "request",
        request_id.as_i32(),
        ReviewAction::Reject,
        non_empty(reason),
    )
    .await;

    if let Some(reason) = non_empty(reason) {
        send(
            pool,
            notify::request_rejected(
                request.user_id,
                request_id.as_i32(),
                &request.origin,
                &request.destination,
                reason,
            ),
        )
        .await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_filters_blank_notes() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some("  looks fine  ")), Some("looks fine"));
    }
}
