//! Database operations for companies.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use wassalni_core::{CompanyId, CompanyType, UserId};

use super::RepositoryError;

/// A company joined with its owner's profile contact details.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanyWithOwner {
    /// Unique company ID.
    pub company_id: CompanyId,
    /// Owning account ID. Absent for phone-only registrations that have not
    /// been linked to an account yet.
    pub user_id: Option<UserId>,
    /// Company display name.
    pub name: String,
    /// Company contact phone.
    pub phone_number: String,
    /// Line of business.
    pub company_type: CompanyType,
    /// Free-form contact details captured at registration.
    pub contact_info: Option<JsonValue>,
    /// Whether an admin has approved this company.
    pub is_approved: bool,
    /// Whether the company is currently active.
    pub is_active: bool,
    /// When the company registered.
    pub created_at: DateTime<Utc>,
    /// Owner profile phone (if the profile row exists).
    pub owner_phone: Option<String>,
    /// Owner profile email.
    pub owner_email: Option<String>,
}

/// List all companies, unapproved first, newest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<CompanyWithOwner>, RepositoryError> {
    let companies = sqlx::query_as::<_, CompanyWithOwner>(
        r"
        SELECT c.company_id, c.user_id, c.name, c.phone_number, c.company_type,
               c.contact_info, c.is_approved, c.is_active, c.created_at,
               u.phone_number AS owner_phone, u.email AS owner_email
        FROM wassalni.companies c
        LEFT JOIN wassalni.users u ON u.user_id = c.user_id
        ORDER BY c.is_approved ASC, c.created_at DESC
        ",
    )
    .fetch_all(pool)
    .await?;

    Ok(companies)
}

/// Get a company by ID.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the company does not exist.
pub async fn get_by_id(
    pool: &PgPool,
    company_id: CompanyId,
) -> Result<CompanyWithOwner, RepositoryError> {
    sqlx::query_as::<_, CompanyWithOwner>(
        r"
        SELECT c.company_id, c.user_id, c.name, c.phone_number, c.company_type,
               c.contact_info, c.is_approved, c.is_active, c.created_at,
               u.phone_number AS owner_phone, u.email AS owner_email
        FROM wassalni.companies c
        LEFT JOIN wassalni.users u ON u.user_id = c.user_id
        WHERE c.company_id = $1
        ",
    )
    .bind(company_id)
    .fetch_optional(pool)
    .await?
    .ok_or(RepositoryError::NotFound)
}

/// Approve a company: mark it approved and active, and sync the owner
/// profile's approval flag, in one transaction.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the company does not exist.
pub async fn approve(pool: &PgPool, company_id: CompanyId) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r"
        UPDATE wassalni.companies
        SET is_approved = TRUE, is_active = TRUE, updated_at = NOW()
        WHERE company_id = $1
        ",
    )
    .bind(company_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    sqlx::query(
        r"
        UPDATE wassalni.users
        SET is_approved = TRUE, updated_at = NOW()
        WHERE user_id = (SELECT user_id FROM wassalni.companies WHERE company_id = $1)
        ",
    )
    .bind(company_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Reject a company: clear both flags. The owner profile is left untouched
/// so the account can re-apply.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the company does not exist.
pub async fn reject(pool: &PgPool, company_id: CompanyId) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        r"
        UPDATE wassalni.companies
        SET is_approved = FALSE, is_active = FALSE, updated_at = NOW()
        WHERE company_id = $1
        ",
    )
    .bind(company_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

/// Revoke a previously granted approval: clear both company flags and the
/// owner profile's approval flag, in one transaction.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the company does not exist.
pub async fn revoke(pool: &PgPool, company_id: CompanyId) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r"
        UPDATE wassalni.companies
        SET is_approved = FALSE, is_active = FALSE, updated_at = NOW()
        WHERE company_id = $1
        ",
    )
    .bind(company_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    sqlx::query(
        r"
        UPDATE wassalni.users
        SET is_approved = FALSE, updated_at = NOW()
        WHERE user_id = (SELECT user_id FROM wassalni.companies WHERE company_id = $1)
        ",
    )
    .bind(company_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Set the active flag on a company and sync the owner profile, in one
/// transaction. Used for suspend (false) and reactivate (true).
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the company does not exist.
pub async fn set_active(
    pool: &PgPool,
    company_id: CompanyId,
    is_active: bool,
) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r"
        UPDATE wassalni.companies
        SET is_active = $2, updated_at = NOW()
        WHERE company_id = $1
        ",
    )
    .bind(company_id)
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
        WHERE user_id = (SELECT user_id FROM wassalni.companies WHERE company_id = $1)
        ",
    )
    .bind(company_id)
    .bind(is_active)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}
