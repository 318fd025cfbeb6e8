//! Database operations for user profiles.
//!
//! The profile lookup here is the panel's single source of role truth: the
//! route guard calls [`get_profile`] on every protected request.

use sqlx::PgPool;

use wassalni_core::UserId;

use super::RepositoryError;
use crate::models::Profile;

/// Look up the profile for an account.
///
/// Returns `None` both when no profile row exists and when the lookup
/// fails; errors are logged, never propagated. Callers must treat `None`
/// as "no profile yet", not as a hard failure.
pub async fn get_profile(pool: &PgPool, user_id: UserId) -> Option<Profile> {
    let result = sqlx::query_as::<_, Profile>(
        r"
        SELECT user_id, name, phone_number, email, user_type,
               is_approved, is_active, created_at, updated_at
        FROM wassalni.users
        WHERE user_id = $1
        ",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!(user_id = %user_id, "Failed to load profile: {e}");
            None
        }
    }
}

/// List all profiles, unapproved first, newest first.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Profile>, RepositoryError> {
    let profiles = sqlx::query_as::<_, Profile>(
        r"
        SELECT user_id, name, phone_number, email, user_type,
               is_approved, is_active, created_at, updated_at
        FROM wassalni.users
        ORDER BY is_approved ASC, created_at DESC
        ",
    )
    .fetch_all(pool)
    .await?;

    Ok(profiles)
}

/// Set both moderation flags on a profile.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no profile exists for the account.
pub async fn set_flags(
    pool: &PgPool,
    user_id: UserId,
    is_approved: bool,
    is_active: bool,
) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        r"
        UPDATE wassalni.users
        SET is_approved = $2, is_active = $3, updated_at = NOW()
        WHERE user_id = $1
        ",
    )
    .bind(user_id)
    .bind(is_approved)
    .bind(is_active)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

/// Set only the approval flag on a profile.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the update fails.
pub async fn set_approved(
    pool: &PgPool,
    user_id: UserId,
    is_approved: bool,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        UPDATE wassalni.users
        SET is_approved = $2, updated_at = NOW()
        WHERE user_id = $1
        ",
    )
    .bind(user_id)
    .bind(is_approved)
    .execute(pool)
    .await?;

    Ok(())
}

/// Set only the active flag on a profile.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the update fails.
pub async fn set_active(
    pool: &PgPool,
    user_id: UserId,
    is_active: bool,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        UPDATE wassalni.users
        SET is_active = $2, updated_at = NOW()
        WHERE user_id = $1
        ",
    )
    .bind(user_id)
    .bind(is_active)
    .execute(pool)
    .await?;

    Ok(())
}
