//! Database operations for the admin review audit log.

use sqlx::PgPool;

use wassalni_core::{ReviewAction, UserId};

use super::RepositoryError;

/// Parameters for recording a moderation decision.
#[derive(Debug, Clone)]
pub struct NewReview<'a> {
    /// Acting administrator's account.
    pub admin_id: UserId,
    /// Kind of entity reviewed ("company", "driver", "user", "vehicle", ...).
    pub target_type: &'a str,
    /// ID of the reviewed entity in its own table.
    pub target_id: i32,
    /// Decision taken.
    pub action: ReviewAction,
    /// Optional note entered by the administrator.
    pub note: Option<&'a str>,
}

/// Record a moderation decision.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn create(pool: &PgPool, review: NewReview<'_>) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        INSERT INTO wassalni.admin_reviews (admin_id, target_type, target_id, action, note)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(review.admin_id)
    .bind(review.target_type)
    .bind(review.target_id)
    .bind(review.action)
    .bind(review.note)
    .execute(pool)
    .await?;

    Ok(())
}
