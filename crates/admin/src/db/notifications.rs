//! Database operations for user notifications.
//!
//! Notifications are the side-effect channel of admin actions: rows are
//! written here and the rider/provider apps display them.

use sqlx::PgPool;

use wassalni_core::{NotificationType, UserId};

use super::RepositoryError;

/// Parameters for creating a notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    /// Recipient account.
    pub user_id: UserId,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Category.
    pub notification_type: NotificationType,
    /// Related entity (trip/request) when applicable.
    pub related_id: Option<i32>,
}

/// Insert a notification row.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the insert fails.
pub async fn create(pool: &PgPool, notification: NewNotification) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        INSERT INTO wassalni.notifications (user_id, title, message, notification_type, related_id)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(notification.user_id)
    .bind(&notification.title)
    .bind(&notification.message)
    .bind(notification.notification_type)
    .bind(notification.related_id)
    .execute(pool)
    .await?;

    Ok(())
}
