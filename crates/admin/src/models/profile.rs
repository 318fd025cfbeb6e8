//! User profile domain type.

use chrono::{DateTime, Utc};

use wassalni_core::{Email, PhoneNumber, UserId, UserType};

/// A user profile (one per account).
///
/// Carries the role and the moderation flags that the panel mutates.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Profile {
    /// Owning account ID.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    pub phone_number: PhoneNumber,
    /// Contact email (denormalized copy of the account email).
    pub email: Email,
    /// Role of this account.
    pub user_type: UserType,
    /// Whether an admin has approved this account.
    pub is_approved: bool,
    /// Whether this account is currently active.
    pub is_active: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Whether this profile grants access to the admin panel.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.user_type, UserType::Admin)
    }
}
