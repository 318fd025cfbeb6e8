//! Session-related types for admin authentication.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use wassalni_core::{Email, UserId};

/// Session-stored identity.
///
/// Minimal data stored in the session to identify the logged-in account.
/// The role lives on the [`crate::models::Profile`], which is looked up per
/// request so role changes take effect without re-login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Account database ID.
    pub id: UserId,
    /// Account email address.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in identity.
    pub const CURRENT_USER: &str = "current_user";
}
