//! Role and status enums for platform entities.
//!
//! All enums map to Postgres enum types in the `wassalni` schema (with the
//! `postgres` feature) and serialize as snake_case strings.

use serde::{Deserialize, Serialize};

/// Account role stored on a user profile.
///
/// `Customer` accounts are approved automatically at registration; every
/// other role starts unapproved and goes through admin review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "wassalni.user_type", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Rider booking trips.
    Customer,
    /// Individual driver offering trips.
    Driver,
    /// Transport/tourism company offering trips.
    Company,
    /// Platform administrator.
    Admin,
}

impl UserType {
    /// Whether registration auto-approves this role.
    #[must_use]
    pub const fn auto_approved(self) -> bool {
        matches!(self, Self::Customer)
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Driver => write!(f, "driver"),
            Self::Company => write!(f, "company"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "driver" => Ok(Self::Driver),
            "company" => Ok(Self::Company),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid user type: {s}")),
        }
    }
}

/// Which kind of provider a trip or request is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "wassalni.provider_type", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    Driver,
    Company,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Driver => write!(f, "driver"),
            Self::Company => write!(f, "company"),
        }
    }
}

/// Line of business for a registered company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "wassalni.company_type", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
    Tourism,
    Transport,
    Both,
}

impl std::fmt::Display for CompanyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tourism => write!(f, "tourism"),
            Self::Transport => write!(f, "transport"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// Lifecycle of a scheduled trip.
///
/// Pending trips are awaiting admin review; approval moves them to `Active`,
/// rejection to `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "wassalni.trip_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Lifecycle of a customer trip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "wassalni.request_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Action recorded in the admin review audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "wassalni.review_action", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Approve,
    Reject,
    Comment,
}

impl std::fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approve => write!(f, "approve"),
            Self::Reject => write!(f, "reject"),
            Self::Comment => write!(f, "comment"),
        }
    }
}

/// Category of a notification row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "wassalni.notification_type", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// Account or trip approval.
    Approval,
    /// Account or trip rejection.
    Rejection,
    /// Trip request accepted.
    RequestApproved,
    /// Trip request rejected.
    RequestRejected,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approval => write!(f, "approval"),
            Self::Rejection => write!(f, "rejection"),
            Self::RequestApproved => write!(f, "request_approved"),
            Self::RequestRejected => write!(f, "request_rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_user_type_roundtrip() {
        for ty in [
            UserType::Customer,
            UserType::Driver,
            UserType::Company,
            UserType::Admin,
        ] {
            assert_eq!(UserType::from_str(&ty.to_string()), Ok(ty));
        }
    }

    #[test]
    fn test_user_type_rejects_unknown() {
        assert!(UserType::from_str("superuser").is_err());
    }

    #[test]
    fn test_only_customers_auto_approved() {
        assert!(UserType::Customer.auto_approved());
        assert!(!UserType::Driver.auto_approved());
        assert!(!UserType::Company.auto_approved());
        assert!(!UserType::Admin.auto_approved());
    }

    #[test]
    fn test_status_defaults_are_pending() {
        assert_eq!(TripStatus::default(), TripStatus::Pending);
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
    }
}
