//! Access decision for protected views.
//!
//! A small state machine over a snapshot of the session: is it still
//! resolving, who is logged in, and what does their profile say. The
//! [`crate::middleware::RequireAdmin`] extractor builds the snapshot and
//! maps the decision onto an HTTP response.

use crate::models::{CurrentUser, Profile};

/// Outcome of evaluating a protected view request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session state has not settled yet; render a wait indicator, no content.
    Loading,
    /// No identity; send the client to the login view, replacing history.
    Redirect,
    /// Identity present but not an administrator; render the fixed denial
    /// message, no content, no redirect.
    Denied,
    /// Render the protected content.
    Allowed,
}

/// Snapshot of session state at evaluation time.
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    /// True while identity/profile resolution is still in flight.
    pub resolving: bool,
    /// The logged-in identity, if any.
    pub identity: Option<&'a CurrentUser>,
    /// The identity's profile, if it has been found.
    pub profile: Option<&'a Profile>,
}

/// Decide whether a protected view may render.
///
/// Precedence is fixed: resolving wins over everything, a missing identity
/// redirects, and only a present profile with the admin role is allowed
/// through. An identity without a profile is denied rather than allowed:
/// a profile row that is missing (or failed to load) cannot attest the
/// admin role, so the guard fails closed.
#[must_use]
pub fn evaluate(snapshot: &SessionSnapshot<'_>) -> Access {
    if snapshot.resolving {
        return Access::Loading;
    }

    if snapshot.identity.is_none() {
        return Access::Redirect;
    }

    match snapshot.profile {
        Some(profile) if profile.is_admin() => Access::Allowed,
        _ => Access::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wassalni_core::{Email, PhoneNumber, UserId, UserType};

    fn identity() -> CurrentUser {
        CurrentUser {
            id: UserId::new(1),
            email: Email::parse("admin@wassalni.app").expect("valid email"),
        }
    }

    fn profile(user_type: UserType) -> Profile {
        let now = Utc::now();
        Profile {
            user_id: UserId::new(1),
            name: "Test User".to_string(),
            phone_number: PhoneNumber::parse("07701234567").expect("valid phone"),
            email: Email::parse("admin@wassalni.app").expect("valid email"),
            user_type,
            is_approved: true,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_resolving_wins_over_everything() {
        let user = identity();
        let admin = profile(UserType::Admin);

        // Even a fully resolved admin session shows the wait state while
        // resolution is marked in flight.
        let snapshot = SessionSnapshot {
            resolving: true,
            identity: Some(&user),
            profile: Some(&admin),
        };
        assert_eq!(evaluate(&snapshot), Access::Loading);

        let snapshot = SessionSnapshot {
            resolving: true,
            identity: None,
            profile: None,
        };
        assert_eq!(evaluate(&snapshot), Access::Loading);
    }

    #[test]
    fn test_no_identity_always_redirects() {
        let snapshot = SessionSnapshot {
            resolving: false,
            identity: None,
            profile: None,
        };
        assert_eq!(evaluate(&snapshot), Access::Redirect);

        // A stray profile without an identity still redirects.
        let admin = profile(UserType::Admin);
        let snapshot = SessionSnapshot {
            resolving: false,
            identity: None,
            profile: Some(&admin),
        };
        assert_eq!(evaluate(&snapshot), Access::Redirect);
    }

    #[test]
    fn test_admin_profile_is_allowed() {
        let user = identity();
        let admin = profile(UserType::Admin);
        let snapshot = SessionSnapshot {
            resolving: false,
            identity: Some(&user),
            profile: Some(&admin),
        };
        assert_eq!(evaluate(&snapshot), Access::Allowed);
    }

    #[test]
    fn test_non_admin_profiles_are_denied() {
        let user = identity();
        for user_type in [UserType::Customer, UserType::Driver, UserType::Company] {
            let p = profile(user_type);
            let snapshot = SessionSnapshot {
                resolving: false,
                identity: Some(&user),
                profile: Some(&p),
            };
            assert_eq!(evaluate(&snapshot), Access::Denied, "{user_type} should be denied");
        }
    }

    #[test]
    fn test_identity_without_profile_is_denied() {
        // The fail-closed case: a logged-in account whose profile is missing
        // or failed to load must not see admin content.
        let user = identity();
        let snapshot = SessionSnapshot {
            resolving: false,
            identity: Some(&user),
            profile: None,
        };
        assert_eq!(evaluate(&snapshot), Access::Denied);
    }
}
