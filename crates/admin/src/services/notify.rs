//! Notification composition for moderation actions.
//!
//! Builds the `notifications` rows that admin decisions leave behind for
//! the rider/provider apps. Sending is best-effort: a failed insert is
//! logged by the caller, never fatal to the action itself.

use wassalni_core::{NotificationType, UserId};

use crate::db::notifications::NewNotification;

/// Account approval notification (company or driver).
#[must_use]
pub fn account_approved(user_id: UserId, name: &str, role_line: &str) -> NewNotification {
    NewNotification {
        user_id,
        title: "Your account has been approved".to_string(),
        message: format!("Welcome {name}, your account has been approved. {role_line}"),
        notification_type: NotificationType::Approval,
        related_id: None,
    }
}

/// Account rejection notification with the admin's reason.
#[must_use]
pub fn account_rejected(user_id: UserId, name: &str, reason: &str) -> NewNotification {
    NewNotification {
        user_id,
        title: "Registration request rejected".to_string(),
        message: format!("Sorry {name}, your registration was rejected. Reason: {reason}"),
        notification_type: NotificationType::Rejection,
        related_id: None,
    }
}

/// Trip approval notification to the provider's owning account.
#[must_use]
pub fn trip_approved(
    user_id: UserId,
    trip_id: i32,
    origin: &str,
    destination: &str,
) -> NewNotification {
    NewNotification {
        user_id,
        title: "Trip approved".to_string(),
        message: format!(
            "Your trip from {origin} to {destination} has been approved. The trip is now open for booking."
        ),
        notification_type: NotificationType::Approval,
        related_id: Some(trip_id),
    }
}

/// Trip rejection notification with the admin's reason.
#[must_use]
pub fn trip_rejected(
    user_id: UserId,
    trip_id: i32,
    origin: &str,
    destination: &str,
    reason: &str,
) -> NewNotification {
    NewNotification {
        user_id,
        title: "Trip rejected".to_string(),
        message: format!(
            "Your trip from {origin} to {destination} was rejected. Reason: {reason}"
        ),
        notification_type: NotificationType::Rejection,
        related_id: Some(trip_id),
    }
}

/// Request acceptance notification to the requesting customer.
#[must_use]
pub fn request_approved(
    user_id: UserId,
    request_id: i32,
    origin: &str,
    destination: &str,
) -> NewNotification {
    NewNotification {
        user_id,
        title: "Your request has been approved".to_string(),
        message: format!("Your trip request from {origin} to {destination} has been approved."),
        notification_type: NotificationType::RequestApproved,
        related_id: Some(request_id),
    }
}

/// Request rejection notification with the admin's reason.
#[must_use]
pub fn request_rejected(
    user_id: UserId,
    request_id: i32,
    origin: &str,
    destination: &str,
    reason: &str,
) -> NewNotification {
    NewNotification {
        user_id,
        title: "Your request was rejected".to_string(),
        message: format!(
            "Your trip request from {origin} to {destination} was rejected. Reason: {reason}"
        ),
        notification_type: NotificationType::RequestRejected,
        related_id: Some(request_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_approved_mentions_name() {
        let n = account_approved(
            UserId::new(5),
            "Basra Lines",
            "You can now start offering services.",
        );
        assert_eq!(n.notification_type, NotificationType::Approval);
        assert!(n.message.contains("Basra Lines"));
        assert!(n.related_id.is_none());
    }

    #[test]
    fn test_rejection_carries_reason() {
        let n = account_rejected(UserId::new(5), "Basra Lines", "missing license scan");
        assert_eq!(n.notification_type, NotificationType::Rejection);
        assert!(n.message.contains("missing license scan"));
    }

    #[test]
    fn test_trip_notifications_link_the_trip() {
        let approved = trip_approved(UserId::new(2), 17, "Baghdad", "Basra");
        assert_eq!(approved.related_id, Some(17));
        assert!(approved.message.contains("Baghdad"));
        assert!(approved.message.contains("Basra"));

        let rejected = trip_rejected(UserId::new(2), 17, "Baghdad", "Basra", "no vehicle");
        assert_eq!(rejected.related_id, Some(17));
        assert_eq!(rejected.notification_type, NotificationType::Rejection);
    }

    #[test]
    fn test_request_notifications_use_request_types() {
        let approved = request_approved(UserId::new(9), 3, "Erbil", "Mosul");
        assert_eq!(approved.notification_type, NotificationType::RequestApproved);

        let rejected = request_rejected(UserId::new(9), 3, "Erbil", "Mosul", "no providers");
        assert_eq!(rejected.notification_type, NotificationType::RequestRejected);
        assert!(rejected.message.contains("no providers"));
    }
}
