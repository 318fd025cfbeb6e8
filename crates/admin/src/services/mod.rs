//! Business services for the admin panel.

pub mod auth;
pub mod guard;
pub mod moderation;
pub mod notify;
