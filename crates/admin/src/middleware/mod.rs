//! HTTP middleware stack for the admin panel.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with `PostgreSQL` store)
//!
//! Route protection is handled by extractors ([`auth::RequireAdmin`]) rather
//! than a router-level layer, so each handler states its requirement.

pub mod auth;
pub mod session;

pub use auth::{OptionalUser, RequireAdmin, clear_current_user, set_current_user};
pub use session::create_session_layer;
