//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! wassalni-cli admin create -e admin@example.com -n "Admin Name" --phone 07701234567
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string

use std::io::{BufRead, Write};

use sqlx::PgPool;
use thiserror::Error;

use wassalni_admin::services::auth::{self, AuthError};
use wassalni_core::UserType;

/// Errors that can occur during admin account operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Registration failed.
    #[error("Registration error: {0}")]
    Auth(#[from] AuthError),

    /// Reading the password from stdin failed.
    #[error("Failed to read password: {0}")]
    Io(#[from] std::io::Error),
}

/// Create an admin account with an approved profile.
///
/// The password is taken from the `-p` flag or prompted on stdin.
///
/// # Errors
///
/// Returns `AdminError` if the database is unreachable, the input is
/// invalid, or the email is already registered.
pub async fn create(
    email: &str,
    name: &str,
    phone: &str,
    password: Option<&str>,
) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .map_err(|_| AdminError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    let password = match password {
        Some(p) => p.to_owned(),
        None => prompt_password()?,
    };

    let pool = PgPool::connect(&database_url).await?;

    let account = auth::register(&pool, email, &password, name, phone, UserType::Admin, None).await?;

    // Admin profiles don't go through the review queue; flip the flags the
    // panel would otherwise set
    wassalni_admin::db::users::set_flags(&pool, account.id, true, true)
        .await
        .map_err(AuthError::Repository)?;

    tracing::info!(account_id = %account.id, "Admin account created for {email}");
    Ok(())
}

/// Prompt for a password on stdin.
#[allow(clippy::print_stdout)]
fn prompt_password() -> Result<String, std::io::Error> {
    print!("Password: ");
    std::io::stdout().flush()?;

    let mut password = String::new();
    std::io::stdin().lock().read_line(&mut password)?;
    Ok(password.trim_end_matches(['\r', '\n']).to_owned())
}
