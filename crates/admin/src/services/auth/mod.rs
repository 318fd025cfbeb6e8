//! Authentication service.
//!
//! Password authentication against the local `account` table, plus the
//! registration rules used by seeding and tooling. Credential checks are a
//! single attempt; nothing here retries.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use wassalni_core::{Email, PhoneNumber, UserType};

use crate::db::RepositoryError;
use crate::db::accounts::{self, Account, NewAccount, NewProvider};
use crate::models::CurrentUser;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Login with email and password.
///
/// On success returns the identity to store in the session. On failure the
/// error message is surfaced to the login page verbatim; the caller decides
/// whether to ask the user to try again.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the email is unknown or the
/// password is wrong.
pub async fn sign_in(pool: &PgPool, email: &str, password: &str) -> Result<CurrentUser, AuthError> {
    // Validate email format
    let email = Email::parse(email)?;

    // Get account with password hash
    let (account, password_hash) = accounts::get_password_hash(pool, &email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    // Verify password
    verify_password(password, &password_hash)?;

    Ok(CurrentUser {
        id: account.id,
        email: account.email,
    })
}

/// Register a new account with its profile.
///
/// Customers are approved automatically; drivers and companies start
/// unapproved and wait for admin review (their provider rows are created
/// inactive).
///
/// # Errors
///
/// Returns `AuthError::InvalidEmail` / `AuthError::InvalidPhoneNumber` on
/// malformed input, `AuthError::WeakPassword` if the password doesn't meet
/// requirements, and `AuthError::UserAlreadyExists` if the email is taken.
pub async fn register(
    pool: &PgPool,
    email: &str,
    password: &str,
    name: &str,
    phone_number: &str,
    user_type: UserType,
    provider: Option<NewProvider>,
) -> Result<Account, AuthError> {
    let email = Email::parse(email)?;
    let phone_number = PhoneNumber::parse(phone_number)?;

    validate_password(password)?;
    let password_hash = hash_password(password)?;

    let account = accounts::create(
        pool,
        NewAccount {
            email,
            password_hash,
            name: name.to_owned(),
            phone_number,
            user_type,
        },
        provider,
    )
    .await
    .map_err(|e| match e {
        RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
        other => AuthError::Repository(other),
    })?;

    Ok(account)
}

/// Validate password requirements.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` if the password is too short.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password with argon2.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AuthError::PasswordHash)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored argon2 hash.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the password does not match.
fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(password_hash).map_err(|_| AuthError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = hash_password("correct horse battery").expect("hashing succeeds");
        assert!(verify_password("correct horse battery", &hash).is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("correct horse battery").expect("hashing succeeds");
        assert!(matches!(
            verify_password("wrong horse battery", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same password").expect("hashing succeeds");
        let b = hash_password("same password").expect("hashing succeeds");
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password("long enough").is_ok());
    }
}
