//! Database operations for authentication accounts.
//!
//! Accounts are the identity half of the data model: an email and an argon2
//! password hash. Everything role-related lives on the profile (`users`).

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use wassalni_core::{CompanyType, Email, PhoneNumber, UserId, UserType};

use super::RepositoryError;

/// An authentication account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID.
    pub id: UserId,
    /// Login email, unique.
    pub email: Email,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Provider details captured at registration.
#[derive(Debug, Clone)]
pub enum NewProvider {
    /// Individual driver with their vehicle details.
    Driver {
        vehicle_type: String,
        vehicle_plate: String,
    },
    /// Company with its line of business and free-form contact info.
    Company {
        company_type: CompanyType,
        contact_info: JsonValue,
    },
}

/// Parameters for creating an account with its profile.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: Email,
    pub password_hash: String,
    pub name: String,
    pub phone_number: PhoneNumber,
    pub user_type: UserType,
}

/// Get an account by email.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get_by_email(pool: &PgPool, email: &Email) -> Result<Option<Account>, RepositoryError> {
    let account = sqlx::query_as::<_, Account>(
        r"
        SELECT id, email, created_at
        FROM wassalni.account
        WHERE email = $1
        ",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Get an account together with its password hash, for credential checks.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get_password_hash(
    pool: &PgPool,
    email: &Email,
) -> Result<Option<(Account, String)>, RepositoryError> {
    let row = sqlx::query_as::<_, AccountWithHashRow>(
        r"
        SELECT id, email, password_hash, created_at
        FROM wassalni.account
        WHERE email = $1
        ",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| {
        (
            Account {
                id: r.id,
                email: r.email,
                created_at: r.created_at,
            },
            r.password_hash,
        )
    }))
}

#[derive(sqlx::FromRow)]
struct AccountWithHashRow {
    id: UserId,
    email: Email,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Create an account, its profile, and (for providers) the provider row,
/// in a single transaction.
///
/// The profile's `is_approved` flag follows the registration rule: only
/// `customer` accounts start approved.
///
/// # Errors
///
/// Returns `RepositoryError::Conflict` if the email already exists.
/// Returns `RepositoryError::Database` for other database errors.
pub async fn create(
    pool: &PgPool,
    new: NewAccount,
    provider: Option<NewProvider>,
) -> Result<Account, RepositoryError> {
    let mut tx = pool.begin().await?;

    let account = sqlx::query_as::<_, Account>(
        r"
        INSERT INTO wassalni.account (email, password_hash)
        VALUES ($1, $2)
        RETURNING id, email, created_at
        ",
    )
    .bind(&new.email)
    .bind(&new.password_hash)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return RepositoryError::Conflict("email already exists".to_owned());
        }
        RepositoryError::Database(e)
    })?;

    sqlx::query(
        r"
        INSERT INTO wassalni.users (user_id, name, phone_number, email, user_type, is_approved)
        VALUES ($1, $2, $3, $4, $5, $6)
        ",
    )
    .bind(account.id)
    .bind(&new.name)
    .bind(&new.phone_number)
    .bind(&new.email)
    .bind(new.user_type)
    .bind(new.user_type.auto_approved())
    .execute(&mut *tx)
    .await?;

    match provider {
        Some(NewProvider::Driver {
            vehicle_type,
            vehicle_plate,
        }) => {
            sqlx::query(
                r"
                INSERT INTO wassalni.drivers
                    (user_id, name, phone_number, vehicle_type, vehicle_plate, is_approved, is_active)
                VALUES ($1, $2, $3, $4, $5, FALSE, FALSE)
                ",
            )
            .bind(account.id)
            .bind(&new.name)
            .bind(&new.phone_number)
            .bind(&vehicle_type)
            .bind(&vehicle_plate)
            .execute(&mut *tx)
            .await?;
        }
        Some(NewProvider::Company {
            company_type,
            contact_info,
        }) => {
            sqlx::query(
                r"
                INSERT INTO wassalni.companies
                    (user_id, name, phone_number, company_type, contact_info, is_approved, is_active)
                VALUES ($1, $2, $3, $4, $5, FALSE, FALSE)
                ",
            )
            .bind(account.id)
            .bind(&new.name)
            .bind(&new.phone_number)
            .bind(company_type)
            .bind(&contact_info)
            .execute(&mut *tx)
            .await?;
        }
        None => {}
    }

    tx.commit().await?;

    Ok(account)
}
