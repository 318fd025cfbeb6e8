//! Integration tests for Wassalni.
//!
//! # Running Tests
//!
//! These tests drive a running admin server over HTTP. They are skipped
//! unless `WASSALNI_E2E_BASE_URL` is set, so a plain `cargo test` stays
//! green without infrastructure.
//!
//! ```bash
//! # Start the database and run migrations + seed
//! cargo run -p wassalni-cli -- migrate
//! cargo run -p wassalni-cli -- seed
//!
//! # Start the admin server, then:
//! WASSALNI_E2E_BASE_URL=http://localhost:3002 cargo test -p wassalni-integration-tests
//! ```
//!
//! The seed data provides the accounts the tests log in with:
//! `admin@wassalni.local` and `customer@wassalni.local`.

use reqwest::Client;

/// Base URL of the admin server under test, if configured.
#[must_use]
pub fn e2e_base_url() -> Option<String> {
    std::env::var("WASSALNI_E2E_BASE_URL")
        .ok()
        .filter(|s| !s.is_empty())
}

/// Build an HTTP client with a cookie store and manual redirect handling,
/// so tests can assert on redirect responses.
///
/// # Panics
///
/// Panics if the client cannot be constructed (test-only code).
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in through the login form, storing the session cookie on the client.
///
/// # Panics
///
/// Panics if the request fails (test-only code).
pub async fn login(client: &Client, base_url: &str, email: &str, password: &str) {
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .form(&[("email", email), ("password", password)])
        .send()
        .await
        .expect("login request failed");

    assert!(
        resp.status().is_redirection(),
        "expected login redirect, got {}",
        resp.status()
    );
}
