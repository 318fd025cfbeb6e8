//! End-to-end tests for the approval screens.
//!
//! Skipped unless `WASSALNI_E2E_BASE_URL` points at a running, seeded
//! admin server.

use reqwest::{Client, StatusCode};

use wassalni_integration_tests::{client, e2e_base_url, login};

async fn admin_client(base_url: &str) -> Client {
    let client = client();
    login(&client, base_url, "admin@wassalni.local", "admin-dev-password").await;
    client
}

#[tokio::test]
async fn test_approvals_tabs_render() {
    let Some(base_url) = e2e_base_url() else {
        return; // skipped: no server configured
    };
    let client = admin_client(&base_url).await;

    for tab in ["companies", "drivers", "users", "vehicles", "trips", "requests"] {
        let resp = client
            .get(format!("{base_url}/approvals?tab={tab}"))
            .send()
            .await
            .expect("approvals request failed");
        assert_eq!(resp.status(), StatusCode::OK, "tab {tab} did not render");

        let body = resp.text().await.expect("body");
        assert!(body.contains("Approval management"), "tab {tab} missing header");
    }
}

#[tokio::test]
async fn test_unknown_tab_falls_back_to_companies() {
    let Some(base_url) = e2e_base_url() else {
        return; // skipped: no server configured
    };
    let client = admin_client(&base_url).await;

    let resp = client
        .get(format!("{base_url}/approvals?tab=nonsense"))
        .send()
        .await
        .expect("approvals request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("body");
    assert!(body.contains("companies"));
}

#[tokio::test]
async fn test_actions_on_missing_entities_return_not_found() {
    let Some(base_url) = e2e_base_url() else {
        return; // skipped: no server configured
    };
    let client = admin_client(&base_url).await;

    let resp = client
        .post(format!("{base_url}/approvals/companies/999999/approve"))
        .form(&[("note", "")])
        .send()
        .await
        .expect("approve request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .post(format!("{base_url}/approvals/trips/999999/reject"))
        .form(&[("reason", "no such trip")])
        .send()
        .await
        .expect("reject request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_actions_require_authentication() {
    let Some(base_url) = e2e_base_url() else {
        return; // skipped: no server configured
    };
    // Anonymous client: no login
    let client = client();

    let resp = client
        .post(format!("{base_url}/approvals/companies/1/approve"))
        .form(&[("note", "")])
        .send()
        .await
        .expect("approve request failed");

    assert!(resp.status().is_redirection());
}
