use dashgate_adapters::{
    config::AllowedOrigins, hashing::Argon2PasswordHasher, persistence::HashMapCredentialStore,
};
use dashgate_core::{AccountId, CredentialRecord, CredentialStore, CredentialStoreError};
use reqwest::StatusCode;

use crate::helpers::{CannedReports, TestApp, msg_of};

/// Store whose lookups panic, standing in for a bug in a storage driver.
#[derive(Clone)]
struct PanickingStore;

#[async_trait::async_trait]
impl CredentialStore for PanickingStore {
    async fn find(
        &self,
        _account_id: &AccountId,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        panic!("storage driver bug")
    }

    async fn insert(&self, _record: CredentialRecord) -> Result<(), CredentialStoreError> {
        Err(CredentialStoreError::UnexpectedError(
            "connection reset by peer".to_string(),
        ))
    }
}

#[tokio::test]
async fn panicking_request_does_not_take_the_service_down() {
    let app = TestApp::with_ports(PanickingStore, Argon2PasswordHasher::new(), CannedReports, None).await;

    let response = app
        .post_login(&serde_json::json!({ "user_id": "u1", "password": "pw" }))
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(msg_of(response).await, "Internal Server Error");

    let still_alive = app.get("/test").await;
    assert_eq!(still_alive.status(), StatusCode::OK);
    assert_eq!(still_alive.text().await.unwrap(), "success");
}

#[tokio::test]
async fn store_fault_is_reported_without_detail() {
    let app = TestApp::with_ports(PanickingStore, Argon2PasswordHasher::new(), CannedReports, None).await;

    let response = app
        .post_signup(&serde_json::json!({
            "user_id": "u1",
            "password": "pw",
            "confirm_password": "pw",
            "user_type": "customer"
        }))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text().await.unwrap();
    assert!(!body.contains("connection reset"));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body).unwrap(),
        serde_json::json!({ "msg": "Internal Server Error" })
    );
}

#[tokio::test]
async fn cors_allows_configured_origin_only() {
    let origins = AllowedOrigins::parse(["http://localhost:4200"]).unwrap();
    let app = TestApp::with_ports(
        HashMapCredentialStore::new(),
        Argon2PasswordHasher::new(),
        CannedReports,
        Some(origins),
    )
    .await;

    let allowed = app
        .http_client
        .get(format!("{}/test", app.address))
        .header("origin", "http://localhost:4200")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:4200")
    );

    let denied = app
        .http_client
        .get(format!("{}/test", app.address))
        .header("origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn unmatched_paths_fall_back_to_static_assets() {
    let app = TestApp::new().await;

    let response = app.get("/dashboard/overview").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("dashboard"));
}
