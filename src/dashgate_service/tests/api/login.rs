use reqwest::StatusCode;

use crate::helpers::{TestApp, get_random_account_id, msg_of};

async fn signup(app: &TestApp, account_id: &str, password: &str) {
    let response = app
        .post_signup(&serde_json::json!({
            "user_id": account_id,
            "password": password,
            "confirm_password": password,
            "user_type": "customer"
        }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_return_200_for_valid_credentials() {
    let app = TestApp::new().await;
    let account_id = get_random_account_id();
    signup(&app, &account_id, "Secr3t!").await;

    let response = app
        .post_login(&serde_json::json!({
            "user_id": account_id,
            "password": "Secr3t!"
        }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(msg_of(response).await, "Login successful");
}

#[tokio::test]
async fn unknown_account_and_wrong_password_look_identical() {
    let app = TestApp::new().await;
    let account_id = get_random_account_id();
    signup(&app, &account_id, "Secr3t!").await;

    let wrong_password = app
        .post_login(&serde_json::json!({
            "user_id": account_id,
            "password": "wrong_password"
        }))
        .await;
    let unknown = app
        .post_login(&serde_json::json!({
            "user_id": "nonexistent",
            "password": "Secr3t!"
        }))
        .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    let wrong_password_body = wrong_password.text().await.unwrap();
    let unknown_body = unknown.text().await.unwrap();
    assert_eq!(wrong_password_body, unknown_body);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&unknown_body).unwrap(),
        serde_json::json!({ "msg": "Invalid credentials" })
    );
}

#[tokio::test]
async fn end_to_end_registration_and_login() {
    let app = TestApp::new().await;

    let first = app
        .post_signup(&serde_json::json!({
            "user_id": "u1",
            "password": "Secr3t!",
            "confirm_password": "Secr3t!",
            "user_type": "customer"
        }))
        .await;
    assert_eq!(first.status(), StatusCode::OK);

    let again = app
        .post_signup(&serde_json::json!({
            "user_id": "u1",
            "password": "x",
            "confirm_password": "x",
            "user_type": "customer"
        }))
        .await;
    assert_eq!(again.status(), StatusCode::BAD_REQUEST);
    assert_eq!(msg_of(again).await, "User already exists");

    let ok = app
        .post_login(&serde_json::json!({ "user_id": "u1", "password": "Secr3t!" }))
        .await;
    assert_eq!(ok.status(), StatusCode::OK);

    // The rejected second signup must not have replaced the stored password.
    let with_second_password = app
        .post_login(&serde_json::json!({ "user_id": "u1", "password": "x" }))
        .await;
    assert_eq!(with_second_password.status(), StatusCode::UNAUTHORIZED);

    let wrong = app
        .post_login(&serde_json::json!({ "user_id": "u1", "password": "wrong" }))
        .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(msg_of(wrong).await, "Invalid credentials");
}

#[tokio::test]
async fn descriptive_field_names_are_accepted() {
    let app = TestApp::new().await;

    let signup = app
        .post_signup(&serde_json::json!({
            "account_id": "analyst",
            "password": "pw",
            "password_confirmation": "pw",
            "role": "admin"
        }))
        .await;
    assert_eq!(signup.status(), StatusCode::OK);

    let login = app
        .post_login(&serde_json::json!({ "account_id": "analyst", "password": "pw" }))
        .await;
    assert_eq!(login.status(), StatusCode::OK);
}
