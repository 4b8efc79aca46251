//! Axum-specific login route.

use axum::{Json, extract::State, response::Response};
use dashgate_adapters::handlers::{self, AuthenticateData};
use dashgate_core::{CredentialStore, Password, PasswordHasher};
use secrecy::Secret;
use serde::Deserialize;

use crate::adapters::response_builder;

/// Axum login route.
pub async fn login<S, H>(
    State((credential_store, password_hasher)): State<(S, H)>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    S: CredentialStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let data = AuthenticateData {
        account_id: request.account_id,
        password: Password::from(request.password),
    };

    handlers::handle_authenticate(credential_store, password_hasher, data, response_builder())
        .await
}

/// Axum-specific request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "user_id", alias = "account_id")]
    pub account_id: String,

    pub password: Secret<String>,
}
