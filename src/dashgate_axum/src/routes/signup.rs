//! Axum-specific signup route.

use axum::{Json, extract::State, response::Response};
use dashgate_adapters::handlers::{self, RegisterData};
use dashgate_core::{CredentialStore, Password, PasswordHasher, Role};
use secrecy::Secret;
use serde::Deserialize;

use crate::adapters::response_builder;

/// Axum signup route.
///
/// State is the `(credential store, password hasher)` pair; both are cheap
/// handles cloned per request.
pub async fn signup<S, H>(
    State((credential_store, password_hasher)): State<(S, H)>,
    Json(request): Json<SignupRequest>,
) -> Response
where
    S: CredentialStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let data = RegisterData {
        account_id: request.account_id,
        password: Password::from(request.password),
        password_confirmation: Password::from(request.password_confirmation),
        role: Role::from(request.role),
    };

    handlers::handle_register(credential_store, password_hasher, data, response_builder()).await
}

/// Axum-specific request body for signup.
///
/// Field names follow the dashboard front-end; the descriptive names are
/// accepted as aliases.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(rename = "user_id", alias = "account_id")]
    pub account_id: String,

    pub password: Secret<String>,

    #[serde(rename = "confirm_password", alias = "password_confirmation")]
    pub password_confirmation: Secret<String>,

    #[serde(rename = "user_type", alias = "role")]
    pub role: String,
}
