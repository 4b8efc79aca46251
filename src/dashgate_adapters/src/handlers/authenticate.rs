//! Framework-agnostic login handler.

use dashgate_application::{AuthError, AuthenticateUseCase};
use dashgate_core::{
    AccountId, AuthOutcome, AuthResponseBuilder, AuthResponseHelpers, CredentialStore, Password,
    PasswordHasher,
};

use super::messages;

/// Request data for a login attempt.
pub struct AuthenticateData {
    pub account_id: String,
    pub password: Password,
}

/// Framework-agnostic login handler.
///
/// Unknown accounts, unusable identifiers and wrong passwords all answer 401
/// `Invalid credentials`. Store or hasher faults answer 500.
#[tracing::instrument(name = "Login", skip_all, fields(account_id = %data.account_id))]
pub async fn handle_authenticate<S, H, B>(
    credential_store: S,
    password_hasher: H,
    data: AuthenticateData,
    builder: B,
) -> B::Response
where
    S: CredentialStore,
    H: PasswordHasher,
    B: AuthResponseBuilder,
{
    let Ok(account_id) = AccountId::try_from(data.account_id) else {
        tracing::info!("Invalid credentials");
        return builder.unauthorized(messages::INVALID_CREDENTIALS);
    };

    let use_case = AuthenticateUseCase::new(credential_store, password_hasher);

    match use_case.execute(account_id, data.password).await {
        Ok(AuthOutcome::Authenticated { role, .. }) => {
            tracing::info!(%role, "Login successful");
            builder.ok_msg(messages::LOGIN_SUCCESSFUL)
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::info!("Invalid credentials");
            builder.unauthorized(messages::INVALID_CREDENTIALS)
        }
        Err(e) => {
            tracing::error!(error = %e, "Login failed");
            builder.internal_error(messages::INTERNAL_SERVER_ERROR)
        }
    }
}
