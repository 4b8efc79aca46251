//! Framework-agnostic signup handler.

use dashgate_application::{RegisterUseCase, RegistrationError};
use dashgate_core::{
    AccountId, AuthResponseBuilder, AuthResponseHelpers, CredentialStore, Password,
    PasswordHasher, Role,
};

use super::messages;

/// Request data for account signup.
///
/// The account identifier is still raw: parsing it is part of the handler so
/// that an empty identifier gets the same `{ "msg": ... }` treatment as other
/// validation failures.
pub struct RegisterData {
    pub account_id: String,
    pub password: Password,
    pub password_confirmation: Password,
    pub role: Role,
}

/// Framework-agnostic signup handler.
///
/// | outcome | status | msg |
/// |---|---|---|
/// | registered | 200 | `success` |
/// | empty account id | 400 | `Invalid account identifier` |
/// | confirmation mismatch | 400 | `Passwords do not match` |
/// | duplicate | 400 | `User already exists` |
/// | store/hasher fault | 500 | `Internal Server Error` |
///
/// Faults are logged with full detail; the response never carries it.
#[tracing::instrument(name = "Signup", skip_all, fields(account_id = %data.account_id))]
pub async fn handle_register<S, H, B>(
    credential_store: S,
    password_hasher: H,
    data: RegisterData,
    builder: B,
) -> B::Response
where
    S: CredentialStore,
    H: PasswordHasher,
    B: AuthResponseBuilder,
{
    let account_id = match AccountId::try_from(data.account_id) {
        Ok(account_id) => account_id,
        Err(e) => {
            tracing::info!(reason = %e, "Signup rejected");
            return builder.bad_request(messages::INVALID_ACCOUNT_ID);
        }
    };

    let use_case = RegisterUseCase::new(credential_store, password_hasher);

    match use_case
        .execute(
            account_id,
            data.password,
            data.password_confirmation,
            data.role,
        )
        .await
    {
        Ok(()) => {
            tracing::info!("Account registered");
            builder.ok_msg(messages::REGISTERED)
        }
        Err(RegistrationError::PasswordMismatch) => {
            tracing::info!("Passwords do not match");
            builder.bad_request(messages::PASSWORDS_DO_NOT_MATCH)
        }
        Err(RegistrationError::DuplicateAccount) => {
            tracing::info!("Account already exists");
            builder.bad_request(messages::USER_ALREADY_EXISTS)
        }
        Err(e) => {
            tracing::error!(error = %e, "Signup failed");
            builder.internal_error(messages::INTERNAL_SERVER_ERROR)
        }
    }
}
