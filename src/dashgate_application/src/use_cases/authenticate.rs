use dashgate_core::{
    AccountId, AuthOutcome, CredentialStore, CredentialStoreError, Password, PasswordHasher,
    PasswordHasherError,
};

/// Error types specific to the authenticate use case
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown account and wrong password are deliberately the same variant.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Authenticate use case - handles login attempts
pub struct AuthenticateUseCase<S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    credential_store: S,
    password_hasher: H,
}

impl<S, H> AuthenticateUseCase<S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    pub fn new(credential_store: S, password_hasher: H) -> Self {
        Self {
            credential_store,
            password_hasher,
        }
    }

    /// Execute the authenticate use case
    ///
    /// # Returns
    /// `AuthOutcome::Authenticated` carrying the stored role, or
    /// `AuthError::InvalidCredentials` whether the account is unknown or the
    /// password is wrong
    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        account_id: AccountId,
        password: Password,
    ) -> Result<AuthOutcome, AuthError> {
        let Some(record) = self.credential_store.find(&account_id).await? else {
            tracing::debug!("No credential record found");
            // Outcome is discarded; the work only evens out response latency.
            if let Err(e) = self
                .password_hasher
                .verify(password, self.password_hasher.dummy_hash())
                .await
            {
                tracing::warn!(error = %e, "Dummy verification failed");
            }
            return Err(AuthError::InvalidCredentials);
        };

        let matches = self
            .password_hasher
            .verify(password, record.password_hash().clone())
            .await?;

        if !matches {
            tracing::debug!("Password verification failed");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthOutcome::Authenticated {
            account_id: record.account_id().clone(),
            role: record.role().clone(),
        })
    }
}
