use dashgate_core::{
    AccountId, CredentialRecord, CredentialStore, CredentialStoreError, Password, PasswordHasher,
    PasswordHasherError, Role,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("User already exists")]
    DuplicateAccount,
    #[error("Credential store error: {0}")]
    CredentialStoreError(CredentialStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl From<CredentialStoreError> for RegistrationError {
    fn from(error: CredentialStoreError) -> Self {
        match error {
            CredentialStoreError::AlreadyExists => RegistrationError::DuplicateAccount,
            e => RegistrationError::CredentialStoreError(e),
        }
    }
}

/// Register use case - handles account signup
pub struct RegisterUseCase<S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    credential_store: S,
    password_hasher: H,
}

impl<S, H> RegisterUseCase<S, H>
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

    /// Execute the register use case
    ///
    /// The confirmation check happens before any I/O. Uniqueness is decided
    /// solely by the store's atomic insert; there is no preceding lookup, so
    /// concurrent signups for one identifier cannot both succeed.
    #[tracing::instrument(
        name = "RegisterUseCase::execute",
        skip(self, password, password_confirmation)
    )]
    pub async fn execute(
        &self,
        account_id: AccountId,
        password: Password,
        password_confirmation: Password,
        role: Role,
    ) -> Result<(), RegistrationError> {
        if !password.matches(&password_confirmation) {
            return Err(RegistrationError::PasswordMismatch);
        }

        let password_hash = self.password_hasher.hash(password).await?;

        let record = CredentialRecord::new(account_id, password_hash, role);
        self.credential_store.insert(record).await?;

        Ok(())
    }
}
