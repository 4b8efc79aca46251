use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher as _, PasswordVerifier as _, Version,
    password_hash::{self, SaltString, rand_core},
};
use dashgate_core::{HashedPassword, Password, PasswordHasher, PasswordHasherError};
use secrecy::{ExposeSecret, Secret};

use crate::config::constants::hashing::{
    ARGON2_MEMORY_COST_KIB, ARGON2_PARALLELISM, ARGON2_TIME_COST, DUMMY_PASSWORD_HASH,
};

/// Argon2id hasher producing PHC strings.
///
/// Work runs on tokio's blocking pool so that concurrent requests are not
/// serialized behind a hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, PasswordHasherError> {
    let params = Params::new(
        ARGON2_MEMORY_COST_KIB,
        ARGON2_TIME_COST,
        ARGON2_PARALLELISM,
        None,
    )
    .map_err(|e| PasswordHasherError(e.to_string()))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<HashedPassword, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| HashedPassword::from(Secret::from(h.to_string())))
                    .map_err(|e| PasswordHasherError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(
        &self,
        password: Password,
        expected: HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let expected_hash = PasswordHash::new(expected.as_ref().expose_secret())
                    .map_err(|e| PasswordHasherError(e.to_string()))?;

                match argon2()?
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected_hash)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError(e.to_string()))?
    }

    fn dummy_hash(&self) -> HashedPassword {
        HashedPassword::from(Secret::from(DUMMY_PASSWORD_HASH.to_string()))
    }
}
