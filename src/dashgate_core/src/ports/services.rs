use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{hashed_password::HashedPassword, password::Password};

#[derive(Debug, Error)]
#[error("Password hasher failure: {0}")]
pub struct PasswordHasherError(pub String);

/// One-way salted hashing primitive.
///
/// Both operations are deliberately expensive; implementations must not run
/// them on the async executor threads.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: Password) -> Result<HashedPassword, PasswordHasherError>;

    /// Returns `Ok(false)` on mismatch. `Err` is reserved for internal faults
    /// such as an unparseable stored hash.
    async fn verify(
        &self,
        password: Password,
        expected: HashedPassword,
    ) -> Result<bool, PasswordHasherError>;

    /// A well-formed hash with the same cost as real ones, matching no password
    /// a caller is expected to send. Verifying against it lets a lookup miss
    /// take as long as a wrong password.
    fn dummy_hash(&self) -> HashedPassword;
}
