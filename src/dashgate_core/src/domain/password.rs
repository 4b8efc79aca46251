use secrecy::{ExposeSecret, Secret};

/// Plaintext password as received from the caller.
///
/// No strength rules are applied; the value never leaves its `Secret` except
/// to be hashed, verified or compared against its confirmation.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn new(password: Secret<String>) -> Self {
        Self(password)
    }

    /// Plain equality, used for the confirmation check before any I/O.
    pub fn matches(&self, other: &Password) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl From<Secret<String>> for Password {
    fn from(password: Secret<String>) -> Self {
        Self::new(password)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
