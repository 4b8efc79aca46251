use secrecy::Secret;

/// Opaque output of a [`PasswordHasher`](crate::PasswordHasher).
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl From<Secret<String>> for HashedPassword {
    fn from(hash: Secret<String>) -> Self {
        Self::new(hash)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
