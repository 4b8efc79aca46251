use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Account identifier must not be empty")]
    Empty,
    #[error("Account identifier must not contain NUL characters")]
    ContainsNul,
}

/// Externally chosen identifier naming a credential record.
///
/// Only the credential store's key requirements are enforced: the value is
/// non-empty and holds no NUL character, which PostgreSQL `TEXT` cannot store.
/// Surrounding whitespace is kept as supplied since lookups are exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(AccountIdError::Empty);
        }
        if value.contains('\0') {
            return Err(AccountIdError::ContainsNul);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for AccountId {
    type Error = AccountIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
