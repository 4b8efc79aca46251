use crate::domain::{account_id::AccountId, hashed_password::HashedPassword, role::Role};

/// Persisted tuple of account identifier, password hash and role tag.
///
/// Records are created once and never mutated, so there are no setters.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    account_id: AccountId,
    password_hash: HashedPassword,
    role: Role,
}

impl CredentialRecord {
    pub fn new(account_id: AccountId, password_hash: HashedPassword, role: Role) -> Self {
        Self {
            account_id,
            password_hash,
            role,
        }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn role(&self) -> &Role {
        &self.role
    }
}

/// Result of a successful credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated { account_id: AccountId, role: Role },
}
