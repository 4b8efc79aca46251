//! In-memory port doubles shared by the use case tests.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashgate_core::{
    AccountId, CredentialRecord, CredentialStore, CredentialStoreError, HashedPassword, Password,
    PasswordHasher, PasswordHasherError,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockCredentialStore {
    records: Arc<RwLock<HashMap<AccountId, CredentialRecord>>>,
    calls: Arc<AtomicUsize>,
}

impl MockCredentialStore {
    pub async fn get(&self, account_id: &AccountId) -> Option<CredentialRecord> {
        self.records.read().await.get(account_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CredentialStore for MockCredentialStore {
    async fn find(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.read().await.get(account_id).cloned())
    }

    async fn insert(&self, record: CredentialRecord) -> Result<(), CredentialStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Yield so concurrent callers interleave between hashing and insert.
        tokio::task::yield_now().await;
        match self.records.write().await.entry(record.account_id().clone()) {
            Entry::Occupied(_) => Err(CredentialStoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct FailingCredentialStore;

#[async_trait::async_trait]
impl CredentialStore for FailingCredentialStore {
    async fn find(
        &self,
        _account_id: &AccountId,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        Err(CredentialStoreError::UnexpectedError(
            "connection refused".to_string(),
        ))
    }

    async fn insert(&self, _record: CredentialRecord) -> Result<(), CredentialStoreError> {
        Err(CredentialStoreError::UnexpectedError(
            "connection refused".to_string(),
        ))
    }
}

/// Reversible stand-in for a real hasher; a per-call counter plays the salt.
#[derive(Clone, Default)]
pub struct MockPasswordHasher {
    calls: Arc<AtomicUsize>,
    failing: bool,
}

impl MockPasswordHasher {
    /// Plaintext behind [`PasswordHasher::dummy_hash`]; matches on verify.
    pub const DUMMY_PLAINTEXT: &'static str = "dummy";

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: Password) -> Result<HashedPassword, PasswordHasherError> {
        let salt = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(PasswordHasherError("out of memory".to_string()));
        }
        Ok(HashedPassword::from(Secret::from(format!(
            "mock${salt}${}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        password: Password,
        expected: HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(PasswordHasherError("out of memory".to_string()));
        }
        let plaintext = expected
            .as_ref()
            .expose_secret()
            .splitn(3, '$')
            .nth(2)
            .ok_or_else(|| PasswordHasherError("malformed hash".to_string()))?
            .to_string();
        Ok(&plaintext == password.as_ref().expose_secret())
    }

    fn dummy_hash(&self) -> HashedPassword {
        HashedPassword::from(Secret::from(format!(
            "mock$dummy${}",
            Self::DUMMY_PLAINTEXT
        )))
    }
}
