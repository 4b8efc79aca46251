use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{account_id::AccountId, credential::CredentialRecord};

// CredentialStore port trait and errors
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Account already exists")]
    AlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AlreadyExists, Self::AlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Durable mapping from account identifier to credential record.
///
/// `insert` is the enforcement point for identifier uniqueness: it must reject
/// a duplicate atomically with respect to other concurrent `insert` calls,
/// without relying on a prior `find`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError>;
    async fn insert(&self, record: CredentialRecord) -> Result<(), CredentialStoreError>;
}
