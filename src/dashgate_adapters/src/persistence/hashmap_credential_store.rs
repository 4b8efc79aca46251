use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

use dashgate_core::{AccountId, CredentialRecord, CredentialStore, CredentialStoreError};

/// In-process credential store.
///
/// The existence check and the insert happen under one write guard, which
/// makes `insert` atomic with respect to other concurrent inserts.
#[derive(Default, Clone)]
pub struct HashMapCredentialStore {
    records: Arc<RwLock<HashMap<AccountId, CredentialRecord>>>,
}

impl HashMapCredentialStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl CredentialStore for HashMapCredentialStore {
    async fn find(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let records = self.records.read().await;
        Ok(records.get(account_id).cloned())
    }

    async fn insert(&self, record: CredentialRecord) -> Result<(), CredentialStoreError> {
        let mut records = self.records.write().await;
        match records.entry(record.account_id().clone()) {
            Entry::Occupied(_) => Err(CredentialStoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }
}
