use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::database::models::{Account, NewAccount};
use crate::database::store::{AccountStore, StoreError};

/// In-memory account store. Used when no DATABASE_URL is configured, and by
/// the integration tests. Ids are assigned from a monotonic counter and never
/// reused, matching the database-backed store.
#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<i64, Account>>,
    next_id: AtomicI64,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, fields: NewAccount) -> Result<Account, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let account = Account {
            id,
            name: fields.name,
            email: fields.email,
            address: fields.address,
            phone_number: fields.phone_number,
            date_joined: Utc::now(),
        };

        self.accounts.write().await.insert(id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>, StoreError> {
        let mut accounts: Vec<Account> = self.accounts.read().await.values().cloned().collect();
        accounts.sort_by_key(|a| a.id);
        Ok(accounts)
    }

    async fn update(&self, id: i64, fields: NewAccount) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or(StoreError::NotFound)?;

        account.name = fields.name;
        account.email = fields.email;
        account.address = fields.address;
        account.phone_number = fields.phone_number;

        Ok(account.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.accounts.write().await.remove(&id);
        Ok(())
    }
}
