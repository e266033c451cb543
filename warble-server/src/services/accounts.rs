//! Account service

use std::sync::Arc;

use uuid::Uuid;

use warble_core::{validate, Account, NewAccount};

use crate::error::Result;
use crate::store::Store;

/// Domain service for accounts.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn Store>,
}

impl AccountService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create an account. The email is validated before storage is touched;
    /// the store assigns the id.
    pub async fn create(&self, account: NewAccount) -> Result<Account> {
        validate::email(&account.email)?;
        self.store.accounts().create(account).await
    }

    /// All accounts; an empty backend yields an empty Vec, not an error.
    pub async fn find_all(&self) -> Result<Vec<Account>> {
        self.store.accounts().find_all().await
    }

    /// Account by id; `Ok(None)` when no such account exists.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        self.store.accounts().find_by_id(id).await
    }
}
