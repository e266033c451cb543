//! In-memory backend
//!
//! Both entity sequences live behind one mutex, held for the full duration
//! of each repository call and never across an await. Insertion order is
//! preserved and is the iteration order for `find_all`; lookups are linear
//! scans. The unit of work is a pass-through: `exec_tx` hands the callback
//! the same shared state and has nothing to commit or roll back.
//!
//! Username and email uniqueness is not checked here; that constraint
//! belongs to the persistent backend's schema.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use warble_core::{Account, Message, NewAccount, NewMessage};

use super::{AccountRepository, MessageRepository, Store, TxFn};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
struct MemState {
    accounts: Vec<Account>,
    messages: Vec<Message>,
}

/// Store backed by process memory.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    state: Arc<Mutex<MemState>>,
    fail_transactions: bool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose `exec_tx` refuses every transaction. Lets tests exercise
    /// the transaction-failure path without a database.
    pub fn failing_transactions() -> Self {
        Self {
            fail_transactions: true,
            ..Self::default()
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemState> {
        // A panic while holding the lock cannot corrupt Vec state; keep
        // serving instead of propagating the poison.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Store for MemStore {
    fn accounts(&self) -> Box<dyn AccountRepository> {
        Box::new(MemAccountRepository {
            store: self.clone(),
        })
    }

    fn messages(&self) -> Box<dyn MessageRepository> {
        Box::new(MemMessageRepository {
            store: self.clone(),
        })
    }

    async fn exec_tx<'f>(&self, func: TxFn<'f>) -> Result<()> {
        if self.fail_transactions {
            return Err(Error::TxRejected);
        }
        func(Box::new(self.clone())).await
    }
}

struct MemAccountRepository {
    store: MemStore,
}

#[async_trait]
impl AccountRepository for MemAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>> {
        Ok(self.store.lock().accounts.clone())
    }

    async fn create(&self, account: NewAccount) -> Result<Account> {
        let account = Account {
            id: Uuid::new_v4(),
            username: account.username,
            email: account.email,
            display_name: account.display_name,
        };
        self.store.lock().accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        Ok(self.store.lock().accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        Ok(self
            .store
            .lock()
            .accounts
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        Ok(self
            .store
            .lock()
            .accounts
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }
}

struct MemMessageRepository {
    store: MemStore,
}

#[async_trait]
impl MessageRepository for MemMessageRepository {
    async fn find_all(&self) -> Result<Vec<Message>> {
        Ok(self.store.lock().messages.clone())
    }

    async fn create(&self, message: NewMessage) -> Result<Message> {
        let message = Message {
            id: Uuid::new_v4(),
            content: message.content,
            author_id: message.author_id,
        };
        self.store.lock().messages.push(message.clone());
        Ok(message)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>> {
        Ok(self.store.lock().messages.iter().find(|m| m.id == id).cloned())
    }
}
