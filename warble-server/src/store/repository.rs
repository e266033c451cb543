//! Repository capabilities, one per entity kind
//!
//! Lookups distinguish value, absence, and failure explicitly: a missing
//! row is `Ok(None)`, never an error. `create` assigns a fresh id and
//! returns the stored record without touching any other field. `find_all`
//! returns an empty Vec on an empty backend and iterates in insertion
//! order on both backends.

use async_trait::async_trait;
use uuid::Uuid;

use warble_core::{Account, Message, NewAccount, NewMessage};

use crate::error::Result;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Account>>;

    async fn create(&self, account: NewAccount) -> Result<Account>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Message>>;

    async fn create(&self, message: NewMessage) -> Result<Message>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>>;
}
