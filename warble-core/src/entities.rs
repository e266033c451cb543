//! Entity records
//!
//! Plain data, no behavior. Identifiers are assigned by the store on
//! creation; the `New*` payloads deliberately carry no id field, so a caller
//! can never smuggle one in.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Payload for creating an account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// A short message posted by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
}

/// Payload for creating a message.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub content: String,
    pub author_id: Uuid,
}
