//! Message service
//!
//! Creation is the one multi-step write in the system: the author-exists
//! check and the insert run inside a single unit of work, so a failed
//! validation can never leave a partial message behind.

use std::sync::Arc;

use uuid::Uuid;

use warble_core::{validate, DomainError, Message, NewMessage};

use crate::error::{Error, Result};
use crate::store::Store;

/// Domain service for messages.
#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn Store>,
}

impl MessageService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create a message atomically: verify the author exists, validate the
    /// content length, insert. A missing author aborts the transaction with
    /// [`DomainError::InvalidAuthor`]; overlong content aborts it with
    /// [`DomainError::InvalidContent`].
    pub async fn create(&self, message: NewMessage) -> Result<Message> {
        let mut created = None;
        let slot = &mut created;
        self.store
            .exec_tx(Box::new(move |tx| {
                Box::pin(async move {
                    if tx.accounts().find_by_id(message.author_id).await?.is_none() {
                        return Err(DomainError::InvalidAuthor.into());
                    }
                    validate::content(&message.content)?;
                    *slot = Some(tx.messages().create(message).await?);
                    Ok(())
                })
            }))
            .await?;
        created.ok_or_else(|| {
            Error::Internal("transaction committed without a created message".into())
        })
    }

    /// All messages; an empty backend yields an empty Vec, not an error.
    pub async fn find_all(&self) -> Result<Vec<Message>> {
        self.store.messages().find_all().await
    }

    /// Message by id; `Ok(None)` when no such message exists.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>> {
        self.store.messages().find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::AccountService;
    use crate::store::MemStore;
    use warble_core::{Account, NewAccount};

    fn services() -> (AccountService, MessageService) {
        let store: Arc<dyn Store> = Arc::new(MemStore::new());
        (
            AccountService::new(Arc::clone(&store)),
            MessageService::new(store),
        )
    }

    async fn stored_author(accounts: &AccountService) -> Account {
        accounts
            .create(NewAccount {
                username: "foo".to_owned(),
                email: "jd@mail.com".to_owned(),
                display_name: Some("John Doe".to_owned()),
            })
            .await
            .expect("create author")
    }

    #[tokio::test]
    async fn create_and_list() {
        let (accounts, messages) = services();
        let author = stored_author(&accounts).await;

        let created = messages
            .create(NewMessage {
                content: "Hello World".to_owned(),
                author_id: author.id,
            })
            .await
            .expect("create message");

        assert!(!created.id.is_nil());
        assert_eq!(created.content, "Hello World");
        assert_eq!(created.author_id, author.id);

        let all = messages.find_all().await.expect("find_all");
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn round_trip_by_id() {
        let (accounts, messages) = services();
        let author = stored_author(&accounts).await;
        let created = messages
            .create(NewMessage {
                content: "ping".to_owned(),
                author_id: author.id,
            })
            .await
            .expect("create message");

        let found = messages
            .find_by_id(created.id)
            .await
            .expect("find_by_id")
            .expect("message exists");
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn unknown_author_aborts_creation() {
        let (_accounts, messages) = services();

        let err = messages
            .create(NewMessage {
                content: "orphan".to_owned(),
                author_id: Uuid::new_v4(),
            })
            .await
            .expect_err("invalid author");

        assert!(matches!(err, Error::Domain(DomainError::InvalidAuthor)));
        assert!(messages.find_all().await.expect("find_all").is_empty());
    }

    #[tokio::test]
    async fn overlong_content_aborts_creation() {
        let (accounts, messages) = services();
        let author = stored_author(&accounts).await;

        let err = messages
            .create(NewMessage {
                content: "a".repeat(validate::MAX_CONTENT_LEN + 1),
                author_id: author.id,
            })
            .await
            .expect_err("invalid content");

        assert!(matches!(err, Error::Domain(DomainError::InvalidContent)));
        assert!(messages.find_all().await.expect("find_all").is_empty());
    }

    #[tokio::test]
    async fn content_at_the_limit_is_accepted() {
        let (accounts, messages) = services();
        let author = stored_author(&accounts).await;

        let created = messages
            .create(NewMessage {
                content: "a".repeat(validate::MAX_CONTENT_LEN),
                author_id: author.id,
            })
            .await
            .expect("create message");
        assert_eq!(created.content.chars().count(), validate::MAX_CONTENT_LEN);
    }

    #[tokio::test]
    async fn missing_author_wins_over_overlong_content() {
        let (_accounts, messages) = services();

        let err = messages
            .create(NewMessage {
                content: "a".repeat(validate::MAX_CONTENT_LEN + 1),
                author_id: Uuid::new_v4(),
            })
            .await
            .expect_err("invalid author");

        assert!(matches!(err, Error::Domain(DomainError::InvalidAuthor)));
    }

    #[tokio::test]
    async fn transaction_failure_surfaces_unchanged() {
        let store: Arc<dyn Store> = Arc::new(MemStore::failing_transactions());
        let messages = MessageService::new(store);

        let err = messages
            .create(NewMessage {
                content: "never".to_owned(),
                author_id: Uuid::new_v4(),
            })
            .await
            .expect_err("rejected transaction");
        assert!(matches!(err, Error::TxRejected));
    }

    #[tokio::test]
    async fn reads_are_idempotent() {
        let (accounts, messages) = services();
        let author = stored_author(&accounts).await;
        for content in ["one", "two"] {
            messages
                .create(NewMessage {
                    content: content.to_owned(),
                    author_id: author.id,
                })
                .await
                .expect("create message");
        }

        let first = messages.find_all().await.expect("find_all");
        let second = messages.find_all().await.expect("find_all");
        assert_eq!(first, second);
        let contents: Vec<_> = first.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["one", "two"]);
    }
}
