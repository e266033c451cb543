//! Message repository, Postgres flavor

use async_trait::async_trait;
use sqlx::FromRow;
use uuid::Uuid;

use warble_core::{Message, NewMessage};

use super::PgConn;
use crate::error::{Error, Result};
use crate::store::MessageRepository;

#[derive(Debug, FromRow)]
struct MessageRow {
    id: Uuid,
    content: String,
    author_id: Uuid,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            author_id: row.author_id,
        }
    }
}

pub struct PgMessageRepository {
    conn: PgConn,
}

impl PgMessageRepository {
    pub(crate) fn new(conn: PgConn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn find_all(&self) -> Result<Vec<Message>> {
        let query = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, content, author_id
            FROM messages
            ORDER BY seq
            "#,
        );
        let rows = match &self.conn {
            PgConn::Pool(pool) => query.fetch_all(pool).await,
            PgConn::Tx(tx) => {
                let mut tx = tx.lock().await;
                query.fetch_all(&mut **tx).await
            }
        }
        .map_err(|source| Error::Storage {
            context: "failed to find all messages",
            source,
        })?;
        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn create(&self, message: NewMessage) -> Result<Message> {
        let query = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (id, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, author_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&message.content)
        .bind(message.author_id);
        let row = match &self.conn {
            PgConn::Pool(pool) => query.fetch_one(pool).await,
            PgConn::Tx(tx) => {
                let mut tx = tx.lock().await;
                query.fetch_one(&mut **tx).await
            }
        }
        .map_err(|source| Error::Storage {
            context: "failed to insert message",
            source,
        })?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>> {
        let query = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, content, author_id
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id);
        let row = match &self.conn {
            PgConn::Pool(pool) => query.fetch_optional(pool).await,
            PgConn::Tx(tx) => {
                let mut tx = tx.lock().await;
                query.fetch_optional(&mut **tx).await
            }
        }
        .map_err(|source| Error::Storage {
            context: "failed to find message by id",
            source,
        })?;
        Ok(row.map(Message::from))
    }
}
