//! Account repository, Postgres flavor

use async_trait::async_trait;
use sqlx::FromRow;
use uuid::Uuid;

use warble_core::{Account, NewAccount};

use super::PgConn;
use crate::error::{Error, Result};
use crate::store::AccountRepository;

#[derive(Debug, FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    email: String,
    display_name: Option<String>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            display_name: row.display_name,
        }
    }
}

pub struct PgAccountRepository {
    conn: PgConn,
}

impl PgAccountRepository {
    pub(crate) fn new(conn: PgConn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>> {
        let query = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, email, display_name
            FROM accounts
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
            context: "failed to find all accounts",
            source,
        })?;
        Ok(rows.into_iter().map(Account::from).collect())
    }

    async fn create(&self, account: NewAccount) -> Result<Account> {
        let query = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (id, username, email, display_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, display_name
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&account.username)
        .bind(&account.email)
        .bind(account.display_name.as_deref());
        let row = match &self.conn {
            PgConn::Pool(pool) => query.fetch_one(pool).await,
            PgConn::Tx(tx) => {
                let mut tx = tx.lock().await;
                query.fetch_one(&mut **tx).await
            }
        }
        .map_err(|source| Error::Storage {
            context: "failed to insert account",
            source,
        })?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        let query = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, email, display_name
            FROM accounts
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
            context: "failed to find account by id",
            source,
        })?;
        Ok(row.map(Account::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        let query = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, email, display_name
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username);
        let row = match &self.conn {
            PgConn::Pool(pool) => query.fetch_optional(pool).await,
            PgConn::Tx(tx) => {
                let mut tx = tx.lock().await;
                query.fetch_optional(&mut **tx).await
            }
        }
        .map_err(|source| Error::Storage {
            context: "failed to find account by username",
            source,
        })?;
        Ok(row.map(Account::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let query = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, email, display_name
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email);
        let row = match &self.conn {
            PgConn::Pool(pool) => query.fetch_optional(pool).await,
            PgConn::Tx(tx) => {
                let mut tx = tx.lock().await;
                query.fetch_optional(&mut **tx).await
            }
        }
        .map_err(|source| Error::Storage {
            context: "failed to find account by email",
            source,
        })?;
        Ok(row.map(Account::from))
    }
}
