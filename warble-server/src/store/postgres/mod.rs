//! Postgres backend
//!
//! Repositories run inline parameterized SQL against a connection handle
//! that is either the shared pool or, inside `exec_tx`, one open
//! transaction. Uniqueness of username/email and the author foreign key are
//! enforced by the schema; violations surface as storage errors.

mod accounts;
mod messages;

pub use accounts::PgAccountRepository;
pub use messages::PgMessageRepository;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tokio::sync::Mutex;

use super::{AccountRepository, MessageRepository, Store, TxFn};
use crate::error::{Error, Result};

/// Shared pool outside a transaction, a single open transaction inside one.
#[derive(Clone)]
pub(crate) enum PgConn {
    Pool(PgPool),
    Tx(Arc<Mutex<Transaction<'static, Postgres>>>),
}

/// Store backed by Postgres.
pub struct PgStore {
    conn: PgConn,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            conn: PgConn::Pool(pool),
        }
    }

    fn scoped(tx: Arc<Mutex<Transaction<'static, Postgres>>>) -> Self {
        Self {
            conn: PgConn::Tx(tx),
        }
    }
}

#[async_trait]
impl Store for PgStore {
    fn accounts(&self) -> Box<dyn AccountRepository> {
        Box::new(PgAccountRepository::new(self.conn.clone()))
    }

    fn messages(&self) -> Box<dyn MessageRepository> {
        Box::new(PgMessageRepository::new(self.conn.clone()))
    }

    async fn exec_tx<'f>(&self, func: TxFn<'f>) -> Result<()> {
        let pool = match &self.conn {
            PgConn::Pool(pool) => pool,
            PgConn::Tx(_) => return Err(Error::TxNotSupported),
        };

        let tx = pool.begin().await.map_err(Error::TxBegin)?;
        let shared = Arc::new(Mutex::new(tx));

        let outcome = func(Box::new(PgStore::scoped(Arc::clone(&shared)))).await;

        let tx = match Arc::try_unwrap(shared) {
            Ok(mutex) => mutex.into_inner(),
            // A repository handle escaped the callback. The transaction
            // rolls back when its last holder drops it; the callback's own
            // error still wins if it produced one.
            Err(_) => return Err(outcome.err().unwrap_or(Error::TxHandleLeaked)),
        };

        match outcome {
            Ok(()) => tx.commit().await.map_err(Error::TxCommit),
            Err(cause) => match tx.rollback().await {
                Ok(()) => Err(cause),
                Err(rollback) => Err(Error::TxRollback {
                    cause: Box::new(cause),
                    rollback,
                }),
            },
        }
    }
}
