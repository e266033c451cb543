//! The transactional store
//!
//! A `Store` hands out per-entity repositories bound to a single unit of
//! work and runs caller-supplied callbacks atomically via `exec_tx`. Two
//! backends implement it: `MemStore` (fast, for unit-level testing) and
//! `PgStore` (Postgres). They behave identically with respect to returned
//! errors and `find_all` ordering.

pub mod mem;
pub mod postgres;
pub mod repository;

pub use mem::MemStore;
pub use postgres::PgStore;
pub use repository::{AccountRepository, MessageRepository};

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::Result;

/// Callback run inside a unit of work. It receives a store scoped to the
/// open transaction; repositories obtained from it all share that
/// transaction.
pub type TxFn<'f> = Box<dyn FnOnce(Box<dyn Store>) -> BoxFuture<'f, Result<()>> + Send + 'f>;

/// Factory for repositories sharing one unit of work.
#[async_trait]
pub trait Store: Send + Sync {
    /// Account repository bound to this store's unit of work.
    fn accounts(&self) -> Box<dyn AccountRepository>;

    /// Message repository bound to this store's unit of work.
    fn messages(&self) -> Box<dyn MessageRepository>;

    /// Run `func` inside a single atomic unit of work.
    ///
    /// If `func` returns `Ok` the work is committed; on `Err` it is rolled
    /// back and the callback's error is returned unchanged. A rollback
    /// failure is combined with the original error rather than replacing
    /// it. Calling `exec_tx` on a store that is itself transaction-scoped
    /// fails with [`Error::TxNotSupported`] before `func` runs.
    ///
    /// [`Error::TxNotSupported`]: crate::Error::TxNotSupported
    async fn exec_tx<'f>(&self, func: TxFn<'f>) -> Result<()>;
}
