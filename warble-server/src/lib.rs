//! warble-server: accounts and short messages over HTTP
//!
//! The heart of the crate is the transactional store: repositories for the
//! two entity kinds, two interchangeable backends (in-memory and Postgres),
//! and `exec_tx` for grouping repository calls into one atomic unit of work.
//! Domain services sit on top of the store; the `http` module is a thin
//! axum boundary over the services.

pub mod db;
pub mod error;
pub mod http;
pub mod services;
pub mod store;

pub use error::{Error, Result};
