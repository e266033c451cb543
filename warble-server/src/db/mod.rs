//! Database connection and schema management

pub mod migrations;
pub mod pool;

pub use pool::create_pool;
