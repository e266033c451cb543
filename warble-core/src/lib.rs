//! warble-core: domain model for the warble posting service
//!
//! Entities, domain errors, and input validation shared by every other
//! crate in the workspace. This crate does no I/O and knows nothing about
//! HTTP or the database.

pub mod entities;
pub mod error;
pub mod validate;

pub use entities::{Account, Message, NewAccount, NewMessage};
pub use error::DomainError;
