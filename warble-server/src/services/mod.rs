//! Domain services
//!
//! Validate input, enforce the one cross-entity invariant (a message's
//! author must exist), and keep storage details behind the store. Services
//! are cheap to clone and polymorphic over the backend chosen at
//! composition time.

pub mod accounts;
pub mod messages;

pub use accounts::AccountService;
pub use messages::MessageService;
