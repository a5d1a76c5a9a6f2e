//! Contact management subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → service.rs (validate, orchestrate)
//!     → validation.rs (required fields, phone pattern)
//!     → store.rs (SQL against the contacts table)
//!     → Contact rows back up the stack
//! ```
//!
//! # Design Decisions
//! - The service never caches: every read, including the re-read after an
//!   insert or update, goes to the store so responses reflect the latest
//!   committed state
//! - Phone uniqueness is enforced twice: a pre-check for a precise error
//!   message, and a UNIQUE constraint in the store that closes the
//!   check-then-insert race under concurrent writes
//! - Updates replace all mutable fields wholesale; there is no patch

pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use model::{Contact, ContactDraft};
pub use service::ContactService;
pub use store::ContactStore;

use thiserror::Error;

/// Failures a contact operation can signal.
#[derive(Debug, Error)]
pub enum ContactError {
    /// Input was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// Another contact already uses this phone number.
    #[error("phone number already in use")]
    DuplicatePhone,

    /// No contact exists with the given id.
    #[error("contact {0} not found")]
    NotFound(i64),

    /// The store failed or was unreachable.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}
