//! Contact Book Service Library

pub mod config;
pub mod contacts;
pub mod http;
pub mod observability;
pub mod ui;

pub use config::AppConfig;
pub use contacts::{Contact, ContactDraft, ContactService, ContactStore};
pub use http::HttpServer;
