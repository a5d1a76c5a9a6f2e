//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, dispatch)
//!     → request.rs (body parsing: JSON or urlencoded)
//!     → handlers.rs (route handlers → contact service)
//!     → response.rs (envelope shaping, error translation)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::ContactPayload;
pub use response::ApiResponse;
pub use server::{AppState, HttpServer};
