//! Showroom Server - HTTP layer for the viewer backend
//!
//! Provides the router (catalog endpoint plus static mount), server
//! configuration, and startup error types.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::ServerError;
pub use routes::router;
