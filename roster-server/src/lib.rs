//! HTTP front end for the developer roster.
//!
//! The router lives in [`app`], request handlers in [`routes`], and the
//! mapping from store errors to responses in [`error`].

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

pub use app::{AppState, build_app, build_router};
pub use config::{ConfigError, ServerConfig};
