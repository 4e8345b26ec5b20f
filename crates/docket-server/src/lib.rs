//! HTTP server for docket.
//!
//! Exposes the item operations as JSON endpoints under `/items`, plus
//! `/actors` and `/health`. Errors are reported as `{"message": ...}`.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult, ServerError, ServerResult};
pub use router::build_router;
pub use server::DocketServer;
