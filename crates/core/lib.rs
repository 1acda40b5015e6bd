//! # wg-core - Option translation and error types
//!
//! This crate holds the Redis-client-agnostic half of the wg Redis adapter:
//! - `translate` for turning a loosely-typed options mapping into `ClientOptions`
//! - `ClientOptions`, `PoolSettings`, `Role`, `Driver`, `SentinelAddr`
//! - `DeprecatedCommands`, the legacy command names that draw a warning
//! - Error types

mod config;
mod deprecation;
mod error;

// Re-export main types
pub use config::{
    determine_redis_url, determine_redis_url_from, redact_url, translate, ClientOptions,
    ClientOptionsBuilder, Driver, PoolSettings, RawOptions, Role, SentinelAddr, Translated,
    DEFAULT_RECONNECT_ATTEMPTS, DEFAULT_SENTINEL_PORT,
};
pub use deprecation::{DeprecatedCommands, DEPRECATED_COMMANDS};
pub use error::{Result, WgError};
