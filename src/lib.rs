//! # wg - Redis client adapter
//!
//! Connects the wg job queue to Redis through `redis-rs`.
//!
//! ## Features
//!
//! - **Option translation**: Loosely-typed option maps become typed client options
//! - **Legacy keys**: `network_timeout`, `master_name`, `role` and `driver` are remapped
//! - **Sentinel support**: `sentinels` switch the client to sentinel resolution
//! - **Compat client**: Commands by name, `info`, `evalsha` and legacy helpers
//! - **Deprecation warnings**: Editable list of deprecated commands, logged with the caller
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wg::{RedisClientAdapter, RawOptions};
//!
//! #[tokio::main]
//! async fn main() -> wg::Result<()> {
//!     let options: RawOptions = serde_json::from_str(
//!         r#"{"url": "redis://localhost:6379/0", "network_timeout": 5, "size": 10}"#,
//!     )?;
//!     let adapter = RedisClientAdapter::new(options)?;
//!     println!("pool size: {:?}", adapter.pool().size);
//!
//!     let client = adapter.new_client().await?;
//!     let info = client.info().await?;
//!     println!("connected to redis {}", info["redis_version"]);
//!     Ok(())
//! }
//! ```

// Re-export main types
pub use wg_core::{
    determine_redis_url, translate, ClientOptions, ClientOptionsBuilder, DeprecatedCommands,
    Driver, PoolSettings, RawOptions, Result, Role, SentinelAddr, Translated, WgError,
    DEPRECATED_COMMANDS,
};
pub use wg_redis::{CompatClient, Connection, RedisClientAdapter};
