//! Redis client adapter for wg.
//!
//! This crate turns wg's loosely-typed Redis options into a `redis-rs`
//! client and hands out [`CompatClient`]s that keep legacy call sites working.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wg_redis::RedisClientAdapter;
//!
//! #[tokio::main]
//! async fn main() -> wg_core::Result<()> {
//!     let options = serde_json::json!({"url": "redis://localhost", "network_timeout": 3});
//!     let adapter = RedisClientAdapter::new(options.as_object().unwrap().clone())?;
//!     let client = adapter.new_client().await?;
//!
//!     // Legacy helpers still work, with a deprecation warning.
//!     client.hmset("user:1", &[("name", "ada")]).await?;
//!     // Any command can be sent by name.
//!     let name: String = client.call("HGET", ("user:1", "name")).await?;
//!     assert_eq!(name, "ada");
//!     Ok(())
//! }
//! ```

mod adapter;
mod compat;
mod connection;

pub use adapter::{connection_info, RedisClientAdapter};
pub use compat::{parse_info, CompatClient};
pub use connection::Connection;

use redis::RedisError;
use wg_core::WgError;

/// Map a `redis-rs` error: error replies from the server become
/// [`WgError::Command`], everything else [`WgError::Backend`].
pub(crate) fn redis_error(e: RedisError) -> WgError {
    if e.code().is_some() {
        WgError::Command(e.to_string())
    } else {
        WgError::Backend(e.to_string())
    }
}


// ========== Integration Tests (require Redis) ==========
