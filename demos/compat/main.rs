//! Compat client demo.
//!
//! This demo shows:
//! - Translating a legacy options map (as a config file would hold it)
//! - Calling commands by name and through the legacy helpers
//! - Deprecation warnings, and how to silence them
//!
//! Prerequisites:
//! - Redis server running on localhost:6379 (or set REDIS_URL)
//!
//! Run with: `RUST_LOG=debug cargo run -p demo-compat`

use tracing_subscriber::EnvFilter;
use wg_core::{DeprecatedCommands, RawOptions};
use wg_redis::RedisClientAdapter;

const CONFIG: &str = r#"{
    "network_timeout": 5,
    "reconnect_attempts": null,
    "size": 10,
    "pool_timeout": 2,
    "id": "demo-compat"
}"#;

#[tokio::main]
async fn main() -> wg_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options: RawOptions = serde_json::from_str(CONFIG)?;
    let adapter = RedisClientAdapter::new(options)?;
    println!("client options: {:?}", adapter.config());
    println!("pool settings:  {:?}\n", adapter.pool());

    let client = adapter.new_client().await?;

    let info = client.info().await?;
    println!(
        "[info] redis_version={} role={}",
        info.get("redis_version").map(String::as_str).unwrap_or("?"),
        info.get("role").map(String::as_str).unwrap_or("?"),
    );

    // Legacy helpers: these log a deprecation warning.
    client.hmset("demo:user:1", &[("name", "ada"), ("lang", "rust")]).await?;
    client.setex("demo:session", 60, "token").await?;

    // Same commands by name.
    let name: String = client.call("HGET", ("demo:user:1", "name")).await?;
    let ttl: i64 = client.call("TTL", "demo:session").await?;
    println!("[call] name={} ttl={}s", name, ttl);

    // Quiet adapter: nothing is deprecated.
    let quiet = RedisClientAdapter::new(serde_json::from_str(CONFIG)?)?
        .with_deprecated_commands(DeprecatedCommands::none());
    let quiet_client = quiet.new_client().await?;
    let fresh: bool = quiet_client.setnx("demo:once", "1").await?;
    println!("[setnx] first write={}", fresh);

    client
        .call::<(), _>("DEL", ("demo:user:1", "demo:session", "demo:once"))
        .await?;
    println!("\nDone.");
    Ok(())
}
