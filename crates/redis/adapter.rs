//! Adapter from wg's Redis options to a `redis-rs` client.

use redis::aio::{ConnectionLike, ConnectionManager, ConnectionManagerConfig};
use redis::sentinel::{SentinelClient, SentinelNodeConnectionInfo, SentinelServerType};
use redis::{
    AsyncConnectionConfig, ConnectionAddr, ConnectionInfo, IntoConnectionInfo,
    RedisConnectionInfo, TlsMode,
};
use std::sync::Arc;
use std::time::Duration;

use wg_core::{
    translate, ClientOptions, DeprecatedCommands, PoolSettings, RawOptions, Result, Role,
    SentinelAddr, WgError,
};

use crate::compat::CompatClient;
use crate::connection::Connection;
use crate::redis_error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 6379;

/// Builds compat clients from a translated options mapping.
///
/// ```rust,no_run
/// use wg_redis::RedisClientAdapter;
///
/// #[tokio::main]
/// async fn main() -> wg_core::Result<()> {
///     let options = serde_json::json!({
///         "url": "redis://localhost:6379/0",
///         "network_timeout": 5,
///         "size": 10,
///     });
///     let adapter = RedisClientAdapter::new(options.as_object().unwrap().clone())?;
///     let client = adapter.new_client().await?;
///     let info = client.info().await?;
///     println!("redis {}", info["redis_version"]);
///     Ok(())
/// }
/// ```
pub struct RedisClientAdapter {
    config: Arc<ClientOptions>,
    pool: PoolSettings,
    target: Target,
    deprecated: Arc<DeprecatedCommands>,
}

enum Target {
    Direct(redis::Client),
    Sentinel(SentinelTarget),
}

struct SentinelTarget {
    nodes: Vec<ConnectionInfo>,
    master_name: String,
    role: Role,
    tls: bool,
    node_info: RedisConnectionInfo,
}

impl SentinelTarget {
    fn client(&self) -> Result<SentinelClient> {
        let server_type = match self.role {
            Role::Master => SentinelServerType::Master,
            Role::Replica => SentinelServerType::Replica,
        };
        SentinelClient::build(
            self.nodes.clone(),
            self.master_name.clone(),
            Some(SentinelNodeConnectionInfo {
                tls_mode: self.tls.then_some(TlsMode::Secure),
                redis_connection_info: Some(self.node_info.clone()),
            }),
            server_type,
        )
        .map_err(redis_error)
    }
}

impl RedisClientAdapter {
    /// Create an adapter from a loosely-typed options mapping.
    ///
    /// When the options name no server, the URL is taken from the
    /// environment (`REDIS_PROVIDER`, then `REDIS_URL`).
    pub fn new(options: RawOptions) -> Result<Self> {
        let translated = translate(&options)?;
        let client = translated
            .client
            .or_env_url(|name| std::env::var(name).ok())?;
        Self::build(client, translated.pool)
    }

    /// Create an adapter from already typed options.
    pub fn from_options(options: ClientOptions) -> Result<Self> {
        Self::build(options, PoolSettings::default())
    }

    fn build(config: ClientOptions, pool: PoolSettings) -> Result<Self> {
        let target = if config.is_sentinel() {
            let target = sentinel_target(&config)?;
            // Fails here on malformed sentinel addresses.
            target.client()?;
            Target::Sentinel(target)
        } else {
            let info = connection_info(&config)?;
            Target::Direct(redis::Client::open(info).map_err(redis_error)?)
        };

        if let Some(driver) = &config.driver {
            tracing::debug!(
                driver = %driver,
                "Driver option has no effect on redis-rs connections"
            );
        }
        tracing::info!(
            options = ?config,
            sentinel = config.is_sentinel(),
            "Redis client adapter configured"
        );

        Ok(Self {
            config: Arc::new(config),
            pool,
            target,
            deprecated: Arc::new(DeprecatedCommands::default()),
        })
    }

    /// Replace the set of commands that warn when called.
    pub fn with_deprecated_commands(mut self, deprecated: DeprecatedCommands) -> Self {
        self.deprecated = Arc::new(deprecated);
        self
    }

    /// The translated client options.
    pub fn config(&self) -> &ClientOptions {
        &self.config
    }

    /// Pool settings split off from the options.
    pub fn pool(&self) -> &PoolSettings {
        &self.pool
    }

    pub fn deprecated_commands(&self) -> &DeprecatedCommands {
        &self.deprecated
    }

    /// Open a new connection and wrap it in a compat client.
    ///
    /// Direct connections reconnect up to `reconnect_attempts` times.
    /// Sentinel connections do not reconnect; open a new client instead.
    /// The `id` name is sent once here, so it is gone after a reconnect
    /// until [`CompatClient::set_client_name`] is called again.
    pub async fn new_client(&self) -> Result<CompatClient> {
        let timeouts = Timeouts::from_options(&self.config);
        let conn = match &self.target {
            Target::Direct(client) => {
                let mut config = ConnectionManagerConfig::new()
                    .set_number_of_retries(self.config.reconnect_attempts);
                if let Some(timeout) = timeouts.response {
                    config = config.set_response_timeout(timeout);
                }
                if let Some(timeout) = timeouts.connect {
                    config = config.set_connection_timeout(timeout);
                }
                let manager = ConnectionManager::new_with_config(client.clone(), config)
                    .await
                    .map_err(redis_error)?;
                Connection::Direct(manager)
            }
            Target::Sentinel(target) => {
                let mut config = AsyncConnectionConfig::new();
                if let Some(timeout) = timeouts.response {
                    config = config.set_response_timeout(timeout);
                }
                if let Some(timeout) = timeouts.connect {
                    config = config.set_connection_timeout(timeout);
                }
                let conn = target
                    .client()?
                    .get_async_connection_with_config(&config)
                    .await
                    .map_err(redis_error)?;
                Connection::Sentinel(conn)
            }
        };

        let client = CompatClient::new(conn, self.config.clone(), self.deprecated.clone());
        if let Some(id) = &self.config.id {
            client.set_client_name(id).await?;
        }

        tracing::debug!(
            sentinel = self.config.is_sentinel(),
            db = client.inner().get_db(),
            "Redis connection established"
        );
        Ok(client)
    }
}

/// Timeouts shared by direct and sentinel connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timeouts {
    connect: Option<Duration>,
    response: Option<Duration>,
}

impl Timeouts {
    fn from_options(options: &ClientOptions) -> Self {
        Self {
            connect: options.effective_connect_timeout(),
            response: options.effective_response_timeout(),
        }
    }
}

/// Connection info for a standalone server.
///
/// `url` wins over `path`, which wins over `host`/`port`. Explicit `db`,
/// `username` and `password` override whatever the URL carries.
pub fn connection_info(options: &ClientOptions) -> Result<ConnectionInfo> {
    let mut info = if let Some(url) = &options.url {
        url.as_str().into_connection_info().map_err(redis_error)?
    } else if let Some(path) = &options.path {
        format!("redis+unix://{}", path)
            .into_connection_info()
            .map_err(redis_error)?
    } else {
        let host = options.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = options.port.unwrap_or(DEFAULT_PORT);
        if options.ssl {
            format!("rediss://{}:{}", host, port)
                .into_connection_info()
                .map_err(redis_error)?
        } else {
            ConnectionInfo {
                addr: ConnectionAddr::Tcp(host, port),
                redis: RedisConnectionInfo::default(),
            }
        }
    };
    apply_credentials(&mut info.redis, options);
    Ok(info)
}

fn apply_credentials(redis: &mut RedisConnectionInfo, options: &ClientOptions) {
    if let Some(db) = options.db {
        redis.db = db;
    }
    if let Some(username) = &options.username {
        redis.username = Some(username.clone());
    }
    if let Some(password) = &options.password {
        redis.password = Some(password.clone());
    }
}

fn sentinel_target(options: &ClientOptions) -> Result<SentinelTarget> {
    let addrs = options.sentinels.as_deref().unwrap_or_default();
    if addrs.is_empty() {
        return Err(WgError::config("`sentinels` must list at least one sentinel"));
    }
    let master_name = options.name.clone().ok_or_else(|| {
        WgError::config("`name` (or `master_name`) is required when `sentinels` is set")
    })?;

    let nodes = addrs
        .iter()
        .map(|addr| sentinel_node(addr, options))
        .collect::<Result<Vec<_>>>()?;

    let mut node_info = RedisConnectionInfo::default();
    apply_credentials(&mut node_info, options);

    Ok(SentinelTarget {
        nodes,
        master_name,
        role: options.role.unwrap_or(Role::Master),
        tls: options.ssl,
        node_info,
    })
}

fn sentinel_node(addr: &SentinelAddr, options: &ClientOptions) -> Result<ConnectionInfo> {
    let mut info = match addr {
        SentinelAddr::Url(url) => url.as_str().into_connection_info().map_err(redis_error)?,
        SentinelAddr::Host { host, port } => ConnectionInfo {
            addr: ConnectionAddr::Tcp(host.clone(), *port),
            redis: RedisConnectionInfo::default(),
        },
    };
    if let Some(username) = &options.sentinel_username {
        info.redis.username = Some(username.clone());
    }
    if let Some(password) = &options.sentinel_password {
        info.redis.password = Some(password.clone());
    }
    Ok(info)
}
