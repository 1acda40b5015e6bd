//! Compat client: the adapter's connection plus the legacy calling surface.
//!
//! Besides the native `redis::AsyncCommands` API (the client is itself a
//! `ConnectionLike`), the compat client accepts commands by name through
//! [`CompatClient::call`] and keeps the legacy named helpers working. Calls
//! to commands in the deprecated set log a warning with the caller location.

use redis::aio::ConnectionLike;
use redis::{Cmd, FromRedisValue, Pipeline, RedisFuture, ToRedisArgs, Value};
use std::collections::HashMap;
use std::future::Future;
use std::panic::Location;
use std::sync::Arc;

use wg_core::{ClientOptions, DeprecatedCommands, Result};

use crate::connection::Connection;
use crate::redis_error;

/// A connection wrapped with the legacy command surface.
#[derive(Clone)]
pub struct CompatClient<C = Connection> {
    conn: C,
    config: Arc<ClientOptions>,
    deprecated: Arc<DeprecatedCommands>,
}

impl<C> CompatClient<C>
where
    C: ConnectionLike + Clone + Send,
{
    /// Wrap an existing connection.
    pub fn new(conn: C, config: Arc<ClientOptions>, deprecated: Arc<DeprecatedCommands>) -> Self {
        Self {
            conn,
            config,
            deprecated,
        }
    }

    /// The options this client was created from.
    pub fn config(&self) -> &ClientOptions {
        &self.config
    }

    pub fn deprecated_commands(&self) -> &DeprecatedCommands {
        &self.deprecated
    }

    /// Get a reference to the inner connection.
    pub fn inner(&self) -> &C {
        &self.conn
    }

    pub fn into_inner(self) -> C {
        self.conn
    }

    /// Send `command` with `args` and convert the reply.
    ///
    /// ```rust,ignore
    /// let value: Option<String> = client.call("GET", "greeting").await?;
    /// client.call::<(), _>("HMSET", ("user:1", "name", "ada")).await?;
    /// ```
    #[track_caller]
    pub fn call<T, A>(&self, command: &str, args: A) -> impl Future<Output = Result<T>>
    where
        T: FromRedisValue,
        A: ToRedisArgs,
    {
        let mut cmd = self.command(command);
        cmd.arg(args);
        self.query(cmd)
    }

    /// Send `command` without arguments.
    ///
    /// `call` needs an argument value and `()` packs nothing for redis-rs,
    /// so either use this or pass an empty slice such as `&[] as &[&str]`.
    ///
    /// ```rust,ignore
    /// let pong: String = client.call0("PING").await?;
    /// ```
    #[track_caller]
    pub fn call0<T>(&self, command: &str) -> impl Future<Output = Result<T>>
    where
        T: FromRedisValue,
    {
        self.query(self.command(command))
    }

    /// `CLIENT SETNAME name`.
    ///
    /// The name lives on the server side of one connection. A direct client
    /// that reconnected has lost it and needs this call again.
    pub async fn set_client_name(&self, name: &str) -> Result<()> {
        let mut cmd = redis::cmd("CLIENT");
        cmd.arg("SETNAME").arg(name);
        self.query(cmd).await
    }

    /// `INFO`, parsed into its `field:value` pairs.
    pub async fn info(&self) -> Result<HashMap<String, String>> {
        let text: String = self.query(redis::cmd("INFO")).await?;
        Ok(parse_info(&text))
    }

    /// `EVALSHA sha numkeys key... arg...`.
    pub async fn evalsha<T, K, A>(&self, sha: &str, keys: &[K], argv: &[A]) -> Result<T>
    where
        T: FromRedisValue,
        K: ToRedisArgs,
        A: ToRedisArgs,
    {
        let mut cmd = redis::cmd("EVALSHA");
        cmd.arg(sha).arg(keys.len()).arg(keys).arg(argv);
        self.query(cmd).await
    }

    // Legacy helpers. Each one goes through the deprecation check.

    #[track_caller]
    pub fn hmset<K, F, V>(&self, key: K, items: &[(F, V)]) -> impl Future<Output = Result<()>>
    where
        K: ToRedisArgs,
        F: ToRedisArgs,
        V: ToRedisArgs,
    {
        let mut cmd = self.command("hmset");
        cmd.arg(key).arg(items);
        self.query(cmd)
    }

    #[track_caller]
    pub fn setex<K, V>(&self, key: K, seconds: u64, value: V) -> impl Future<Output = Result<()>>
    where
        K: ToRedisArgs,
        V: ToRedisArgs,
    {
        let mut cmd = self.command("setex");
        cmd.arg(key).arg(seconds).arg(value);
        self.query(cmd)
    }

    #[track_caller]
    pub fn setnx<K, V>(&self, key: K, value: V) -> impl Future<Output = Result<bool>>
    where
        K: ToRedisArgs,
        V: ToRedisArgs,
    {
        let mut cmd = self.command("setnx");
        cmd.arg(key).arg(value);
        self.query(cmd)
    }

    #[track_caller]
    pub fn getset<T, K, V>(&self, key: K, value: V) -> impl Future<Output = Result<T>>
    where
        T: FromRedisValue,
        K: ToRedisArgs,
        V: ToRedisArgs,
    {
        let mut cmd = self.command("getset");
        cmd.arg(key).arg(value);
        self.query(cmd)
    }

    #[track_caller]
    pub fn rpoplpush<T, S, D>(&self, source: S, destination: D) -> impl Future<Output = Result<T>>
    where
        T: FromRedisValue,
        S: ToRedisArgs,
        D: ToRedisArgs,
    {
        let mut cmd = self.command("rpoplpush");
        cmd.arg(source).arg(destination);
        self.query(cmd)
    }

    #[track_caller]
    pub fn zrangebyscore<T, K, M, N>(
        &self,
        key: K,
        min: M,
        max: N,
    ) -> impl Future<Output = Result<T>>
    where
        T: FromRedisValue,
        K: ToRedisArgs,
        M: ToRedisArgs,
        N: ToRedisArgs,
    {
        let mut cmd = self.command("zrangebyscore");
        cmd.arg(key).arg(min).arg(max);
        self.query(cmd)
    }

    #[track_caller]
    pub fn zrevrange<T, K>(
        &self,
        key: K,
        start: isize,
        stop: isize,
    ) -> impl Future<Output = Result<T>>
    where
        T: FromRedisValue,
        K: ToRedisArgs,
    {
        let mut cmd = self.command("zrevrange");
        cmd.arg(key).arg(start).arg(stop);
        self.query(cmd)
    }

    #[track_caller]
    pub fn zrevrangebyscore<T, K, M, N>(
        &self,
        key: K,
        max: M,
        min: N,
    ) -> impl Future<Output = Result<T>>
    where
        T: FromRedisValue,
        K: ToRedisArgs,
        M: ToRedisArgs,
        N: ToRedisArgs,
    {
        let mut cmd = self.command("zrevrangebyscore");
        cmd.arg(key).arg(max).arg(min);
        self.query(cmd)
    }

    /// Start a command, warning first if it is deprecated.
    #[track_caller]
    fn command(&self, name: &str) -> Cmd {
        if self.deprecated.contains(name) {
            let caller = Location::caller();
            tracing::warn!(
                command = %name,
                caller = %caller,
                "Redis has deprecated the `{}` command, called at {}",
                name,
                caller
            );
        }
        redis::cmd(name)
    }

    fn query<T>(&self, cmd: Cmd) -> impl Future<Output = Result<T>>
    where
        T: FromRedisValue,
    {
        let mut conn = self.conn.clone();
        async move { cmd.query_async::<T>(&mut conn).await.map_err(redis_error) }
    }
}

impl<C: ConnectionLike> ConnectionLike for CompatClient<C> {
    fn req_packed_command<'a>(&'a mut self, cmd: &'a Cmd) -> RedisFuture<'a, Value> {
        self.conn.req_packed_command(cmd)
    }

    fn req_packed_commands<'a>(
        &'a mut self,
        cmd: &'a Pipeline,
        offset: usize,
        count: usize,
    ) -> RedisFuture<'a, Vec<Value>> {
        self.conn.req_packed_commands(cmd, offset, count)
    }

    fn get_db(&self) -> i64 {
        self.conn.get_db()
    }
}

/// Parse `INFO` output. Section headers and blank lines carry no `:` and
/// are dropped; values keep any further colons.
pub fn parse_info(text: &str) -> HashMap<String, String> {
    text.lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect()
}
