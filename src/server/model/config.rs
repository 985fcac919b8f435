use anyhow::Context;
use std::env;
use std::net::SocketAddrV4;
use std::str::FromStr;

const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_JSON_LIMIT: usize = 256 * 1024;

/// Server configs
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// max accepted json body size, in bytes
    pub json_limit: usize,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, json_limit: usize) -> Self {
        Self {
            addr,
            json_limit,
        }
    }

    /// read configs from process envs
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or(DEFAULT_HOST_ADDR.to_string());
        let addr = SocketAddrV4::from_str(host.as_str())
            .with_context(|| format!("failed to parse HOST={host}"))?;
        let json_limit = match lookup("JSON_LIMIT") {
            Some(limit) => limit
                .parse::<usize>()
                .with_context(|| format!("failed to parse JSON_LIMIT={limit}"))?,
            None => DEFAULT_JSON_LIMIT,
        };
        Ok(Self::new(addr, json_limit))
    }
}
