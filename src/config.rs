use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    str::FromStr,
};

use anyhow::{anyhow, Context};

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const BIND_ADDR: &str = "BIND_ADDR";
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
const DEFAULT_MAX_CONNECTIONS: u32 = 16;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
        let database_url = lookup(DATABASE_URL).ok_or(anyhow!("{DATABASE_URL} must be set"))?;
        let bind_addr = parse_var(&lookup, BIND_ADDR, DEFAULT_BIND_ADDR)?;
        let max_connections = parse_var(&lookup, DATABASE_MAX_CONNECTIONS, DEFAULT_MAX_CONNECTIONS)?;

        if max_connections == 0 {
            return Err(anyhow!("{DATABASE_MAX_CONNECTIONS} must be at least 1"));
        }

        Ok(Config {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    raw.trim()
        .parse()
        .with_context(|| format!("invalid {key}: {raw:?}"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[(DATABASE_URL, "sqlite://messages.db")]).unwrap();
        assert_eq!(config.database_url, "sqlite://messages.db");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.max_connections, 16);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            (DATABASE_URL, "sqlite::memory:"),
            (BIND_ADDR, "127.0.0.1:3000"),
            (DATABASE_MAX_CONNECTIONS, "4"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_connections, 4);
    }

    #[test]
    fn database_url_is_required() {
        let err = config(&[]).unwrap_err();
        assert!(err.to_string().contains(DATABASE_URL));
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = config(&[(DATABASE_URL, "x"), (BIND_ADDR, "nowhere")]).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR));

        let err = config(&[(DATABASE_URL, "x"), (DATABASE_MAX_CONNECTIONS, "0")]).unwrap_err();
        assert!(err.to_string().contains(DATABASE_MAX_CONNECTIONS));
    }
}
