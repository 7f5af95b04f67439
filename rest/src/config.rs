use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Process configuration, read once at startup.
pub struct Config {
    pub notion_api_key: String,
    pub database_id: Option<String>,
    pub addr: SocketAddr,
    /// Origins allowed by the CORS layer. Empty disables the layer.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        return Self::from_lookup(|key| std::env::var(key).ok());
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let notion_api_key = non_empty("NOTION_API_KEY").context("NOTION_API_KEY from .env file")?;
        let database_id = lookup("NOTION_DATABASE_ID");
        let host = match non_empty("HOST") {
            Some(host) => host
                .parse::<IpAddr>()
                .context(format!("Parsing HOST={host}"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match non_empty("PORT") {
            Some(port) => port
                .parse::<u16>()
                .context(format!("Parsing PORT={port}"))?,
            None => DEFAULT_PORT,
        };
        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_owned)
                .collect(),
            None => {
                let mut origins = vec![DEFAULT_ALLOWED_ORIGIN.to_owned()];
                if let Some(url) = non_empty("PRODUCTION_REACT_APP_URL") {
                    origins.push(url);
                }
                origins
            }
        };

        return Ok(Self {
            notion_api_key,
            database_id,
            addr: SocketAddr::new(host, port),
            allowed_origins,
        });
    }

    pub fn database_id(&self) -> Option<&str> {
        return self.database_id.as_deref().filter(|id| !id.trim().is_empty());
    }
}
