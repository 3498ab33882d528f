use std::fs;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Connection url handed to sea-orm, e.g. `postgres://…` or `sqlite://bands.db?mode=rwc`.
    pub database: String,
    #[serde(default = "default_host")]
    pub host: IpAddr,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error opening configuration file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
