use crate::shared::core::primitives::{Days, EmployeeId, ManagerId};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9000";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_filter: String,
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("LEAVES_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr))?;

        let log_filter =
            lookup("LEAVES_LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let seed_file = lookup("LEAVES_SEED_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            bind_addr,
            log_filter,
            seed_file,
        })
    }

    pub fn load_seed(&self) -> Result<Seed, ConfigError> {
        match &self.seed_file {
            Some(path) => Seed::from_file(path),
            None => Ok(Seed::default()),
        }
    }
}

/// Initial directory and ledger contents for the in-memory adapters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub managers: HashMap<ManagerId, Vec<EmployeeId>>,
    pub balances: HashMap<EmployeeId, Days>,
}

impl Seed {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LEAVES_BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(String),

    #[error("cannot read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid seed file: {0}")]
    SeedParse(#[from] serde_json::Error),
}
