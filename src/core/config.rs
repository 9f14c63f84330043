use std::env;
use log::LevelFilter;
use url::Url;

use crate::{
    Error,
    error::Result,
};

/// Environment variable naming the service endpoint root.
pub const ENV_API_BASE: &str = "HUDDLE_API_BASE";

const DEFAULT_API_BASE: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct Config {
    base_url : Url,
    log_level: LevelFilter,
}

impl Config {
    /// Resolves the endpoint root from `HUDDLE_API_BASE`, falling back
    /// to the development default when unset.
    pub fn from_env() -> Result<Self> {
        let base = env::var(ENV_API_BASE)
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self::with_base_url(&base)
    }

    pub fn with_base_url(base: &str) -> Result<Self> {
        let url = Url::parse(base).map_err(|e|
            Error::Argument(format!("Invalid api base url {}: {}", base, e))
        )?;

        Ok(Self {
            base_url : url,
            log_level: LevelFilter::Info,
        })
    }

    pub fn set_log_level(&mut self, level: LevelFilter) -> &mut Self {
        self.log_level = level;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
