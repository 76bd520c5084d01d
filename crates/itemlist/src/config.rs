use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use itemlist_fetch::{DEFAULT_URL, FetchOptions, OrderingPolicy};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "itemlist.toml";
pub const ENV_PREFIX: &str = "ITEMLIST_";

/// Free-text keys taken from the environment verbatim, so values such as
/// `ITEMLIST_USER_AGENT=1.0` are not parsed into numbers or booleans.
const VERBATIM_ENV_KEYS: &[&str] = &["url", "user_agent"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Resolved settings for one run.
///
/// Layered lowest to highest: built-in defaults, the TOML file,
/// `ITEMLIST_*` environment variables, command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub url: String,
    pub policy: OrderingPolicy,
    pub format: OutputFormat,
    pub grouped: bool,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            policy: OrderingPolicy::default(),
            format: OutputFormat::default(),
            grouped: false,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

/// Command-line settings; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<OrderingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Config {
    /// Load the layered configuration.
    ///
    /// An explicit `path` must exist; the default file is read only if present.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        match path {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file {} does not exist", path.display());
                }
                figment = figment.merge(Toml::file_exact(path));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                figment = figment.merge(Toml::file_exact(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(VERBATIM_ENV_KEYS));
        for key in VERBATIM_ENV_KEYS {
            let var = format!("{ENV_PREFIX}{}", key.to_ascii_uppercase());
            if let Ok(value) = std::env::var(&var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        let config: Config = figment
            .merge(Serialized::defaults(overrides))
            .extract()
            .context("invalid configuration")?;

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> { self.timeout_secs.map(Duration::from_secs) }

    pub fn fetch_options(&self) -> FetchOptions {
        let options = FetchOptions::default().timeout(self.timeout());
        match &self.user_agent {
            Some(ua) => options.header("User-Agent", ua.as_str()),
            None => options,
        }
    }
}
