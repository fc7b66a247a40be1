use std::any::Any;
use std::path::PathBuf;

use log::info;
use roster_states::{SnapshotClone, State, state_assign_impl};
use serde::Deserialize;

/// Default server for native builds (the admin site's development address).
pub const DEFAULT_NATIVE_BASE_URL: &str = "http://127.0.0.1:5000";

/// Where profile requests and linked pages are resolved.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    /// Empty means same-origin relative paths (web builds).
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Join a server path such as `/profile/student/7` onto the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                DEFAULT_NATIVE_BASE_URL.to_owned()
            },
        }
    }
}

impl SnapshotClone for BusinessConfig {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Which optional table controls the host page provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsConfig {
    pub primary_search: bool,
    pub secondary_search: bool,
    pub sort_selector: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            primary_search: true,
            secondary_search: true,
            sort_selector: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
    roster_table_seed: Option<String>,
    roster_primary_search: Option<bool>,
    roster_secondary_search: Option<bool>,
    roster_sort_selector: Option<bool>,
}

/// Startup settings for the native binary, read from `ROSTER_*` variables.
#[derive(Debug, Clone)]
pub struct RosterSettings {
    pub business: BusinessConfig,
    /// JSON file holding the server-rendered table rows.
    pub table_seed: Option<PathBuf>,
    pub controls: ControlsConfig,
}

impl RosterSettings {
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(std::env::vars())?;
        Self::from_raw(raw)
    }

    pub fn from_iter<S: AsRef<str>>(vars: impl IntoIterator<Item = (S, S)>) -> anyhow::Result<Self> {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            roster_api_base_url,
            roster_table_seed,
            roster_primary_search,
            roster_secondary_search,
            roster_sort_selector,
        } = raw;

        let business = match roster_api_base_url {
            Some(url) => {
                let url = url.trim().to_owned();
                if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
                    anyhow::bail!("ROSTER_API_BASE_URL must start with http:// or https://, got {url}");
                }
                info!("Using provided ROSTER_API_BASE_URL: {url}");
                BusinessConfig::new(url)
            }
            None => {
                let config = BusinessConfig::default();
                info!(
                    "ROSTER_API_BASE_URL not set, defaulting to {:?}",
                    config.api_base_url
                );
                config
            }
        };

        let defaults = ControlsConfig::default();
        let controls = ControlsConfig {
            primary_search: roster_primary_search.unwrap_or(defaults.primary_search),
            secondary_search: roster_secondary_search.unwrap_or(defaults.secondary_search),
            sort_selector: roster_sort_selector.unwrap_or(defaults.sort_selector),
        };

        Ok(Self {
            business,
            table_seed: roster_table_seed.map(PathBuf::from),
            controls,
        })
    }
}
