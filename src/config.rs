//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/research-explorer/config.toml` (XDG) or platform config dir
//! 3. Project config: `explorer.toml`
//! 4. Environment variables: `EXPLORER_*`, sections separated by `__`
//!
//! # Intended Usage
//!
//! **Project config** (`explorer.toml` next to the data directory):
//! ```toml
//! [server]
//! port = 8000
//! cors_origins = ["http://localhost:5173"]
//!
//! [store]
//! data_dir = "/srv/explorer/data"
//! query_timeout_ms = 5000
//! files = [
//!     "cleaned/cleaned_persons.ttl",
//!     "ontology/vocabulary.ttl",
//! ]
//! ```
//!
//! The file list is ordered. It is loaded once at startup; a file that is
//! missing or fails to parse is skipped with a warning.

use std::ops::Deref;
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Path prefix every API route is nested under.
    pub api_prefix: String,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            api_prefix: "/api/v1".to_string(),
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:5174".to_string(),
                "http://127.0.0.1:5173".to_string(),
                "http://127.0.0.1:5174".to_string(),
            ],
        }
    }
}

/// Graph store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory the data files are resolved against.
    pub data_dir: PathBuf,
    /// Serialized triple files, loaded in this order.
    pub files: Vec<String>,
    /// Upper bound for a single query, in milliseconds.
    pub query_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            files: DEFAULT_DATA_FILES.iter().map(|f| f.to_string()).collect(),
            query_timeout_ms: 10_000,
        }
    }
}

/// Data files shipped with the explorer, in load order.
pub const DEFAULT_DATA_FILES: &[&str] = &[
    "cleaned/cleaned_persons.ttl",
    "cleaned/cleaned_works.ttl",
    "cleaned/cleaned_places.ttl",
    "cleaned/cleaned_subjects.ttl",
    "cleaned/cleaned_scholarly.ttl",
    "cleaned/cleaned_sources.ttl",
    "ontology/vocabulary.ttl",
    "cleaned/cleaned_other.ttl",
    "wikidata_place_coordinates.ttl",
    "wikidata_place_relations_new.ttl",
    "wikidata_places_new.ttl",
    "wikidata_time_relations.ttl",
    "wikidata_persons.ttl",
    "wikidata_works.ttl",
    "place_relations.ttl",
    "time_data.ttl",
];

impl StoreConfig {
    /// Per-query timeout as a Duration.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Absolute-or-relative paths of the data files, in load order.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| self.data_dir.join(f)).collect()
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(Self::user_config_path(), "explorer.toml")
            .extract()
            .map_err(ConfigError::from)
    }

    fn figment(user_config: PathBuf, project_config: &str) -> Figment {
        Figment::new()
            // Layer 1: Defaults (lowest priority)
            .merge(Serialized::defaults(Config::default()))
            // Layer 2: User config
            .merge(Toml::file(user_config))
            // Layer 3: Project config
            .merge(Toml::file(project_config))
            // Layer 4: Environment variables (highest priority)
            .merge(Env::prefixed("EXPLORER_").split("__"))
    }

    /// User config path: ~/.config/research-explorer/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home
                .join(".config")
                .join("research-explorer")
                .join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("research-explorer").join("config.toml"))
            .unwrap_or_default()
    }
}
