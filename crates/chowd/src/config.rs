//! Configuration management for chowd.
//!
//! Layering, lowest to highest: built-in defaults, an optional TOML file named
//! by `$CHOWD_CONFIG`, a `.env` file in the working directory, then process
//! environment variables.

use anyhow::{Context, Result};
use chow_common::DEFAULT_TTL_SECS;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable naming an optional TOML config file
pub const CONFIG_ENV: &str = "CHOWD_CONFIG";

/// Daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Blog post scraped as the primary listing source (`CHOWDECK_URL`)
    #[serde(default = "default_chowdeck_url")]
    pub chowdeck_url: String,

    /// Topical "get it here" posts scraped in addition to `chowdeck_url`
    #[serde(default = "default_blog_posts")]
    pub blog_posts: Vec<String>,

    /// Catalog cache lifetime in seconds (`CACHE_TIMEOUT`)
    #[serde(default = "default_cache_timeout")]
    pub cache_timeout_secs: u64,

    /// Use the store-page scraper instead of the blog scraper (`USE_DYNAMIC_SCRAPER`)
    #[serde(default)]
    pub use_dynamic_scraper: bool,

    /// Per-request timeout for scrape targets (`SCRAPE_TIMEOUT`)
    #[serde(default = "default_scrape_timeout")]
    pub scrape_timeout_secs: u64,

    /// Listen host (`HOST`)
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port (`PORT`)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_chowdeck_url() -> String {
    "https://chowdeck.com/blog/get-it-here-jollof-rice-on-chowdeck".to_string()
}

fn default_blog_posts() -> Vec<String> {
    [
        "https://chowdeck.com/blog/get-it-here-pizza-on-chowdeck",
        "https://chowdeck.com/blog/get-it-here-chinese-food-on-chowdeck",
        "https://chowdeck.com/blog/get-it-here-shawarma-on-chowdeck",
        "https://chowdeck.com/blog/get-it-here-suya-on-chowdeck",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_cache_timeout() -> u64 {
    DEFAULT_TTL_SECS
}

fn default_scrape_timeout() -> u64 {
    30
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chowdeck_url: default_chowdeck_url(),
            blog_posts: default_blog_posts(),
            cache_timeout_secs: default_cache_timeout(),
            use_dynamic_scraper: false,
            scrape_timeout_secs: default_scrape_timeout(),
            host: default_host(),
            port: default_port(),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

impl Config {
    /// Load from `$CHOWD_CONFIG`, `.env` and the environment
    pub fn load() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!("Ignoring unreadable .env file: {}", e);
            }
        }

        let base = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };

        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Parse a TOML config file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply environment-style overrides from `lookup`.
    ///
    /// Unparseable numbers are logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CHOWDECK_URL").filter(|v| !v.trim().is_empty()) {
            self.chowdeck_url = url;
        }
        if let Some(v) = lookup("CACHE_TIMEOUT") {
            match v.trim().parse() {
                Ok(secs) => self.cache_timeout_secs = secs,
                Err(_) => warn!("Invalid CACHE_TIMEOUT '{}', keeping {}", v, self.cache_timeout_secs),
            }
        }
        if let Some(v) = lookup("USE_DYNAMIC_SCRAPER") {
            self.use_dynamic_scraper = parse_bool(&v);
        }
        if let Some(v) = lookup("SCRAPE_TIMEOUT") {
            match v.trim().parse() {
                Ok(secs) => self.scrape_timeout_secs = secs,
                Err(_) => warn!("Invalid SCRAPE_TIMEOUT '{}', keeping {}", v, self.scrape_timeout_secs),
            }
        }
        if let Some(host) = lookup("HOST").filter(|v| !v.trim().is_empty()) {
            self.host = host;
        }
        if let Some(v) = lookup("PORT") {
            match v.trim().parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!("Invalid PORT '{}', keeping {}", v, self.port),
            }
        }
        self
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_timeout_secs)
    }

    pub fn scrape_timeout(&self) -> Duration {
        Duration::from_secs(self.scrape_timeout_secs)
    }

    /// Every blog post to scrape, `chowdeck_url` first, without repeats
    pub fn blog_urls(&self) -> Vec<String> {
        let mut urls = vec![self.chowdeck_url.clone()];
        for url in &self.blog_posts {
            if !urls.contains(url) {
                urls.push(url.clone());
            }
        }
        urls
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
