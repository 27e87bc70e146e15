use crate::error::{NotionError, Result};
use crate::ids;
use crate::urls;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const BASE_URL: &str = "https://www.notion.so/";
pub const SIGNED_URL_PREFIX: &str = "https://www.notion.so/signed/";
pub const S3_URL_PREFIX: &str = "https://s3-us-west-2.amazonaws.com/secure.notion-static.com/";

const CONFIG_FILENAME: &str = "config.json";

/// The keys accepted by [`NotionConfig::get`] and [`NotionConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["base-url", "signed-url-prefix", "s3-url-prefix"];

/// Service endpoints, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotionConfig {
    /// Prefix that marks a URL as a Notion page link
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Proxy prefix Notion uses to serve private files
    #[serde(default = "default_signed_url_prefix")]
    pub signed_url_prefix: String,

    /// Bucket prefix of uploaded files
    #[serde(default = "default_s3_url_prefix")]
    pub s3_url_prefix: String,
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_signed_url_prefix() -> String {
    SIGNED_URL_PREFIX.to_string()
}

fn default_s3_url_prefix() -> String {
    S3_URL_PREFIX.to_string()
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            signed_url_prefix: default_signed_url_prefix(),
            s3_url_prefix: default_s3_url_prefix(),
        }
    }
}

impl NotionConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotionConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        tracing::debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base-url" => Some(self.base_url.clone()),
            "signed-url-prefix" => Some(self.signed_url_prefix.clone()),
            "s3-url-prefix" => Some(self.s3_url_prefix.clone()),
            _ => None,
        }
    }

    /// Set a value by key. Values must be http(s) URLs ending in `/`, since
    /// they are matched as string prefixes.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = match key {
            "base-url" => &mut self.base_url,
            "signed-url-prefix" => &mut self.signed_url_prefix,
            "s3-url-prefix" => &mut self.s3_url_prefix,
            _ => return Err(NotionError::Config(format!("Unknown config key: {}", key))),
        };

        let is_http = value.starts_with("https://") || value.starts_with("http://");
        if !is_http || !value.ends_with('/') {
            return Err(NotionError::Config(format!(
                "{} must be an http(s) URL ending in '/': {}",
                key, value
            )));
        }

        *slot = value.to_string();
        Ok(())
    }

    pub fn extract_id(&self, url_or_id: &str) -> Result<String> {
        ids::extract_id_with_base(url_or_id, &self.base_url)
    }

    pub fn add_signed_prefix(&self, url: &str) -> String {
        urls::add_signed_prefix_with(url, &self.s3_url_prefix, &self.signed_url_prefix)
    }

    pub fn remove_signed_prefix(&self, url: &str) -> String {
        urls::remove_signed_prefix_with(url, &self.signed_url_prefix)
    }
}
