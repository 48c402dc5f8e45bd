//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Project feed settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Image probe and placeholder settings
    #[serde(default)]
    pub images: ImageConfig,

    /// Page rendering settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Mail relay settings
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.endpoint.trim().is_empty() {
            return Err(AppError::validation("source.endpoint is empty"));
        }
        for (field, value) in [
            ("source.endpoint", &self.source.endpoint),
            ("images.hosting_root", &self.images.hosting_root),
            ("contact.endpoint", &self.contact.endpoint),
        ] {
            url::Url::parse(value)
                .map_err(|e| AppError::validation(format!("{field} is not a valid URL: {e}")))?;
        }
        if self.source.user_agent.trim().is_empty() {
            return Err(AppError::validation("source.user_agent is empty"));
        }
        if self.source.timeout_secs == 0 {
            return Err(AppError::validation("source.timeout_secs must be > 0"));
        }
        if self.images.hosting_root.trim().is_empty() {
            return Err(AppError::validation("images.hosting_root is empty"));
        }
        if self.images.username.trim().is_empty() {
            return Err(AppError::validation("images.username is empty"));
        }
        if self.images.subpaths.is_empty() {
            return Err(AppError::validation("images.subpaths is empty"));
        }
        if self.images.max_concurrent == 0 {
            return Err(AppError::validation("images.max_concurrent must be > 0"));
        }
        if self.render.description_limit == 0 {
            return Err(AppError::validation("render.description_limit must be > 0"));
        }
        if self.render.name_limit == 0 {
            return Err(AppError::validation("render.name_limit must be > 0"));
        }
        if self.contact.endpoint.trim().is_empty() {
            return Err(AppError::validation("contact.endpoint is empty"));
        }
        Ok(())
    }
}

/// Project feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Aggregation endpoint returning the JSON repository array
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Image existence-probe and placeholder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Raw-content hosting root the candidate URLs are built on
    #[serde(default = "defaults::hosting_root")]
    pub hosting_root: String,

    /// Repository owner the candidates are probed under
    #[serde(default = "defaults::username")]
    pub username: String,

    /// Branch name in the candidate path
    #[serde(default = "defaults::branch")]
    pub branch: String,

    /// Conventional subpaths probed in order
    #[serde(default = "defaults::subpaths")]
    pub subpaths: Vec<String>,

    /// Maximum concurrent image resolutions
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            hosting_root: defaults::hosting_root(),
            username: defaults::username(),
            branch: defaults::branch(),
            subpaths: defaults::subpaths(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Page rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Page title
    #[serde(default = "defaults::page_title")]
    pub page_title: String,

    /// Description length before truncation kicks in
    #[serde(default = "defaults::description_limit")]
    pub description_limit: usize,

    /// Display-name length on placeholder graphics
    #[serde(default = "defaults::name_limit")]
    pub name_limit: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_title: defaults::page_title(),
            description_limit: defaults::description_limit(),
            name_limit: defaults::name_limit(),
        }
    }
}

/// Mail relay settings for contact submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Mail relay endpoint accepting the JSON submission body
    #[serde(default = "defaults::contact_endpoint")]
    pub endpoint: String,

    /// Address shown in the direct-contact fallback instructions
    #[serde(default = "defaults::fallback_email")]
    pub fallback_email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::contact_endpoint(),
            fallback_email: defaults::fallback_email(),
        }
    }
}

mod defaults {
    // Source defaults
    pub fn endpoint() -> String {
        "https://winter-mode-133a.mubin9516.workers.dev".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; folio/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Image defaults
    pub fn hosting_root() -> String {
        "https://raw.githubusercontent.com".into()
    }
    pub fn username() -> String {
        "mubin25-dodu".into()
    }
    pub fn branch() -> String {
        "main".into()
    }
    pub fn subpaths() -> Vec<String> {
        vec![
            "image".into(),
            "images".into(),
            "img".into(),
            "assets".into(),
            "screenshots".into(),
            "preview".into(),
        ]
    }
    pub fn max_concurrent() -> usize {
        5
    }

    // Render defaults
    pub fn page_title() -> String {
        "Projects".into()
    }
    pub fn description_limit() -> usize {
        100
    }
    pub fn name_limit() -> usize {
        15
    }

    // Contact defaults
    pub fn contact_endpoint() -> String {
        "https://formspree.io/f/mubin9516".into()
    }
    pub fn fallback_email() -> String {
        "mubin9516@gmail.com".into()
    }
}
