use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "Blogdeck.toml";
pub const CONFIG_PATH_ENV: &str = "BLOGDECK_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Site settings read from `Blogdeck.toml`. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// Public base URL, used to build share links.
    pub site_url: String,
    /// File path or http(s) URL of the post collection.
    pub posts_source: String,
    pub page_size: usize,
    pub search_debounce_ms: u64,
    pub related_limit: usize,
    pub date_format: String,
    pub static_dir: String,
    pub fetch_timeout_secs: u64,
    pub nav_links: Vec<NavLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "MindMatrix AIML Academy".to_string(),
            site_url: "http://localhost:8000".to_string(),
            posts_source: "assets/data/blog-posts.json".to_string(),
            page_size: 6,
            search_debounce_ms: 300,
            related_limit: 3,
            date_format: "%B %-d, %Y".to_string(),
            static_dir: "website/static".to_string(),
            fetch_timeout_secs: 10,
            nav_links: vec![
                NavLink { label: "Home".into(), href: "/".into() },
                NavLink { label: "Blog".into(), href: "/blog".into() },
                NavLink { label: "Contact".into(), href: "/contact".into() },
            ],
        }
    }
}

impl SiteConfig {
    /// Load from the path in `BLOGDECK_CONFIG`, or `Blogdeck.toml`.
    pub fn load() -> Result<Self, String> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// A missing file yields defaults; an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            log::warn!("{} not found, using default site config", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        Self::from_toml(&raw).map_err(|e| format!("{}: {}", path.display(), e))
    }

    pub fn from_toml(raw: &str) -> Result<Self, String> {
        let mut config: SiteConfig = toml::from_str(raw).map_err(|e| e.to_string())?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }

    /// Absolute URL of a detail page, as the visitor sees it.
    pub fn post_page_url(&self, id: &str) -> String {
        format!(
            "{}/blog-post?id={}",
            self.site_url.trim_end_matches('/'),
            crate::share::encode_component(id)
        )
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.max(1))
    }
}
