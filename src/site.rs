use std::sync::Arc;

use crate::blog::loader::{self, PostSource};
use crate::config::SiteConfig;
use crate::errors::BlogError;
use crate::models::post::PostCollection;

/// Managed Rocket state: the config plus the outcome of the one-time
/// collection load. A failed load stays failed for the process lifetime.
pub struct SiteState {
    pub config: SiteConfig,
    pub catalog: Result<Arc<PostCollection>, BlogError>,
}

impl SiteState {
    /// Load the configured collection. Failure is kept, not retried.
    pub fn load(config: SiteConfig) -> Self {
        let catalog = PostSource::parse(&config.posts_source)
            .and_then(|source| loader::load_posts(&source, config.fetch_timeout()))
            .map(Arc::new);

        if let Err(e) = &catalog {
            log::error!("[posts] {}", e);
        }

        SiteState { config, catalog }
    }

    pub fn with_collection(config: SiteConfig, collection: PostCollection) -> Self {
        SiteState {
            config,
            catalog: Ok(Arc::new(collection)),
        }
    }
}
