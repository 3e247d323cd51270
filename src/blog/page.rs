use std::sync::Arc;
use std::time::Instant;

use crate::blog::debounce::SearchDebouncer;
use crate::blog::engine::{BlogEngine, CategoryFilter};
use crate::config::SiteConfig;
use crate::models::post::PostCollection;
use crate::render::{self, ListingFragments};

/// Listing controller for one page load. Host-page events map onto these
/// methods; every state change returns the slot fragments to swap in.
#[derive(Debug, Clone)]
pub struct ListingPage {
    engine: BlogEngine,
    debouncer: SearchDebouncer,
    active_category: CategoryFilter,
    config: SiteConfig,
}

impl ListingPage {
    pub fn new(collection: Arc<PostCollection>, config: &SiteConfig) -> Self {
        ListingPage {
            engine: BlogEngine::new(collection, config.page_size),
            debouncer: SearchDebouncer::new(config.search_debounce()),
            active_category: CategoryFilter::All,
            config: config.clone(),
        }
    }

    /// Rebuild the state a visitor reaches by picking `category`, then
    /// searching `query`, then clicking "load more" until `page`.
    pub fn replay(
        collection: Arc<PostCollection>,
        config: &SiteConfig,
        query: Option<&str>,
        category: Option<&str>,
        page: usize,
    ) -> Self {
        let mut listing = Self::new(collection, config);
        if let Some(label) = category {
            listing.active_category = CategoryFilter::from_label(label);
            listing.engine.filter_category(&listing.active_category);
        }
        if let Some(q) = query {
            listing.search_now(q);
        }
        for _ in 1..page {
            if !listing.engine.load_more() {
                break;
            }
        }
        listing
    }

    pub fn engine(&self) -> &BlogEngine {
        &self.engine
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active_category
    }

    /// A keystroke in the search box. Nothing is recomputed until `tick`
    /// observes that the input went quiet. The listing script's input
    /// handler mirrors this with a `setTimeout` per keystroke.
    pub fn on_search_input(&mut self, query: &str, now: Instant) {
        self.debouncer.keystroke(query, now);
    }

    /// Run the pending search if its window has elapsed. Mirrored by the
    /// listing script's timer callback.
    pub fn tick(&mut self, now: Instant) -> Option<ListingFragments> {
        let query = self.debouncer.poll(now)?;
        log::debug!("[listing] search '{}'", query);
        self.engine.search(&query);
        Some(self.fragments())
    }

    /// Search immediately (form submit), dropping any pending keystroke.
    pub fn search_now(&mut self, query: &str) -> ListingFragments {
        self.debouncer.cancel();
        self.engine.search(query);
        self.fragments()
    }

    /// When `tick` should next be called. The listing script's timer holds
    /// the same deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// A filter button click. Overrides any active search.
    pub fn on_category(&mut self, label: &str) -> ListingFragments {
        self.active_category = CategoryFilter::from_label(label);
        self.engine.filter_category(&self.active_category);
        self.fragments()
    }

    /// "Load more" click. Scroll position is the host page's business; we
    /// only re-render the slots.
    pub fn on_load_more(&mut self) -> ListingFragments {
        self.engine.load_more();
        self.fragments()
    }

    pub fn fragments(&self) -> ListingFragments {
        render::listing_fragments(&self.engine.view(), &self.config)
    }
}
