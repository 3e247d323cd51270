use std::sync::Arc;
use std::time::Duration;

use crate::blog::loader::{self, PostSource};
use crate::errors::BlogError;
use crate::models::post::{Post, PostCollection};

/// Sentinel label of the "show everything" filter button.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(c) => c,
        }
    }
}

/// What the listing shows for the current `(visible posts, page)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<'a> {
    /// First visible post, kept out of the grid.
    pub featured: Option<&'a Post>,
    pub grid: Vec<&'a Post>,
    /// Whether "load more" still has something to reveal.
    pub has_more: bool,
}

impl ListingView<'_> {
    pub fn no_results(&self) -> bool {
        self.grid.is_empty()
    }
}

/// Listing state for one page load: the shared collection, the current
/// filtered view (indices, newest first) and the pagination cursor.
#[derive(Debug, Clone)]
pub struct BlogEngine {
    collection: Arc<PostCollection>,
    visible: Vec<usize>,
    page_number: usize,
    page_size: usize,
}

impl BlogEngine {
    pub fn new(collection: Arc<PostCollection>, page_size: usize) -> Self {
        let visible = collection.newest_first().to_vec();
        BlogEngine {
            collection,
            visible,
            page_number: 1,
            page_size: page_size.max(1),
        }
    }

    /// Load and wrap a collection in one step. The server loads once through
    /// `SiteState::load` and builds an engine per request instead.
    pub fn load(source: &PostSource, page_size: usize, timeout: Duration) -> Result<Self, BlogError> {
        let collection = loader::load_posts(source, timeout)?;
        Ok(Self::new(Arc::new(collection), page_size))
    }

    pub fn collection(&self) -> &Arc<PostCollection> {
        &self.collection
    }

    pub fn all_posts(&self) -> &[Post] {
        self.collection.posts()
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        self.visible
            .iter()
            .filter_map(|&i| self.collection.get(i))
            .collect()
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Case-insensitive substring search over title, excerpt, content and
    /// category. An empty query shows everything.
    pub fn search(&mut self, query: &str) {
        let needle = query.to_lowercase();
        self.visible = if needle.is_empty() {
            self.collection.newest_first().to_vec()
        } else {
            self.select(|post| post.matches(&needle))
        };
        self.page_number = 1;
    }

    /// Exact category match. Replaces whatever search was active.
    pub fn filter_category(&mut self, filter: &CategoryFilter) {
        self.visible = match filter {
            CategoryFilter::All => self.collection.newest_first().to_vec(),
            CategoryFilter::Only(category) => self.select(|post| &post.category == category),
        };
        self.page_number = 1;
    }

    fn select<F>(&self, keep: F) -> Vec<usize>
    where
        F: Fn(&Post) -> bool,
    {
        self.collection
            .newest_first()
            .iter()
            .copied()
            .filter(|&i| self.collection.get(i).is_some_and(&keep))
            .collect()
    }

    fn regular_count(&self) -> usize {
        self.visible.len().saturating_sub(1)
    }

    fn window_end(&self) -> usize {
        (self.page_number * self.page_size).min(self.regular_count())
    }

    /// Reveal the next page. Returns false (and changes nothing) when the
    /// window already covers every remaining post.
    pub fn load_more(&mut self) -> bool {
        if self.window_end() >= self.regular_count() {
            return false;
        }
        self.page_number += 1;
        true
    }

    pub fn view(&self) -> ListingView<'_> {
        let featured = self.visible.first().and_then(|&i| self.collection.get(i));
        let end = self.window_end();
        let grid = self
            .visible
            .iter()
            .skip(1)
            .take(end)
            .filter_map(|&i| self.collection.get(i))
            .collect();

        ListingView {
            featured,
            grid,
            has_more: end < self.regular_count(),
        }
    }

    /// Lookup by exact id over the whole collection, ignoring the active view.
    pub fn find_post(&self, id: &str) -> Result<&Post, BlogError> {
        self.collection
            .find(id)
            .ok_or_else(|| BlogError::NotFound(id.to_string()))
    }

    /// Up to `limit` other posts of the same category, in delivery order.
    pub fn related_posts(&self, post: &Post, limit: usize) -> Vec<&Post> {
        self.collection
            .posts()
            .iter()
            .filter(|p| p.category == post.category && p.id != post.id)
            .take(limit)
            .collect()
    }
}
