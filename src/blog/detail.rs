use url::Url;

use crate::blog::engine::BlogEngine;
use crate::errors::BlogError;
use crate::models::post::Post;

/// Where a detail request without an id is sent.
pub const LISTING_PATH: &str = "/blog";

#[derive(Debug, PartialEq)]
pub enum DetailOutcome<'a> {
    Redirect(&'static str),
    Show(PostDetail<'a>),
}

#[derive(Debug, PartialEq)]
pub struct PostDetail<'a> {
    pub post: &'a Post,
    /// Empty means the related-posts region stays hidden.
    pub related: Vec<&'a Post>,
}

/// Read the `id` query parameter from an absolute or path-relative page URL.
/// An empty value counts as absent.
pub fn post_id_from_url(page_url: &str) -> Option<String> {
    let url = Url::parse(page_url)
        .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(page_url)))
        .ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "id")
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// Resolve the detail view for the navigation context's `id`.
pub fn resolve<'a>(
    engine: &'a BlogEngine,
    id: Option<&str>,
    related_limit: usize,
) -> Result<DetailOutcome<'a>, BlogError> {
    let id = match id.filter(|v| !v.is_empty()) {
        Some(id) => id,
        None => return Ok(DetailOutcome::Redirect(LISTING_PATH)),
    };

    let post = engine.find_post(id)?;
    let related = engine.related_posts(post, related_limit);
    Ok(DetailOutcome::Show(PostDetail { post, related }))
}
