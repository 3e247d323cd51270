use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::errors::BlogError;
use crate::models::post::{Post, PostCollection};

/// Where the post collection lives.
#[derive(Debug, Clone, PartialEq)]
pub enum PostSource {
    Remote(Url),
    File(PathBuf),
}

impl PostSource {
    /// `http://` and `https://` values are fetched; anything else is a path.
    pub fn parse(raw: &str) -> Result<Self, BlogError> {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Url::parse(raw)
                .map(PostSource::Remote)
                .map_err(|e| BlogError::LoadFailure(format!("bad posts URL {}: {}", raw, e)))
        } else if raw.is_empty() {
            Err(BlogError::LoadFailure("no posts source configured".to_string()))
        } else {
            Ok(PostSource::File(PathBuf::from(raw)))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            PostSource::Remote(url) => url.to_string(),
            PostSource::File(path) => path.display().to_string(),
        }
    }
}

/// Fetch and parse the whole collection. This is the only place where
/// network or parse failures surface.
pub fn load_posts(source: &PostSource, timeout: Duration) -> Result<PostCollection, BlogError> {
    let body = match source {
        PostSource::Remote(url) => fetch_remote(url, timeout)?,
        PostSource::File(path) => fs::read_to_string(path).map_err(|e| {
            BlogError::LoadFailure(format!("cannot read {}: {}", path.display(), e))
        })?,
    };

    let collection = parse_posts(&body)?;
    log::info!(
        "[posts] loaded {} post(s) from {}",
        collection.len(),
        source.describe()
    );
    Ok(collection)
}

pub fn parse_posts(body: &str) -> Result<PostCollection, BlogError> {
    let posts: Vec<Post> = serde_json::from_str(body)
        .map_err(|e| BlogError::LoadFailure(format!("posts JSON parse error: {}", e)))?;
    Ok(PostCollection::new(posts))
}

fn fetch_remote(url: &Url, timeout: Duration) -> Result<String, BlogError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| BlogError::LoadFailure(format!("HTTP client error: {}", e)))?;

    let resp = client
        .get(url.as_str())
        .send()
        .map_err(|e| BlogError::LoadFailure(format!("request to {} failed: {}", url, e)))?;

    if !resp.status().is_success() {
        return Err(BlogError::LoadFailure(format!(
            "{} returned {}",
            url,
            resp.status()
        )));
    }

    resp.text()
        .map_err(|e| BlogError::LoadFailure(format!("reading {} failed: {}", url, e)))
}
