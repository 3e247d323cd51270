use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub author: String,
    #[serde(deserialize_with = "deserialize_post_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub reading_time: String,
    pub image: String,
}

impl Post {
    /// True when the lowercased `needle` occurs in the title, excerpt,
    /// content or category (case-insensitive).
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.excerpt, &self.content, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Accepts "YYYY-MM-DD" as well as date-times, keeping only the date part.
fn deserialize_post_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_post_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid post date: {}", raw)))
}

pub(crate) fn parse_post_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// "N min read" from the word count of an HTML body (~200 wpm, at least 1).
pub fn reading_time(html: &str) -> String {
    let words = strip_html(html).split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut inside_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => inside_tag = true,
            '>' => {
                inside_tag = false;
                out.push(' ');
            }
            _ if !inside_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// The loaded post collection: posts in delivery order plus the
/// newest-first ordering computed once at load time.
#[derive(Debug, Clone)]
pub struct PostCollection {
    posts: Vec<Post>,
    newest_first: Vec<usize>,
}

impl PostCollection {
    pub fn new(mut posts: Vec<Post>) -> Self {
        let mut seen = HashSet::new();
        for post in posts.iter_mut() {
            if !seen.insert(post.id.clone()) {
                log::warn!("[posts] duplicate post id '{}', lookups return the first", post.id);
            }
            if post.reading_time.trim().is_empty() {
                post.reading_time = reading_time(&post.content);
            }
        }

        // Stable sort: equal dates keep delivery order
        let mut newest_first: Vec<usize> = (0..posts.len()).collect();
        newest_first.sort_by(|&a, &b| posts[b].date.cmp(&posts[a].date));

        PostCollection { posts, newest_first }
    }

    /// Posts in the order they were delivered.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Indices into `posts()`, newest first.
    pub fn newest_first(&self) -> &[usize] {
        &self.newest_first
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Distinct categories in delivery order, for the filter buttons.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.posts
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates_and_datetimes() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(parse_post_date("2024-03-09"), Some(d));
        assert_eq!(parse_post_date("2024-03-09 12:30:00"), Some(d));
        assert_eq!(parse_post_date("2024-03-09T12:30:00Z"), Some(d));
        assert_eq!(parse_post_date("2024-03-09T12:30:00"), Some(d));
        assert_eq!(parse_post_date("March 9"), None);
    }

    #[test]
    fn reading_time_rounds_up_and_ignores_tags() {
        assert_eq!(reading_time(""), "1 min read");
        assert_eq!(reading_time("<p>one two three</p>"), "1 min read");
        let body = format!("<p>{}</p>", "word ".repeat(201));
        assert_eq!(reading_time(&body), "2 min read");
    }

    #[test]
    fn missing_reading_time_is_filled_at_load() {
        let json = r#"[{"id":"a","title":"T","excerpt":"E","content":"<p>hello</p>",
            "category":"AI","author":"X","date":"2024-01-01","image":"a.jpg"}]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        let collection = PostCollection::new(posts);
        assert_eq!(collection.posts()[0].reading_time, "1 min read");
    }
}
