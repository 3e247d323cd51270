use serde::Serialize;

use crate::errors::BlogError;
use crate::notice::Notice;

/// Deep links to the three sharing endpoints for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
}

impl ShareLinks {
    pub fn new(title: &str, page_url: &str) -> Self {
        let title = encode_component(title);
        let url = encode_component(page_url);
        ShareLinks {
            twitter: format!("https://twitter.com/intent/tweet?text={}&url={}", title, url),
            linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url),
            facebook: format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
        }
    }
}

/// Percent-encode like `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => result.push(b as char),
            _ => result.push_str(&format!("%{:02X}", b)),
        }
    }
    result
}

/// Something that can put text on the visitor's clipboard.
/// `COPY_LINK_SCRIPT` in `render` is the browser-side copy of this seam.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// Copy the page URL, falling back to the legacy selection technique when
/// the clipboard API refuses. Mirrored by the detail page's copy-link script.
pub fn copy_link(
    page_url: &str,
    clipboard: &mut dyn Clipboard,
    fallback: &mut dyn Clipboard,
) -> Result<Notice, BlogError> {
    if let Err(e) = clipboard.write_text(page_url) {
        log::warn!("[share] clipboard API failed ({}), using fallback", e);
        fallback.write_text(page_url).map_err(BlogError::Clipboard)?;
    }
    Ok(Notice::success("Link copied to clipboard!"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("AI & You: (part 1)!"), "AI%20%26%20You%3A%20(part%201)!");
        assert_eq!(encode_component("https://a.b/c?id=1"), "https%3A%2F%2Fa.b%2Fc%3Fid%3D1");
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }
}
