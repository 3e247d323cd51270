use std::fmt;

/// Everything that can go wrong between loading the collection and
/// submitting a form. Each variant is terminal for the operation that raised it.
#[derive(Debug, Clone, PartialEq)]
pub enum BlogError {
    /// Network, status or parse failure while loading the post collection.
    LoadFailure(String),
    /// Detail lookup for an id that is not in the collection.
    NotFound(String),
    /// Form input rejected before submission. Holds the user-facing message.
    ValidationFailure(String),
    /// Copy-link failed on both the clipboard API and the fallback.
    Clipboard(String),
}

impl BlogError {
    /// Message suitable for showing to a visitor.
    pub fn user_message(&self) -> String {
        match self {
            BlogError::LoadFailure(_) => {
                "Failed to load blog posts. Please try again later.".to_string()
            }
            BlogError::NotFound(_) => "Blog post not found.".to_string(),
            BlogError::ValidationFailure(msg) => msg.clone(),
            BlogError::Clipboard(_) => "Could not copy the link.".to_string(),
        }
    }
}

impl fmt::Display for BlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogError::LoadFailure(e) => write!(f, "failed to load posts: {}", e),
            BlogError::NotFound(id) => write!(f, "post not found: {}", id),
            BlogError::ValidationFailure(msg) => write!(f, "invalid form: {}", msg),
            BlogError::Clipboard(e) => write!(f, "clipboard write failed: {}", e),
        }
    }
}

impl std::error::Error for BlogError {}
