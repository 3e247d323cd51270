use crate::config::NavLink;

/// A nav link is active when the current path ends with its href, or when
/// it points at `index.html` and we are at the site root.
pub fn is_active(current_path: &str, href: &str) -> bool {
    if href.is_empty() {
        return false;
    }
    current_path.ends_with(href) || (href == "index.html" && current_path == "/")
}

pub fn mark_active<'a>(current_path: &str, links: &'a [NavLink]) -> Vec<(&'a NavLink, bool)> {
    links
        .iter()
        .map(|link| (link, is_active(current_path, &link.href)))
        .collect()
}

/// Open/closed state of the mobile menu. The header renders its initial
/// state; the page's nav script mirrors `toggle` and `close`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Click outside the menu or on one of its links.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn icon(&self) -> &'static str {
        if self.open {
            "fa-times"
        } else {
            "fa-bars"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_by_suffix_or_root_index() {
        assert!(is_active("/site/blog", "blog"));
        assert!(is_active("/", "index.html"));
        assert!(!is_active("/contact.html", "blog"));
        assert!(!is_active("/anything", ""));
        assert!(is_active("/contact", "/contact"));
        assert!(!is_active("/blog", "/"));
        assert!(!is_active("/blog-post", "/blog"));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.icon(), "fa-bars");
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon(), "fa-times");
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
