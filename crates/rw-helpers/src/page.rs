//! Page records supplied by the site pipeline.

/// A rendered page as seen by the helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    /// Absolute URL path, e.g. `/blog/post/` or `/feed.xml`.
    pub path: String,
    /// Output extension without the dot. May be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub extension: String,
}

impl Page {
    /// Create a page record.
    pub fn new(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
        }
    }
}

/// Ordered collection of pages, searched front to back.
///
/// When several pages match an identifier the first one wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PageSet {
    pages: Vec<Page>,
}

impl PageSet {
    /// Create an empty page set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over pages in lookup order.
    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl From<Vec<Page>> for PageSet {
    fn from(pages: Vec<Page>) -> Self {
        Self { pages }
    }
}

impl FromIterator<Page> for PageSet {
    fn from_iter<I: IntoIterator<Item = Page>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// What a link points at: a page identifier/path string or a page record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Page identifier, site path or external URL.
    Literal(String),
    /// A page record; its own path is used without lookup.
    Page(Page),
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_owned())
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<Page> for Target {
    fn from(page: Page) -> Self {
        Self::Page(page)
    }
}

impl From<&Page> for Target {
    fn from(page: &Page) -> Self {
        Self::Page(page.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_set_preserves_order() {
        let pages: PageSet = ["/b/", "/a/", "/c/"]
            .into_iter()
            .map(|p| Page::new(p, "html"))
            .collect();

        let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["/b/", "/a/", "/c/"]);
        assert_eq!(pages.len(), 3);
    }

    #[test]
    fn test_target_from_conversions() {
        assert_eq!(Target::from("about"), Target::Literal("about".to_owned()));
        let page = Page::new("/about/", "html");
        assert_eq!(Target::from(&page), Target::Page(page));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_page_set_from_json_manifest() {
        let json = r#"[
            {"path": "/", "extension": "html"},
            {"path": "/feed.xml"}
        ]"#;
        let pages: PageSet = serde_json::from_str(json).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages.iter().nth(1), Some(&Page::new("/feed.xml", "")));
    }
}
