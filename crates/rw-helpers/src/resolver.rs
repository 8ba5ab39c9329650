//! Page identifier resolution.
//!
//! Templates reference pages by identifier (`"blog/post"`, `"/about/"`,
//! `"feed.xml"`), optionally followed by a `#fragment`. [`locate`] finds the
//! page an identifier names; [`resolve`] turns that into a URL relative to the
//! page being rendered.

use crate::context::RenderContext;
use crate::page::{Page, PageSet};
use crate::path::normalize_page_key;
use crate::relative::dot_relative;

/// URL prefixes that mark an unresolved identifier as an external link.
pub(crate) const DEFAULT_EXTERNAL_PREFIXES: &[&str] = &["http://", "https://"];

/// What an identifier refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedTarget<'p> {
    /// The identifier names a page in the set.
    Page {
        page: &'p Page,
        fragment: Option<String>,
    },
    /// No page matched; the identifier is used as a path or URL.
    Literal {
        path: String,
        fragment: Option<String>,
    },
}

impl<'p> ResolvedTarget<'p> {
    /// Matched page, if any.
    #[must_use]
    pub fn page(&self) -> Option<&'p Page> {
        match self {
            Self::Page { page, .. } => Some(*page),
            Self::Literal { .. } => None,
        }
    }

    /// Fragment after `#`, without the `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::Page { fragment, .. } | Self::Literal { fragment, .. } => fragment.as_deref(),
        }
    }

    /// Target path without the fragment.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Page { page, .. } => &page.path,
            Self::Literal { path, .. } => path,
        }
    }

    /// Absolute (or literal) location including the fragment.
    #[must_use]
    pub fn location(&self) -> String {
        match self.fragment() {
            Some(fragment) => format!("{}#{fragment}", self.path()),
            None => self.path().to_owned(),
        }
    }

    /// Whether this is an unresolved literal that looks like an external URL.
    pub fn is_external<S: AsRef<str>>(&self, external_prefixes: &[S]) -> bool {
        match self {
            Self::Page { .. } => false,
            Self::Literal { path, .. } => external_prefixes
                .iter()
                .any(|prefix| path.contains(prefix.as_ref())),
        }
    }

    /// URL of the target as seen from the current page.
    ///
    /// External literals are returned unchanged; everything else is made
    /// dot-relative to the current page.
    pub fn href<S: AsRef<str>>(&self, ctx: &RenderContext, external_prefixes: &[S]) -> String {
        if self.is_external(external_prefixes) {
            return self.location();
        }
        dot_relative(&self.location(), ctx)
    }
}

/// Find the page an identifier names.
///
/// The identifier is split at the first `#` into a name and a fragment.
/// Pages are scanned in order and the first whose normalized path equals the
/// normalized name wins. An identifier with nothing before `#` skips lookup
/// and is kept whole as a literal.
///
/// A bare `#section` is therefore made dot-relative like any site path: it
/// is a same-page anchor only on top-level pages (`./#section`). From
/// `/blog/2020/post/` it becomes `../../#section`, an anchor on the root
/// page.
pub fn locate<'p>(identifier: &str, pages: &'p PageSet) -> ResolvedTarget<'p> {
    let (name, fragment) = match identifier.split_once('#') {
        Some(("", _)) => {
            return ResolvedTarget::Literal {
                path: identifier.to_owned(),
                fragment: None,
            };
        }
        Some((name, fragment)) => (name, Some(fragment.to_owned())),
        None => (identifier, None),
    };

    let matched = pages.iter().find(|page| {
        normalize_page_key(&page.path, &page.extension)
            == normalize_page_key(name, &page.extension)
    });

    if let Some(page) = matched {
        tracing::trace!(identifier, path = %page.path, "Resolved page identifier");
        ResolvedTarget::Page { page, fragment }
    } else {
        tracing::debug!(identifier, "No page matches identifier, using it as a path");
        ResolvedTarget::Literal {
            path: name.to_owned(),
            fragment,
        }
    }
}

/// Resolve an identifier to a URL relative to the current page.
///
/// Matched pages and site paths are made dot-relative; unmatched identifiers
/// containing `http://` or `https://` pass through unchanged. Bare
/// `#fragment` identifiers are relativized too, see [`locate`].
///
/// # Examples
///
/// ```
/// use rw_helpers::{Page, PageSet, RenderContext, resolve};
///
/// let pages = PageSet::from(vec![Page::new("/blog/post/", "html")]);
/// let ctx = RenderContext::new("/blog/2020/post/");
///
/// assert_eq!(resolve("blog/post#comments", &pages, &ctx), "../../blog/post/#comments");
/// assert_eq!(resolve("http://example.com/", &pages, &ctx), "http://example.com/");
/// ```
#[must_use]
pub fn resolve(identifier: &str, pages: &PageSet, ctx: &RenderContext) -> String {
    locate(identifier, pages).href(ctx, DEFAULT_EXTERNAL_PREFIXES)
}

/// Absolute path of the page an identifier names.
///
/// Unmatched identifiers are returned unchanged.
#[must_use]
pub fn path_for(identifier: &str, pages: &PageSet) -> String {
    locate(identifier, pages).location()
}
