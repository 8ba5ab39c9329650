//! Path string normalization.
//!
//! Page identifiers and page paths are compared in a normalized form so that
//! `"/blog/post/"`, `"blog/post"` and `"blog/post.html"` all name the same
//! page. Both sides of a comparison must go through [`normalize_page_key`]
//! with the same extension, otherwise lookups silently miss.

/// Strip exactly one leading `/`.
///
/// Internal and trailing slashes are preserved.
///
/// # Examples
///
/// ```
/// use rw_helpers::path::normalize;
///
/// assert_eq!(normalize("/foo/bar"), "foo/bar");
/// assert_eq!(normalize("foo/bar"), "foo/bar");
/// assert_eq!(normalize("//foo"), "/foo");
/// ```
#[must_use]
pub fn normalize(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Comparison form of a page path or identifier.
///
/// Applies [`normalize`], then strips one trailing `/`, then one trailing
/// `.{extension}` when `extension` is non-empty.
#[must_use]
pub fn normalize_page_key<'a>(path: &'a str, extension: &str) -> &'a str {
    let key = normalize(path);
    let key = key.strip_suffix('/').unwrap_or(key);
    if extension.is_empty() {
        return key;
    }
    key.strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_single_leading_slash() {
        assert_eq!(normalize("/foo/bar"), "foo/bar");
        assert_eq!(normalize("foo/bar"), "foo/bar");
        assert_eq!(normalize("/foo/bar/"), "foo/bar/");
    }

    #[test]
    fn test_normalize_root_and_empty() {
        assert_eq!(normalize("/"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_page_key_directory_page() {
        assert_eq!(normalize_page_key("/blog/post/", "html"), "blog/post");
        assert_eq!(normalize_page_key("/", "html"), "");
    }

    #[test]
    fn test_page_key_strips_extension() {
        assert_eq!(normalize_page_key("/feed.xml", "xml"), "feed");
        assert_eq!(normalize_page_key("blog/post.html", "html"), "blog/post");
    }

    #[test]
    fn test_page_key_keeps_other_extension() {
        assert_eq!(normalize_page_key("/style.css", "html"), "style.css");
    }

    #[test]
    fn test_page_key_requires_dot_before_extension() {
        assert_eq!(normalize_page_key("/archive", "ive"), "archive");
    }

    #[test]
    fn test_page_key_empty_extension() {
        assert_eq!(normalize_page_key("/notes.txt", ""), "notes.txt");
    }
}
