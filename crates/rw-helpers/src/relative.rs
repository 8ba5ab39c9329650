//! Relative URL computation.
//!
//! Two styles exist and produce different output for the same input:
//! - [`dot_relative`] only looks at the depth of the current page and prefixes
//!   the site path with `./` or `../` repeated. Used by identifier resolution
//!   and the image helper.
//! - [`relative_path_to`] computes a true relative path between the current
//!   page's directory and the target, like a filesystem relative path.

use crate::context::RenderContext;
use crate::error::HelperError;
use crate::page::Target;
use crate::path::normalize;

/// Prefix a site path with `./` or `../` based on the current page depth.
///
/// The current page path is split on `/`; with `n` non-empty segments the
/// prefix is `../` repeated `n - 1` times, or `./` for top-level pages. The
/// target's own depth is not considered. One leading `/` on the target is
/// stripped. Detached contexts and root or empty paths count as top level.
///
/// # Examples
///
/// ```
/// use rw_helpers::{RenderContext, dot_relative};
///
/// let ctx = RenderContext::new("/blog/2020/post/");
/// assert_eq!(dot_relative("/about/", &ctx), "../../about/");
///
/// let ctx = RenderContext::new("/about/");
/// assert_eq!(dot_relative("/blog/", &ctx), "./blog/");
/// ```
#[must_use]
pub fn dot_relative(target: &str, ctx: &RenderContext) -> String {
    let segments = ctx
        .current_path()
        .map_or(0, |path| path.split('/').filter(|s| !s.is_empty()).count());
    let depth = segments.saturating_sub(1);

    let route = normalize(target);
    if depth == 0 {
        format!("./{route}")
    } else {
        format!("{}{route}", "../".repeat(depth))
    }
}

/// Relative path from the current page's directory to `target`.
///
/// The base directory is the current path itself when it ends in `/`, or its
/// parent directory otherwise. `.` and `..` segments are resolved on both
/// sides, the shared prefix is dropped and one `..` is emitted per remaining
/// base segment. A target ending in `/` yields a result ending in `/`.
///
/// Page targets use the page's path; literal targets are taken as paths
/// without identifier lookup.
///
/// # Errors
///
/// Returns `HelperError::InvalidRenderContext` for a detached context,
/// `HelperError::MixedPathKinds` when only one of the two paths is absolute
/// and `HelperError::UnresolvableBase` when a relative current path keeps a
/// `..` the target does not share.
///
/// # Examples
///
/// ```
/// use rw_helpers::{RenderContext, Target, relative_path_to};
///
/// let ctx = RenderContext::new("/foo/bar/");
/// assert_eq!(relative_path_to(&Target::from("/foo/qux/"), &ctx).unwrap(), "../qux/");
/// ```
pub fn relative_path_to(target: &Target, ctx: &RenderContext) -> Result<String, HelperError> {
    let dst = match target {
        Target::Literal(path) => path.as_str(),
        Target::Page(page) => page.path.as_str(),
    };
    let src = ctx
        .current_path()
        .ok_or(HelperError::InvalidRenderContext)?;

    let base = if src.ends_with('/') {
        clean(src)
    } else {
        parent(clean(src))
    };
    let dest = clean(dst);

    if base.absolute != dest.absolute {
        return Err(HelperError::MixedPathKinds {
            target: dst.to_owned(),
            base: base.display(),
        });
    }

    let common = base
        .segments
        .iter()
        .zip(&dest.segments)
        .take_while(|(a, b)| a == b)
        .count();

    if base.segments[common..].contains(&"..") {
        return Err(HelperError::UnresolvableBase {
            target: dst.to_owned(),
            base: base.display(),
        });
    }

    let mut parts: Vec<&str> = vec![".."; base.segments.len() - common];
    parts.extend_from_slice(&dest.segments[common..]);

    let mut relative = if parts.is_empty() {
        ".".to_owned()
    } else {
        parts.join("/")
    };
    if dst.ends_with('/') {
        relative.push('/');
    }
    Ok(relative)
}

/// Path split into resolved segments.
struct CleanPath<'a> {
    absolute: bool,
    segments: Vec<&'a str>,
}

impl CleanPath<'_> {
    fn display(&self) -> String {
        let joined = self.segments.join("/");
        match (self.absolute, joined.is_empty()) {
            (true, _) => format!("/{joined}"),
            (false, true) => ".".to_owned(),
            (false, false) => joined,
        }
    }
}

fn clean(path: &str) -> CleanPath<'_> {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // `..` above the root of an absolute path is dropped
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    CleanPath { absolute, segments }
}

fn parent(mut path: CleanPath<'_>) -> CleanPath<'_> {
    if path.segments.last().is_some_and(|last| *last != "..") {
        path.segments.pop();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    fn dot(target: &str, current: &str) -> String {
        dot_relative(target, &RenderContext::new(current))
    }

    fn rel(target: &str, current: &str) -> String {
        relative_path_to(&Target::from(target), &RenderContext::new(current)).unwrap()
    }

    #[test]
    fn test_dot_relative_nested_page() {
        assert_eq!(dot("/blog/2021/other/", "/blog/2020/post/"), "../../blog/2021/other/");
    }

    #[test]
    fn test_dot_relative_top_level_page() {
        assert_eq!(dot("/contact/", "/about/"), "./contact/");
    }

    #[test]
    fn test_dot_relative_ignores_target_depth() {
        assert_eq!(dot("/a/b/c/d/", "/x/y/"), "../a/b/c/d/");
        assert_eq!(dot("/", "/x/y/"), "../");
    }

    #[test]
    fn test_dot_relative_file_style_current() {
        assert_eq!(dot("/index.html", "/blog/post.html"), "../index.html");
    }

    #[test]
    fn test_dot_relative_target_without_leading_slash() {
        assert_eq!(dot("images/logo.png", "/blog/post/"), "../images/logo.png");
    }

    #[test]
    fn test_dot_relative_root_and_empty_current() {
        assert_eq!(dot("/about/", "/"), "./about/");
        assert_eq!(dot("/about/", ""), "./about/");
    }

    #[test]
    fn test_dot_relative_current_without_leading_slash() {
        assert_eq!(dot("/about/", "about"), "./about/");
        assert_eq!(dot("/about/", "blog/post/"), "../about/");
    }

    #[test]
    fn test_dot_relative_detached_is_top_level() {
        assert_eq!(dot_relative("/about/", &RenderContext::detached()), "./about/");
    }

    #[test]
    fn test_relative_path_sibling_directory() {
        assert_eq!(rel("/foo/qux/", "/foo/bar/"), "../qux/");
    }

    #[test]
    fn test_relative_path_from_file_uses_parent_directory() {
        assert_eq!(rel("/foo/qux.html", "/foo/bar.html"), "qux.html");
        assert_eq!(rel("/foo/qux/", "/foo/bar.html"), "qux/");
    }

    #[test]
    fn test_relative_path_same_directory() {
        assert_eq!(rel("/foo/", "/foo/"), "./");
        assert_eq!(rel("/foo", "/foo/"), ".");
    }

    #[test]
    fn test_relative_path_up_to_root() {
        assert_eq!(rel("/", "/foo/bar/"), "../../");
        assert_eq!(rel("/index.html", "/a/b/c.html"), "../../index.html");
    }

    #[test]
    fn test_relative_path_down_into_subtree() {
        assert_eq!(rel("/foo/bar/baz/", "/foo/"), "bar/baz/");
    }

    #[test]
    fn test_relative_path_resolves_dot_segments() {
        assert_eq!(rel("/foo/./qux/../bar/", "/foo/x/"), "../bar/");
    }

    #[test]
    fn test_relative_path_page_target() {
        let page = Page::new("/blog/post/", "html");
        let ctx = RenderContext::new("/about/");
        assert_eq!(
            relative_path_to(&Target::Page(page), &ctx).unwrap(),
            "../blog/post/"
        );
    }

    #[test]
    fn test_relative_path_detached_context() {
        let result = relative_path_to(&Target::from("/foo/"), &RenderContext::detached());
        assert_eq!(result, Err(HelperError::InvalidRenderContext));
    }

    #[test]
    fn test_relative_path_mixed_kinds() {
        let result = relative_path_to(&Target::from("foo/"), &RenderContext::new("/bar/"));
        assert!(matches!(result, Err(HelperError::MixedPathKinds { .. })));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("foo/"));
    }

    #[test]
    fn test_relative_path_base_with_leading_parent() {
        let result = relative_path_to(&Target::from("y"), &RenderContext::new("../x/"));
        assert_eq!(
            result,
            Err(HelperError::UnresolvableBase {
                target: "y".to_owned(),
                base: "../x".to_owned(),
            })
        );
    }

    #[test]
    fn test_relative_path_shared_leading_parent() {
        assert_eq!(rel("../x/y/", "../x/"), "y/");
        assert_eq!(rel("../z", "../x/"), "../z");
    }

    #[test]
    fn test_styles_differ_for_same_input() {
        assert_eq!(dot("/foo/qux/", "/foo/bar/"), "../foo/qux/");
        assert_eq!(rel("/foo/qux/", "/foo/bar/"), "../qux/");
    }
}
