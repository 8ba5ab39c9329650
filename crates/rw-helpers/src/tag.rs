//! Generic HTML element rendering.

use std::sync::LazyLock;

use regex::Regex;

use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::escape::escape_html;
use crate::helpers::HelperConfig;
use crate::relative::dot_relative;

/// Image sources used verbatim: `/`, `./`, `../` paths and http(s) URLs.
static LITERAL_IMAGE_SOURCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^((\.\.?)?/|https?://)").expect("invalid image source regex"));

/// Render a self-closing element.
///
/// Attributes are written in ascending key order and empty values are
/// skipped. A `name` attribute is copied to `id` unless `id` is set.
///
/// # Examples
///
/// ```
/// use rw_helpers::{Attributes, tag};
///
/// assert_eq!(tag("br", &Attributes::new()), "<br/>");
/// assert_eq!(
///     tag("input", &Attributes::from([("type", "text"), ("name", "q")])),
///     r#"<input id="q" name="q" type="text"/>"#
/// );
/// ```
#[must_use]
pub fn tag(name: &str, attributes: &Attributes) -> String {
    let mut out = open_tag(name, attributes);
    out.push_str("/>");
    out
}

/// Render an element wrapping the output of `body`.
///
/// # Examples
///
/// ```
/// use rw_helpers::{Attributes, content_tag};
///
/// let attrs = Attributes::from([("href", "test.html")]);
/// assert_eq!(content_tag("a", &attrs, || "Test".to_owned()), r#"<a href="test.html">Test</a>"#);
/// ```
#[must_use]
pub fn content_tag(name: &str, attributes: &Attributes, body: impl FnOnce() -> String) -> String {
    let mut out = open_tag(name, attributes);
    out.push('>');
    out.push_str(&body());
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
}

/// Render an `<img>` tag relative to the current page.
///
/// `src` values starting with `/`, `./`, `../`, `http://` or `https://` are
/// used unchanged. Anything else is looked up under `/images` and made
/// dot-relative to the current page. Without an explicit `alt`, one is
/// derived from the file name: `contact/test_image.gif` becomes
/// `Test image` and `IMG_0001.JPG` becomes `Img 0001`.
#[must_use]
pub fn image_tag(src: &str, attributes: &Attributes, ctx: &RenderContext) -> String {
    render_image_tag(src, attributes, ctx, &HelperConfig::default())
}

pub(crate) fn render_image_tag(
    src: &str,
    attributes: &Attributes,
    ctx: &RenderContext,
    config: &HelperConfig,
) -> String {
    let mut attributes = attributes.clone();

    let resolved_src = if LITERAL_IMAGE_SOURCE.is_match(src) {
        src.to_owned()
    } else {
        let root = config.images_root.trim_end_matches('/');
        dot_relative(&format!("{root}/{src}"), ctx)
    };
    attributes.insert("src", resolved_src);

    if !attributes.contains_key("alt") {
        attributes.insert("alt", alt_from_file_name(src));
    }

    tag("img", &attributes)
}

/// Derive alt text from the last path segment of an image name.
///
/// The first letter is uppercased and the rest lowercased.
fn alt_from_file_name(src: &str) -> String {
    let file = src.rsplit('/').next().unwrap_or(src);
    let stem = file.split('.').next().unwrap_or(file);
    let words = stem.replace(['_', '-'], " ");

    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn open_tag(name: &str, attributes: &Attributes) -> String {
    let mut pairs: Vec<(&str, &str)> = attributes.iter().collect();
    if let Some(element_name) = attributes.get("name")
        && !element_name.is_empty()
        && !attributes.contains_key("id")
    {
        pairs.push(("id", element_name));
    }
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = format!("<{name}");
    for (key, value) in pairs {
        if value.is_empty() {
            continue;
        }
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }
    out
}
