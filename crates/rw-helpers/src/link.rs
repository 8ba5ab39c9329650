//! Anchor link rendering.

use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::escape::escape_html;
use crate::helpers::HelperConfig;
use crate::page::{PageSet, Target};
use crate::resolver::{ResolvedTarget, locate};

/// Render `<a href="...">text</a>` for a target.
///
/// Literal targets go through identifier resolution; page targets use the
/// page's own path. A missing target renders a no-op `#` link. Attribute
/// values are escaped, `text` is inserted as-is.
///
/// # Examples
///
/// ```
/// use rw_helpers::{Attributes, PageSet, RenderContext, link_to};
///
/// let pages = PageSet::new();
/// let ctx = RenderContext::new("/");
/// let attrs = Attributes::from([("title", "My super cool blog")]);
///
/// assert_eq!(
///     link_to("Blog", Some("/blog/".into()), &attrs, &pages, &ctx),
///     r#"<a title="My super cool blog" href="./blog/">Blog</a>"#
/// );
/// assert_eq!(link_to("Nowhere", None, &attrs, &pages, &ctx), r##"<a title="My super cool blog" href="#">Nowhere</a>"##);
/// ```
#[must_use]
pub fn link_to(
    text: &str,
    target: Option<Target>,
    attributes: &Attributes,
    pages: &PageSet,
    ctx: &RenderContext,
) -> String {
    render_link(
        text,
        target.as_ref(),
        attributes,
        pages,
        ctx,
        &HelperConfig::default(),
    )
}

/// Like [`link_to`], but renders an "active" span when the target is the
/// current page.
///
/// The span carries the `title` attribute if given, otherwise a default
/// "You are here" title. Targets with a fragment never count as current.
#[must_use]
pub fn link_to_unless_current(
    text: &str,
    target: Option<Target>,
    attributes: &Attributes,
    pages: &PageSet,
    ctx: &RenderContext,
) -> String {
    render_link_unless_current(
        text,
        target.as_ref(),
        attributes,
        pages,
        ctx,
        &HelperConfig::default(),
    )
}

pub(crate) fn render_link(
    text: &str,
    target: Option<&Target>,
    attributes: &Attributes,
    pages: &PageSet,
    ctx: &RenderContext,
    config: &HelperConfig,
) -> String {
    let href = match target {
        Some(target) => resolve_target(target, pages).href(ctx, config.external_prefixes.as_slice()),
        None => "#".to_owned(),
    };
    anchor(text, &href, attributes)
}

pub(crate) fn render_link_unless_current(
    text: &str,
    target: Option<&Target>,
    attributes: &Attributes,
    pages: &PageSet,
    ctx: &RenderContext,
    config: &HelperConfig,
) -> String {
    let Some(target) = target else {
        return anchor(text, "#", attributes);
    };

    let resolved = resolve_target(target, pages);
    let is_current = ctx
        .current_path()
        .is_some_and(|current| resolved.fragment().is_none() && resolved.path() == current);

    if is_current {
        let title = attributes
            .get("title")
            .unwrap_or(config.active_title.as_str());
        format!(
            r#"<span class="active" title="{}">{text}</span>"#,
            escape_html(title)
        )
    } else {
        anchor(
            text,
            &resolved.href(ctx, config.external_prefixes.as_slice()),
            attributes,
        )
    }
}

fn resolve_target<'a>(target: &'a Target, pages: &'a PageSet) -> ResolvedTarget<'a> {
    match target {
        Target::Literal(identifier) => locate(identifier, pages),
        Target::Page(page) => ResolvedTarget::Page {
            page,
            fragment: None,
        },
    }
}

fn anchor(text: &str, href: &str, attributes: &Attributes) -> String {
    let mut out = String::from("<a ");
    for (key, value) in attributes.iter() {
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push_str("\" ");
    }
    out.push_str("href=\"");
    out.push_str(href);
    out.push_str("\">");
    out.push_str(text);
    out.push_str("</a>");
    out
}
