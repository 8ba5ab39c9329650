//! Helper facade bound to a page set and configuration.

use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::error::HelperError;
use crate::link::{render_link, render_link_unless_current};
use crate::page::{PageSet, Target};
use crate::relative::relative_path_to;
use crate::resolver::{DEFAULT_EXTERNAL_PREFIXES, ResolvedTarget, locate};
use crate::tag::render_image_tag;

/// Settings shared by all helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelperConfig {
    /// Site directory that bare image names are looked up in.
    pub images_root: String,
    /// Title of the "active" span when no `title` attribute is given.
    pub active_title: String,
    /// Substrings marking an unresolved identifier as an external URL.
    pub external_prefixes: Vec<String>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            images_root: "/images".to_owned(),
            active_title: "You are here".to_owned(),
            external_prefixes: DEFAULT_EXTERNAL_PREFIXES
                .iter()
                .map(|prefix| (*prefix).to_owned())
                .collect(),
        }
    }
}

/// Template helpers for one site build.
///
/// Holds the page set and settings; the page being rendered is passed to
/// each call.
#[derive(Clone, Debug)]
pub struct Helpers<'p> {
    pages: &'p PageSet,
    config: HelperConfig,
}

impl<'p> Helpers<'p> {
    /// Create helpers with default settings.
    #[must_use]
    pub fn new(pages: &'p PageSet) -> Self {
        Self {
            pages,
            config: HelperConfig::default(),
        }
    }

    /// Use custom settings.
    #[must_use]
    pub fn with_config(mut self, config: HelperConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// See [`locate`](crate::locate).
    #[must_use]
    pub fn locate(&self, identifier: &str) -> ResolvedTarget<'p> {
        locate(identifier, self.pages)
    }

    /// See [`resolve`](crate::resolve).
    #[must_use]
    pub fn resolve(&self, ctx: &RenderContext, identifier: &str) -> String {
        self.locate(identifier)
            .href(ctx, self.config.external_prefixes.as_slice())
    }

    /// See [`path_for`](crate::path_for).
    #[must_use]
    pub fn path_for(&self, identifier: &str) -> String {
        self.locate(identifier).location()
    }

    /// See [`relative_path_to`](crate::relative_path_to).
    #[allow(clippy::unused_self)] // &self for API consistency with the other helpers
    pub fn relative_path_to(
        &self,
        ctx: &RenderContext,
        target: &Target,
    ) -> Result<String, HelperError> {
        relative_path_to(target, ctx)
    }

    /// See [`link_to`](crate::link_to).
    #[must_use]
    pub fn link_to(
        &self,
        ctx: &RenderContext,
        text: &str,
        target: Option<Target>,
        attributes: &Attributes,
    ) -> String {
        render_link(
            text,
            target.as_ref(),
            attributes,
            self.pages,
            ctx,
            &self.config,
        )
    }

    /// See [`link_to_unless_current`](crate::link_to_unless_current).
    #[must_use]
    pub fn link_to_unless_current(
        &self,
        ctx: &RenderContext,
        text: &str,
        target: Option<Target>,
        attributes: &Attributes,
    ) -> String {
        render_link_unless_current(
            text,
            target.as_ref(),
            attributes,
            self.pages,
            ctx,
            &self.config,
        )
    }

    /// See [`image_tag`](crate::image_tag).
    #[must_use]
    pub fn image_tag(&self, ctx: &RenderContext, src: &str, attributes: &Attributes) -> String {
        render_image_tag(src, attributes, ctx, &self.config)
    }
}
