//! `rw link` command implementation.

use std::path::Path;

use clap::Args;
use rw_helpers::{Helpers, Target};

use super::{SiteArgs, attributes, parse_attribute};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the link command.
#[derive(Args)]
pub(crate) struct LinkArgs {
    /// Link text (inserted as raw HTML).
    text: String,

    /// Page identifier, path or URL (omit for a `#` link).
    target: Option<String>,

    /// HTML attribute as `key=value`; may be repeated.
    #[arg(short, long = "attr", value_parser = parse_attribute)]
    attrs: Vec<(String, String)>,

    /// Render an active span instead of a link when the target is the current page.
    #[arg(long)]
    unless_current: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl LinkArgs {
    /// Execute the link command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the page manifest cannot be loaded.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = self.site.helper_config(config_path)?;
        let pages = self.site.page_set()?;
        let helpers = Helpers::new(&pages).with_config(config);
        let ctx = self.site.render_context();

        let target = self.target.map(Target::Literal);
        let attrs = attributes(self.attrs);

        let html = if self.unless_current {
            helpers.link_to_unless_current(&ctx, &self.text, target, &attrs)
        } else {
            helpers.link_to(&ctx, &self.text, target, &attrs)
        };
        Output::new().result(&html);

        Ok(())
    }
}
