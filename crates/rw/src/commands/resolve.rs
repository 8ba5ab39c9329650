//! `rw resolve` command implementation.

use std::path::Path;

use clap::Args;
use rw_helpers::Helpers;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Page identifier, optionally with a `#fragment` (e.g. `blog/post#intro`).
    identifier: String,

    /// Print the absolute page path instead of the relative URL.
    #[arg(long)]
    absolute: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the page manifest cannot be loaded.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.helper_config(config_path)?;
        let pages = self.site.page_set()?;
        let helpers = Helpers::new(&pages).with_config(config);

        let target = helpers.locate(&self.identifier);
        let prefixes = helpers.config().external_prefixes.as_slice();
        if target.page().is_none() && !target.is_external(prefixes) {
            output.warning(&format!(
                "No page matches '{}', using it as a path",
                self.identifier
            ));
        }

        let resolved = if self.absolute {
            target.location()
        } else {
            target.href(&self.site.render_context(), prefixes)
        };
        output.result(&resolved);

        Ok(())
    }
}
