//! `rw img` command implementation.

use std::path::Path;

use clap::Args;
use rw_helpers::Helpers;

use super::{SiteArgs, attributes, parse_attribute};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the img command.
#[derive(Args)]
pub(crate) struct ImageArgs {
    /// Image name under the images root, site path or URL.
    src: String,

    /// HTML attribute as `key=value`; may be repeated.
    #[arg(short, long = "attr", value_parser = parse_attribute)]
    attrs: Vec<(String, String)>,

    #[command(flatten)]
    site: SiteArgs,
}

impl ImageArgs {
    /// Execute the img command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        if self.src.is_empty() {
            return Err(CliError::Validation("image source cannot be empty".to_owned()));
        }

        let config = self.site.helper_config(config_path)?;
        let pages = self.site.page_set()?;
        let helpers = Helpers::new(&pages).with_config(config);

        let html = helpers.image_tag(&self.site.render_context(), &self.src, &attributes(self.attrs));
        Output::new().result(&html);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_rejects_empty_source() {
        let args = ImageArgs {
            src: String::new(),
            attrs: Vec::new(),
            site: SiteArgs {
                pages: None,
                current: None,
                images_root: None,
                active_title: None,
            },
        };
        let err = args.execute(None).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }
}
