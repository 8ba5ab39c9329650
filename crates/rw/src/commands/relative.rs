//! `rw relative` command implementation.

use clap::Args;
use rw_helpers::{Target, relative_path_to};

use super::render_context;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the relative command.
#[derive(Args)]
pub(crate) struct RelativeArgs {
    /// Absolute target path (e.g. `/foo/qux/`).
    target: String,

    /// Absolute path of the page being rendered.
    #[arg(long)]
    current: Option<String>,
}

impl RelativeArgs {
    /// Execute the relative command.
    ///
    /// # Errors
    ///
    /// Returns an error if `--current` is missing or the paths cannot be related.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let ctx = render_context(self.current.as_deref());
        let relative = relative_path_to(&Target::Literal(self.target), &ctx)?;
        Output::new().result(&relative);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rw_helpers::HelperError;

    use super::*;

    #[test]
    fn test_execute_requires_current_page() {
        let args = RelativeArgs {
            target: "/foo/".to_owned(),
            current: None,
        };
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err,
            CliError::Helper(HelperError::InvalidRenderContext)
        ));
    }

    #[test]
    fn test_execute_rejects_mixed_paths() {
        let args = RelativeArgs {
            target: "foo/".to_owned(),
            current: Some("/bar/".to_owned()),
        };
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err,
            CliError::Helper(HelperError::MixedPathKinds { .. })
        ));
    }

    #[test]
    fn test_execute_sibling_directory() {
        let args = RelativeArgs {
            target: "/foo/qux/".to_owned(),
            current: Some("/foo/bar/".to_owned()),
        };
        assert!(args.execute().is_ok());
    }
}
