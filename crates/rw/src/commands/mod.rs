//! CLI command implementations.

mod image;
mod link;
mod relative;
mod resolve;

use std::path::{Path, PathBuf};

use clap::Args;
use rw_config::{CliSettings, Config};
use rw_helpers::{Attributes, HelperConfig, PageSet, RenderContext};

use crate::error::CliError;

pub(crate) use image::ImageArgs;
pub(crate) use link::LinkArgs;
pub(crate) use relative::RelativeArgs;
pub(crate) use resolve::ResolveArgs;

/// Arguments describing the site and the page being rendered.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// JSON page manifest: an array of `{"path": ..., "extension": ...}`.
    #[arg(short, long, env = "RW_PAGES")]
    pages: Option<PathBuf>,

    /// Absolute path of the page being rendered (omit for a detached context).
    #[arg(long)]
    current: Option<String>,

    /// Images root directory (overrides config).
    #[arg(long)]
    images_root: Option<String>,

    /// Title of the active-page marker (overrides config).
    #[arg(long)]
    active_title: Option<String>,
}

impl SiteArgs {
    /// Load config with CLI overrides and convert it for the helpers.
    pub(crate) fn helper_config(&self, config_path: Option<&Path>) -> Result<HelperConfig, CliError> {
        let cli_settings = CliSettings {
            images_root: self.images_root.clone(),
            active_title: self.active_title.clone(),
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }
        Ok(helper_config_from_rw_config(&config))
    }

    /// Load the page manifest, or an empty page set when none is given.
    pub(crate) fn page_set(&self) -> Result<PageSet, CliError> {
        match &self.pages {
            Some(path) => load_pages(path),
            None => Ok(PageSet::new()),
        }
    }

    pub(crate) fn render_context(&self) -> RenderContext {
        render_context(self.current.as_deref())
    }
}

/// Build a render context from an optional current page path.
pub(crate) fn render_context(current: Option<&str>) -> RenderContext {
    current.map_or_else(RenderContext::detached, RenderContext::new)
}

/// Convert `rw.toml` settings to helper settings.
pub(crate) fn helper_config_from_rw_config(config: &Config) -> HelperConfig {
    HelperConfig {
        images_root: config.helpers.images_root.clone(),
        active_title: config.helpers.active_title.clone(),
        external_prefixes: config.helpers.external_prefixes.clone(),
    }
}

/// Read a JSON page manifest.
pub(crate) fn load_pages(path: &Path) -> Result<PageSet, CliError> {
    let content = std::fs::read_to_string(path)?;
    let pages: PageSet = serde_json::from_str(&content).map_err(|source| CliError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = pages.len(), "Loaded page manifest");
    Ok(pages)
}

/// Parse a `key=value` attribute argument.
pub(crate) fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

/// Collect parsed attribute arguments in command-line order.
pub(crate) fn attributes(pairs: Vec<(String, String)>) -> Attributes {
    pairs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rw_helpers::Page;

    use super::*;

    #[test]
    fn test_parse_attribute() {
        assert_eq!(
            parse_attribute("title=My blog"),
            Ok(("title".to_owned(), "My blog".to_owned()))
        );
        assert_eq!(
            parse_attribute("data-x=a=b"),
            Ok(("data-x".to_owned(), "a=b".to_owned()))
        );
        assert_eq!(parse_attribute("alt="), Ok(("alt".to_owned(), String::new())));
    }

    #[test]
    fn test_parse_attribute_invalid() {
        assert!(parse_attribute("title").is_err());
        assert!(parse_attribute("=value").is_err());
    }

    #[test]
    fn test_render_context() {
        assert_eq!(render_context(Some("/about/")).current_path(), Some("/about/"));
        assert_eq!(render_context(None), RenderContext::detached());
    }

    #[test]
    fn test_helper_config_from_rw_config() {
        let mut config = Config::default();
        config.helpers.images_root = "/img".to_owned();

        let helper_config = helper_config_from_rw_config(&config);

        assert_eq!(helper_config.images_root, "/img");
        assert_eq!(helper_config.active_title, "You are here");
    }

    #[test]
    fn test_load_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.json");
        std::fs::write(
            &path,
            r#"[{"path": "/", "extension": "html"}, {"path": "/blog/", "extension": "html"}]"#,
        )
        .unwrap();

        let pages = load_pages(&path).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages.iter().next(), Some(&Page::new("/", "html")));
    }

    #[test]
    fn test_load_pages_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.json");
        std::fs::write(&path, r#"{"path": "/"}"#).unwrap();

        let err = load_pages(&path).unwrap_err();

        assert!(matches!(err, CliError::Manifest { .. }));
        assert!(err.to_string().contains("pages.json"));
    }

    #[test]
    fn test_load_pages_missing_file() {
        let err = load_pages(Path::new("/nonexistent/pages.json")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
