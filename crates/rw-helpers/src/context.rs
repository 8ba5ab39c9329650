/// The page currently being rendered.
///
/// Passed explicitly to every helper that produces relative URLs. A
/// detached context renders output that is not attached to any page
/// (shared partials, feeds); helpers treat it as a top-level page, except
/// [`relative_path_to`](crate::relative_path_to) which rejects it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderContext {
    current_path: Option<String>,
}

impl RenderContext {
    /// Context for the page at `current_path` (absolute URL path).
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: Some(current_path.into()),
        }
    }

    /// Context with no current page.
    #[must_use]
    pub fn detached() -> Self {
        Self { current_path: None }
    }

    /// Absolute path of the current page, if any.
    #[must_use]
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }
}
