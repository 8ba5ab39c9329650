//! Helper error types.

/// Error returned by helpers whose preconditions cannot be met.
///
/// Unresolvable identifiers and empty attribute values are not errors;
/// they fall back to literal output.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HelperError {
    /// The operation needs a current page but the context is detached.
    #[error("Invalid render context: no current page")]
    InvalidRenderContext,
    /// One path is absolute and the other is relative.
    #[error("Cannot relate {target} to {base}: different path prefixes")]
    MixedPathKinds {
        /// Path being linked to.
        target: String,
        /// Directory of the current page.
        base: String,
    },
    /// The current directory climbs above its starting point with `..`,
    /// so no relative path to the target can be computed.
    #[error("Cannot relate {target} to {base}: base directory has ..")]
    UnresolvableBase {
        /// Path being linked to.
        target: String,
        /// Directory of the current page.
        base: String,
    },
}
