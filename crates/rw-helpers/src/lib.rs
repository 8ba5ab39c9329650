//! Template helpers for static page rendering.
//!
//! This crate provides the building blocks templates use to reference other
//! pages without knowing their final URLs:
//! - [`locate`] / [`resolve`]: map a page identifier (e.g. `"blog/post#intro"`)
//!   to a page in a [`PageSet`] and to a URL relative to the current page
//! - [`dot_relative`] / [`relative_path_to`]: the two relativization styles
//! - [`link_to`] / [`link_to_unless_current`]: anchor links with an "active"
//!   marker for the current page
//! - [`tag`] / [`content_tag`] / [`image_tag`]: generic HTML element strings
//!
//! The page being rendered is always passed explicitly as a
//! [`RenderContext`]; nothing here keeps global render state.
//!
//! # Example
//!
//! ```
//! use rw_helpers::{Attributes, Helpers, Page, PageSet, RenderContext, Target};
//!
//! let pages = PageSet::from(vec![
//!     Page::new("/", "html"),
//!     Page::new("/blog/post/", "html"),
//! ]);
//! let helpers = Helpers::new(&pages);
//! let ctx = RenderContext::new("/about/");
//!
//! let link = helpers.link_to(&ctx, "Post", Some(Target::from("blog/post")), &Attributes::new());
//! assert_eq!(link, r#"<a href="./blog/post/">Post</a>"#);
//! ```

mod attributes;
mod context;
mod error;
mod escape;
mod helpers;
mod link;
mod page;
pub mod path;
mod relative;
mod resolver;
mod tag;

pub use attributes::Attributes;
pub use context::RenderContext;
pub use error::HelperError;
pub use escape::escape_html;
pub use helpers::{HelperConfig, Helpers};
pub use link::{link_to, link_to_unless_current};
pub use page::{Page, PageSet, Target};
pub use relative::{dot_relative, relative_path_to};
pub use resolver::{ResolvedTarget, locate, path_for, resolve};
pub use tag::{content_tag, image_tag, tag};
