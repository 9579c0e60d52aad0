//! Turns flat catalog rows into the ordered navigation forest that drives the
//! storefront mega menu and navigation bar.
//!
//! The stages are plain functions over owned data and can be used on their
//! own; [`build_navigation`] chains them.

pub mod aggregate;
pub mod error;
pub mod locale;
pub mod ordering;
pub mod pipeline;
pub mod summarize;
pub mod tree;

pub use aggregate::{aggregate_all, aggregate_products};
pub use error::NavError;
pub use locale::{resolve_text, Locale};
pub use ordering::order_roots;
pub use pipeline::{build_navigation, NavVariant};
pub use summarize::{resolve_image_url, summarize_product};
pub use tree::build_category_tree;
