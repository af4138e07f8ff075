//! Terminal UI components.
//!
//! - [`layout`]: Screen regions and page-body geometry, shared with mouse input
//! - [`preview`]: Catalog thumbnails
//! - [`viewport`]: Scroll position of the page body
//! - [`style`]: Theming and colors

pub mod layout;
pub mod preview;
pub mod style;
pub mod text;
pub mod viewport;

mod content;
mod detail;
mod overlays;
mod overview;
mod render;
mod status;

pub use detail::body_lines;
pub use layout::{ContentLayout, ContentTarget, Element, content_area, content_layout, shell_areas};
pub use overlays::help_line_count;
pub use render::render;
pub use status::breadcrumb;

#[cfg(test)]
mod tests;
