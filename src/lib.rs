// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. nav::NavError)
    clippy::module_name_repetitions
)]

//! # cochl-ds
//!
//! A terminal browser for the Cochl design-system component catalog.
//!
//! The catalog groups component previews by category on an overview grid
//! and documents the navigation bar and tabs components on detail pages with
//! Overview, Guidelines and Usage tabs.
//!
//! ## Architecture
//!
//! cochl-ds uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`catalog`]: Static component catalog, previews and detail copy
//! - [`nav`]: Sidebar navigation tree
//! - [`view`]: Page, detail tab and "show all" state
//! - [`app`]: Main application loop and state
//! - [`action`]: Scripted transitions for headless runs
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags
//! - [`perf`]: Timing and debug event log

pub mod action;
pub mod app;
pub mod catalog;
pub mod config;
pub mod nav;
pub mod perf;
pub mod ui;
pub mod view;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, Snapshot, update};
    pub use crate::catalog::{Catalog, PreviewId};
    pub use crate::nav::{CategorySection, NavigationTree};
    pub use crate::ui::viewport::Viewport;
    pub use crate::view::{DetailTab, Page};
}
