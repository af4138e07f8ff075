//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Focus, Model, RailItem, Snapshot};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
#[derive(Debug, Clone)]
pub struct App {
    ascii: bool,
    mouse_enabled: bool,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application with a fresh catalog session.
    pub const fn new() -> Self {
        Self {
            ascii: false,
            mouse_enabled: true,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Draw chevrons and arrows with ASCII characters.
    pub const fn with_ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    /// Enable or disable mouse capture.
    pub const fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }

    /// Build the initial model for a terminal of the given size.
    pub(crate) fn initial_model(&self, size: (u16, u16)) -> Model {
        let mut model = Model::new(size);
        model.ascii = self.ascii;
        model.mouse_enabled = self.mouse_enabled;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        model
    }
}

#[cfg(test)]
mod tests;
