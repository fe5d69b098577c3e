//! Interactive host for the selection engine.
//!
//! Opens a window that draws a [`Scene`](crate::scene::Scene) and drives a
//! [`DragSelector`](crate::DragSelector) from real pointer input.
//!
//! # Architecture
//!
//! The UI is split into focused submodules:
//! - [`settings`]: User preferences and persistence
//! - [`rendering`]: Drawing utilities for the container, elements and box
//! - [`pointer`]: Translation of egui events into engine input
//! - [`host`]: Main application logic
//!
//! # Usage
//!
//! ```ignore
//! use rubberband_core::scene::{Scene, SceneSpec};
//! use rubberband_core::ui::{self, Settings};
//!
//! let scene = Scene::from_spec(&SceneSpec::demo());
//! ui::run_selection_ui(scene, Settings::load(false))?;
//! ```

mod host;
mod pointer;
mod rendering;
mod settings;

// Public API exports
pub use host::SelectionHost;
pub use pointer::{scopes, translate};
pub use settings::Settings;

use crate::error::Result;
use crate::scene::Scene;

/// Launches the selection window and blocks until it is closed.
///
/// # Errors
/// Returns an error if the selector cannot be bound or the window fails.
pub fn run_selection_ui(scene: Scene, settings: Settings) -> Result<()> {
    host::run(scene, settings)
}
