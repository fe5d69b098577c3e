//! Rubberband Core Library
//!
//! Rubber-band (lasso) multi-selection over an existing visual tree. Inside
//! a container the user drags out a rectangle, and every element whose
//! bounding box overlaps it is reported live through a callback.
//!
//! # Overview
//!
//! The engine never owns the visual tree. It reads layout and structure
//! through the [`Surface`] trait and listens for input through an
//! [`InputBinder`], so it can be driven by a real window or by a synthetic
//! event script. The library handles:
//!
//! - **Geometry**: clamping, rectangle math and strict overlap via [`geometry`]
//! - **Candidates**: shallow or deep enumeration via [`candidates`]
//! - **Hit Testing**: selected vs. all candidates via [`hit_test`]
//! - **Selection Box**: the transient rectangle visual via [`selection_box`]
//! - **Drag Control**: the pointer state machine via [`selector`]
//! - **User Interface**: an interactive egui host via [`ui`]
//!
//! # Quick Start
//!
//! ```ignore
//! use rubberband_core::{bind, Options, PointerButton, PointerEvent, Scope};
//! use rubberband_core::scene::{Scene, SceneSpec};
//!
//! let mut scene = Scene::from_spec(&SceneSpec::demo());
//! let mut selector = bind(&scene, scene.root(), Options::default())?;
//!
//! let press = PointerEvent::Press { button: PointerButton::Primary, position: (70.0, 70.0).into() };
//! selector.dispatch(&mut scene, Scope::Container, press);
//! ```
//!
//! # Module Structure
//!
//! - [`candidates`]: Candidate enumeration
//! - [`config`]: Environment configuration
//! - [`error`]: Error types and result aliases
//! - [`feedback`]: Default highlight callback
//! - [`geometry`]: Pure rectangle helpers
//! - [`hit_test`]: Hit testing and selection results
//! - [`input`]: Pointer signals and the subscription seam
//! - [`options`]: Construction options
//! - [`scene`]: In-memory visual tree
//! - [`selection_box`]: Selection rectangle lifecycle
//! - [`selector`]: Drag state machine
//! - [`surface`]: Visual tree abstraction
//! - [`ui`]: Interactive host

pub mod candidates;
pub mod config;
pub mod error;
pub mod feedback;
pub mod geometry;
pub mod input;
pub mod options;
pub mod scene;
pub mod selection_box;
pub mod selector;
pub mod surface;
pub mod ui;

// Re-export primary types for convenience
pub use candidates::Traversal;
pub use config::Config;
pub use error::{Result, SelectError};
pub use hit_test::SelectionResult;
pub use input::{InputBinder, PointerButton, PointerEvent, Scope, Signal, Subscriptions};
pub use options::{Callback, Options};
pub use selector::{DragSelector, DragState};
pub use surface::Surface;

// Geometry types used throughout the public API
pub use eframe::egui::{pos2, Pos2, Rect};

/// Binds a selector to `container` with the default input binder.
///
/// Shorthand for [`DragSelector::bind`].
///
/// # Errors
///
/// Returns [`SelectError::UnknownContainer`] if `container` is not a live
/// element of `surface`.
pub fn bind<S: Surface + 'static>(
    surface: &S,
    container: S::Element,
    options: Options<S>,
) -> Result<DragSelector<S>> {
    DragSelector::bind(surface, container, options)
}

/// Initializes the library by loading environment variables.
///
/// Call this once at application startup before reading [`Config`].
/// This loads `.env` files if present.
pub fn init() {
    let _ = dotenvy::dotenv();
}
