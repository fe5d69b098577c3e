//! Lifecycle of the transient selection rectangle visual.

use crate::error::{Result, SelectError};
use crate::surface::Surface;
use eframe::egui::{self, Pos2, Rect};
use tracing::warn;

/// Marker carried by the selection rectangle element.
///
/// Candidate enumeration skips every element carrying it.
pub const SELECTION_BOX_MARKER: &str = "rubberband-selection-box";

/// Side length of the box created on press, before any movement.
///
/// Non-zero so that a plain click still overlaps whatever lies under it.
pub const INITIAL_BOX_SIZE: f32 = 0.5;

/// Owns the selection rectangle element for the duration of a drag.
#[derive(Debug)]
pub struct SelectionBox<E> {
    active: Option<E>,
}

impl<E> Default for SelectionBox<E> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<E: Clone + PartialEq + std::fmt::Debug> SelectionBox<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live rectangle element, if a drag is in progress.
    pub fn element(&self) -> Option<&E> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Creates the rectangle at `anchor` and appends it to `container`.
    ///
    /// The box is pulled back from the right and bottom edges so that it
    /// still lies inside the container's current bounds and covers `anchor`.
    pub fn create<S>(&mut self, surface: &mut S, container: &E, anchor: Pos2)
    where
        S: Surface<Element = E>,
    {
        debug_assert!(self.active.is_none(), "selection box already exists");

        let size = egui::vec2(INITIAL_BOX_SIZE, INITIAL_BOX_SIZE);
        let bounds = surface.client_bounds(container);
        let min = anchor.min(bounds.max - size).max(bounds.min);

        let element = surface.create_element(SELECTION_BOX_MARKER);
        surface.append_child(container, &element);
        surface.set_geometry(&element, Rect::from_min_size(min, size));
        self.active = Some(element);
    }

    /// Moves and resizes the live rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoActiveBox`] when no rectangle exists. Debug
    /// builds panic instead.
    pub fn update<S>(&self, surface: &mut S, rect: Rect) -> Result<()>
    where
        S: Surface<Element = E>,
    {
        debug_assert!(self.active.is_some(), "update without an active selection box");

        let Some(element) = &self.active else {
            warn!(?rect, "selection box update without an active box");
            return Err(SelectError::NoActiveBox);
        };
        surface.set_geometry(element, rect);
        Ok(())
    }

    /// Current geometry of the live rectangle, measured from the surface.
    pub fn bounds<S>(&self, surface: &S) -> Option<Rect>
    where
        S: Surface<Element = E>,
    {
        self.active.as_ref().map(|element| surface.bounding_box(element))
    }

    /// Removes the rectangle from `container`. No-op without one.
    pub fn destroy<S>(&mut self, surface: &mut S, container: &E)
    where
        S: Surface<Element = E>,
    {
        if let Some(element) = self.active.take() {
            surface.remove_child(container, &element);
        }
    }
}
