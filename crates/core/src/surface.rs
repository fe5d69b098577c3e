//! The visual tree the engine operates on.
//!
//! The host application owns the tree. The engine only reads geometry and
//! structure from it, except for the single selection box element which it
//! creates, positions and removes through this trait.

use eframe::egui::Rect;
use std::fmt::Debug;

/// A host visual tree.
///
/// Element handles are compared by identity: two handles are equal when
/// they refer to the same element. Every geometry query must be answered
/// from the current layout, never from a cache.
pub trait Surface {
    /// Handle to an element of the tree.
    type Element: Clone + PartialEq + Debug;

    /// Returns whether `element` refers to a live element of this tree.
    fn contains(&self, element: &Self::Element) -> bool;

    /// Offset and client box of `container`, in viewport coordinates.
    fn client_bounds(&self, container: &Self::Element) -> Rect;

    /// Direct children of `element`, in document order.
    fn children(&self, element: &Self::Element) -> Vec<Self::Element>;

    /// Current bounding box of `element`, in viewport coordinates.
    fn bounding_box(&self, element: &Self::Element) -> Rect;

    /// Reserved marker carried by `element`, if any.
    fn marker(&self, element: &Self::Element) -> Option<&str>;

    /// Creates a detached element carrying `marker`.
    fn create_element(&mut self, marker: &str) -> Self::Element;

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element);

    /// Removes `child` from `parent`.
    fn remove_child(&mut self, parent: &Self::Element, child: &Self::Element);

    /// Positions and sizes `element`.
    fn set_geometry(&mut self, element: &Self::Element, rect: Rect);

    /// Applies or removes the highlight treatment on `element`.
    fn set_highlighted(&mut self, element: &Self::Element, highlighted: bool);
}
