//! The drag state machine.
//!
//! A [`DragSelector`] is bound to one container. A primary press on the
//! container starts a drag and creates the selection box. Every global move
//! clamps the pointer to the container, resizes the box and reports a fresh
//! hit test. A global release reports one last time and removes the box.
//!
//! ```text
//! Idle --primary press--> Dragging --move--> Dragging
//!   ^                        |
//!   +-------release----------+
//! ```

use crate::candidates::Traversal;
use crate::error::{Result, SelectError};
use crate::geometry::{clamp, rect_from_corners};
use crate::hit_test::{hit_test, SelectionResult};
use crate::input::{InputBinder, PointerButton, PointerEvent, Scope, Signal, Subscriptions};
use crate::options::{Callback, Options};
use crate::selection_box::SelectionBox;
use crate::surface::Surface;
use eframe::egui::Pos2;
use tracing::debug;

/// Per-instance drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag started at `anchor`.
    Dragging { anchor: Pos2 },
}

/// Rubber-band selection engine bound to a single container.
pub struct DragSelector<S: Surface, B: InputBinder = Subscriptions> {
    container: S::Element,
    traversal: Traversal,
    callback: Callback<S>,
    state: DragState,
    selection_box: SelectionBox<S::Element>,
    input: B,
}

impl<S: Surface + 'static> DragSelector<S, Subscriptions> {
    /// Binds a new engine to `container` with the default input binder.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnknownContainer`] if `container` is not a
    /// live element of `surface`.
    pub fn bind(surface: &S, container: S::Element, options: Options<S>) -> Result<Self> {
        Self::bind_with(surface, container, options, Subscriptions::new())
    }
}

impl<S: Surface + 'static, B: InputBinder> DragSelector<S, B> {
    /// Binds a new engine to `container`, subscribing through `input`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnknownContainer`] if `container` is not a
    /// live element of `surface`.
    pub fn bind_with(
        surface: &S,
        container: S::Element,
        options: Options<S>,
        mut input: B,
    ) -> Result<Self> {
        if !surface.contains(&container) {
            return Err(SelectError::UnknownContainer);
        }

        let (callback, traversal) = options.resolve();
        input.subscribe(Scope::Container, Signal::Press);
        debug!(?container, ?traversal, "drag selector bound");

        Ok(Self {
            container,
            traversal,
            callback,
            state: DragState::Idle,
            selection_box: SelectionBox::new(),
            input,
        })
    }
}

impl<S: Surface, B: InputBinder> DragSelector<S, B> {
    /// Delivers one pointer event observed at `scope`.
    ///
    /// Returns the result passed to the callback, if the event produced one.
    /// Events on signals not subscribed at `scope` are dropped.
    pub fn dispatch(
        &mut self,
        surface: &mut S,
        scope: Scope,
        event: PointerEvent,
    ) -> Option<SelectionResult<S::Element>> {
        if !self.input.is_subscribed(scope, event.signal()) {
            return None;
        }

        match event {
            PointerEvent::Press { button, position } => self.on_press(surface, button, position),
            PointerEvent::Move { position } => self.on_move(surface, position),
            PointerEvent::Release { .. } => self.on_release(surface),
        }
    }

    fn on_press(
        &mut self,
        surface: &mut S,
        button: PointerButton,
        position: Pos2,
    ) -> Option<SelectionResult<S::Element>> {
        if button != PointerButton::Primary {
            return None;
        }
        if let DragState::Dragging { anchor } = self.state {
            debug!(?anchor, ?position, "press ignored, drag already in progress");
            return None;
        }

        debug!(anchor = ?position, "drag started");
        self.state = DragState::Dragging { anchor: position };
        self.selection_box.create(surface, &self.container, position);
        let result = self.report(surface);

        self.input.subscribe(Scope::Global, Signal::Move);
        self.input.subscribe(Scope::Global, Signal::Release);
        result
    }

    fn on_move(&mut self, surface: &mut S, position: Pos2) -> Option<SelectionResult<S::Element>> {
        let DragState::Dragging { anchor } = self.state else {
            return None;
        };

        let bounds = surface.client_bounds(&self.container);
        let rect = rect_from_corners(anchor, clamp(position, bounds));
        self.selection_box.update(surface, rect).ok()?;
        self.report(surface)
    }

    fn on_release(&mut self, surface: &mut S) -> Option<SelectionResult<S::Element>> {
        let result = match self.state {
            DragState::Dragging { .. } => {
                let result = self.report(surface);
                self.selection_box.destroy(surface, &self.container);
                self.state = DragState::Idle;
                debug!(
                    selected = result.as_ref().map_or(0, |r| r.selected.len()),
                    "drag ended"
                );
                result
            }
            DragState::Idle => None,
        };

        self.input.unsubscribe(Scope::Global, Signal::Move);
        result
    }

    /// Hit tests the live box and hands the result to the callback.
    fn report(&mut self, surface: &mut S) -> Option<SelectionResult<S::Element>> {
        let rect = self.selection_box.bounds(surface)?;
        let result = hit_test(surface, &self.container, self.traversal, rect);
        (self.callback)(surface, &result.selected, &result.candidates);
        Some(result)
    }

    /// Stops listening for presses on the container and for global releases.
    ///
    /// A drag in progress is left as it is: its box stays in the tree and
    /// the global move subscription stays live.
    pub fn destroy(&mut self) {
        self.input.unsubscribe(Scope::Container, Signal::Press);
        self.input.unsubscribe(Scope::Global, Signal::Release);
        debug!(dragging = self.is_dragging(), "drag selector torn down");
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn container(&self) -> &S::Element {
        &self.container
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// The live selection box element, if a drag is in progress.
    pub fn selection_box(&self) -> Option<&S::Element> {
        self.selection_box.element()
    }

    pub fn input(&self) -> &B {
        &self.input
    }
}
