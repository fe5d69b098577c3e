//! Pointer input signals and their subscription seam.
//!
//! Hosts translate platform events into [`PointerEvent`]s and deliver each
//! one once per [`Scope`] it reaches: [`Scope::Container`] when the pointer
//! is over the container, [`Scope::Global`] always. The engine declares
//! which signals it listens to through an [`InputBinder`]; events on
//! signals nobody subscribed to are dropped.

use eframe::egui::Pos2;
use std::collections::BTreeSet;

/// Where an input signal is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// The container element only.
    Container,
    /// Anywhere, including outside the container.
    Global,
}

/// The input signals the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Signal {
    Press,
    Move,
    Release,
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A raw pointer event, positioned in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { button: PointerButton, position: Pos2 },
    Move { position: Pos2 },
    Release { position: Pos2 },
}

impl PointerEvent {
    /// The signal this event is delivered on.
    pub fn signal(&self) -> Signal {
        match self {
            Self::Press { .. } => Signal::Press,
            Self::Move { .. } => Signal::Move,
            Self::Release { .. } => Signal::Release,
        }
    }

    pub fn position(&self) -> Pos2 {
        match *self {
            Self::Press { position, .. } | Self::Move { position } | Self::Release { position } => {
                position
            }
        }
    }
}

/// Subscribes and unsubscribes the engine's handlers to input signals.
///
/// Subscribing twice is the same as subscribing once, and unsubscribing a
/// signal that is not subscribed does nothing.
pub trait InputBinder {
    fn subscribe(&mut self, scope: Scope, signal: Signal);

    fn unsubscribe(&mut self, scope: Scope, signal: Signal);

    fn is_subscribed(&self, scope: Scope, signal: Signal) -> bool;
}

/// Default [`InputBinder`]: a set of live `(scope, signal)` subscriptions.
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    active: BTreeSet<(Scope, Signal)>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl InputBinder for Subscriptions {
    fn subscribe(&mut self, scope: Scope, signal: Signal) {
        self.active.insert((scope, signal));
    }

    fn unsubscribe(&mut self, scope: Scope, signal: Signal) {
        self.active.remove(&(scope, signal));
    }

    fn is_subscribed(&self, scope: Scope, signal: Signal) -> bool {
        self.active.contains(&(scope, signal))
    }
}
