//! Translation of egui input into engine pointer events.

use crate::input::{PointerButton, PointerEvent, Scope};
use eframe::egui::{self, Rect};

/// Converts a raw egui event into a [`PointerEvent`].
///
/// Returns `None` for non-pointer events and for the extra mouse buttons.
pub fn translate(event: &egui::Event) -> Option<PointerEvent> {
    match event {
        egui::Event::PointerMoved(position) => Some(PointerEvent::Move { position: *position }),
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            if *pressed {
                let button = match button {
                    egui::PointerButton::Primary => PointerButton::Primary,
                    egui::PointerButton::Secondary => PointerButton::Secondary,
                    egui::PointerButton::Middle => PointerButton::Middle,
                    _ => return None,
                };
                Some(PointerEvent::Press { button, position: *pos })
            } else {
                Some(PointerEvent::Release { position: *pos })
            }
        }
        _ => None,
    }
}

/// Scopes an event at `position` reaches, innermost first.
pub fn scopes(container: Rect, position: egui::Pos2) -> &'static [Scope] {
    if container.contains(position) {
        &[Scope::Container, Scope::Global]
    } else {
        &[Scope::Global]
    }
}
