//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use rubberband_core::scene::{NodeId, Scene};
use rubberband_core::{
    pos2, DragSelector, InputBinder, Options, PointerButton, PointerEvent, Rect, Scope, Signal,
    Subscriptions, Surface,
};
use std::cell::RefCell;
use std::rc::Rc;

pub fn ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
    Rect::from_min_max(pos2(left, top), pos2(right, bottom))
}

/// Container at (0,0) sized 500x500 with A at (10,10,30,30) and B at
/// (200,200,230,230).
pub fn two_card_scene() -> Scene {
    let mut scene = Scene::new(ltrb(0.0, 0.0, 500.0, 500.0));
    let root = scene.root();
    scene.add_child(root, "A", ltrb(10.0, 10.0, 30.0, 30.0));
    scene.add_child(root, "B", ltrb(200.0, 200.0, 230.0, 230.0));
    scene
}

/// One recorded callback invocation, as labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub selected: Vec<String>,
    pub candidates: Vec<String>,
    /// Whether the selection box was still in the tree during the call.
    pub box_present: bool,
}

pub type Calls = Rc<RefCell<Vec<Call>>>;

/// Options whose callback records every invocation.
pub fn recording(deep: bool) -> (Options<Scene>, Calls) {
    let calls: Calls = Rc::default();
    let sink = Rc::clone(&calls);
    let options = Options::<Scene>::default()
        .with_deep(deep)
        .with_callback(move |scene: &mut Scene, selected: &[NodeId], all: &[NodeId]| {
            let box_present = scene
                .children(&scene.root())
                .iter()
                .any(|id| scene.marker(id).is_some());
            sink.borrow_mut().push(Call {
                selected: scene.labels(selected),
                candidates: scene.labels(all),
                box_present,
            });
        });
    (options, calls)
}

pub fn press(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Press {
        button: PointerButton::Primary,
        position: pos2(x, y),
    }
}

pub fn move_to(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move { position: pos2(x, y) }
}

pub fn release(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Release { position: pos2(x, y) }
}

/// Delivers `event` the way a host would: container scope when inside the
/// container, then global scope.
pub fn deliver<B: InputBinder>(
    selector: &mut DragSelector<Scene, B>,
    scene: &mut Scene,
    event: PointerEvent,
) {
    let container = scene.rect(scene.root());
    if container.contains(event.position()) {
        selector.dispatch(scene, Scope::Container, event);
    }
    selector.dispatch(scene, Scope::Global, event);
}

/// Binder that records every subscription change.
#[derive(Debug, Default)]
pub struct RecordingBinder {
    inner: Subscriptions,
    pub log: Vec<(&'static str, Scope, Signal)>,
}

impl InputBinder for RecordingBinder {
    fn subscribe(&mut self, scope: Scope, signal: Signal) {
        self.log.push(("subscribe", scope, signal));
        self.inner.subscribe(scope, signal);
    }

    fn unsubscribe(&mut self, scope: Scope, signal: Signal) {
        self.log.push(("unsubscribe", scope, signal));
        self.inner.unsubscribe(scope, signal);
    }

    fn is_subscribed(&self, scope: Scope, signal: Signal) -> bool {
        self.inner.is_subscribed(scope, signal)
    }
}
