//! Tests for subscription handling and teardown, using a recording binder
//! in place of a real input source.

mod common;

use common::*;
use rubberband_core::selection_box::SELECTION_BOX_MARKER;
use rubberband_core::{DragSelector, DragState, InputBinder, Scope, Signal, Subscriptions, Surface};

#[test]
fn bind_listens_for_container_presses_only() {
    let scene = two_card_scene();
    let (options, _calls) = recording(false);
    let selector =
        DragSelector::bind_with(&scene, scene.root(), options, RecordingBinder::default()).unwrap();

    assert_eq!(
        selector.input().log,
        vec![("subscribe", Scope::Container, Signal::Press)]
    );
}

#[test]
fn drag_subscribes_globally_and_release_drops_move() {
    let mut scene = two_card_scene();
    let (options, _calls) = recording(false);
    let mut selector =
        DragSelector::bind_with(&scene, scene.root(), options, RecordingBinder::default()).unwrap();

    deliver(&mut selector, &mut scene, press(5.0, 5.0));
    assert!(selector.input().is_subscribed(Scope::Global, Signal::Move));
    assert!(selector.input().is_subscribed(Scope::Global, Signal::Release));

    deliver(&mut selector, &mut scene, release(5.0, 5.0));
    assert!(!selector.input().is_subscribed(Scope::Global, Signal::Move));
    assert!(selector.input().is_subscribed(Scope::Global, Signal::Release));
    assert!(selector.input().is_subscribed(Scope::Container, Signal::Press));

    assert_eq!(
        selector.input().log,
        vec![
            ("subscribe", Scope::Container, Signal::Press),
            ("subscribe", Scope::Global, Signal::Move),
            ("subscribe", Scope::Global, Signal::Release),
            ("unsubscribe", Scope::Global, Signal::Move),
        ]
    );
}

#[test]
fn moves_reach_the_engine_only_at_global_scope() {
    let mut scene = two_card_scene();
    let (options, calls) = recording(false);
    let mut selector = DragSelector::bind(&scene, scene.root(), options).unwrap();

    selector.dispatch(&mut scene, Scope::Container, press(5.0, 5.0));
    assert!(selector
        .dispatch(&mut scene, Scope::Container, move_to(40.0, 40.0))
        .is_none());
    assert!(selector
        .dispatch(&mut scene, Scope::Global, move_to(40.0, 40.0))
        .is_some());
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn presses_reach_the_engine_only_at_container_scope() {
    let mut scene = two_card_scene();
    let (options, calls) = recording(false);
    let mut selector = DragSelector::bind(&scene, scene.root(), options).unwrap();

    assert!(selector
        .dispatch(&mut scene, Scope::Global, press(5.0, 5.0))
        .is_none());
    assert_eq!(selector.state(), DragState::Idle);
    assert!(calls.borrow().is_empty());
}

#[test]
fn destroy_stops_future_drags() {
    let mut scene = two_card_scene();
    let (options, calls) = recording(false);
    let mut selector = DragSelector::bind(&scene, scene.root(), options).unwrap();

    selector.destroy();
    deliver(&mut selector, &mut scene, press(20.0, 20.0));

    assert!(calls.borrow().is_empty());
    assert!(selector.selection_box().is_none());
    assert_eq!(scene.children(&scene.root()).len(), 2);
    assert!(selector.input().is_empty());
}

#[test]
fn destroy_mid_drag_leaves_rectangle_unresolved() {
    let mut scene = two_card_scene();
    let (options, calls) = recording(false);
    let mut selector = DragSelector::<_, Subscriptions>::bind(&scene, scene.root(), options).unwrap();

    deliver(&mut selector, &mut scene, press(5.0, 5.0));
    selector.destroy();

    // Release is no longer observed, so the drag never ends.
    deliver(&mut selector, &mut scene, release(50.0, 50.0));
    assert!(selector.is_dragging());
    let box_element = *selector.selection_box().unwrap();
    assert!(scene.contains(&box_element));
    assert_eq!(scene.marker(&box_element), Some(SELECTION_BOX_MARKER));

    // The move subscription made during the drag is still live.
    deliver(&mut selector, &mut scene, move_to(35.0, 35.0));
    assert_eq!(calls.borrow().last().unwrap().selected, vec!["A"]);
    assert_eq!(calls.borrow().len(), 2);
}
