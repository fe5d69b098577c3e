//! Candidate enumeration.

use crate::selection_box::SELECTION_BOX_MARKER;
use crate::surface::Surface;

/// How far below the container candidates are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Direct children only.
    #[default]
    Shallow,
    /// Every descendant, in pre-order.
    Deep,
}

impl From<bool> for Traversal {
    fn from(deep: bool) -> Self {
        if deep { Self::Deep } else { Self::Shallow }
    }
}

/// Elements eligible for selection under `container`, in document order.
///
/// Any element carrying [`SELECTION_BOX_MARKER`] is left out, whether or
/// not it is the box this engine created. The walk is redone from scratch
/// on every call.
pub fn candidates<S: Surface>(
    surface: &S,
    container: &S::Element,
    traversal: Traversal,
) -> Vec<S::Element> {
    let elements = match traversal {
        Traversal::Shallow => surface.children(container),
        Traversal::Deep => {
            let mut out = Vec::new();
            let mut stack: Vec<S::Element> = surface.children(container).into_iter().rev().collect();
            while let Some(next) = stack.pop() {
                stack.extend(surface.children(&next).into_iter().rev());
                out.push(next);
            }
            out
        }
    };

    elements
        .into_iter()
        .filter(|element| surface.marker(element) != Some(SELECTION_BOX_MARKER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use eframe::egui::{pos2, vec2, Rect};

    fn rect(x: f32, y: f32) -> Rect {
        Rect::from_min_size(pos2(x, y), vec2(10.0, 10.0))
    }

    fn nested() -> Scene {
        let mut scene = Scene::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(200.0, 200.0)));
        let root = scene.root();
        let a = scene.add_child(root, "a", rect(0.0, 0.0));
        scene.add_child(a, "a1", rect(1.0, 1.0));
        let a2 = scene.add_child(a, "a2", rect(2.0, 2.0));
        scene.add_child(a2, "a2x", rect(3.0, 3.0));
        scene.add_child(root, "b", rect(50.0, 50.0));
        scene
    }

    #[test]
    fn shallow_returns_direct_children() {
        let scene = nested();
        let found = candidates(&scene, &scene.root(), Traversal::Shallow);
        assert_eq!(scene.labels(&found), vec!["a", "b"]);
    }

    #[test]
    fn deep_returns_preorder_descendants() {
        let scene = nested();
        let found = candidates(&scene, &scene.root(), Traversal::Deep);
        assert_eq!(scene.labels(&found), vec!["a", "a1", "a2", "a2x", "b"]);
    }

    #[test]
    fn marked_elements_are_excluded() {
        let mut scene = nested();
        let root = scene.root();
        let marked = scene.create_element(SELECTION_BOX_MARKER);
        scene.append_child(&root, &marked);

        for traversal in [Traversal::Shallow, Traversal::Deep] {
            let found = candidates(&scene, &root, traversal);
            assert!(!found.contains(&marked));
        }
    }

    #[test]
    fn traversal_from_flag() {
        assert_eq!(Traversal::from(true), Traversal::Deep);
        assert_eq!(Traversal::from(false), Traversal::Shallow);
        assert_eq!(Traversal::default(), Traversal::Shallow);
    }
}
