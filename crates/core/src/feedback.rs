//! Default selection callback.

use crate::surface::Surface;

/// Highlights every selected element and clears the highlight from every
/// candidate that is no longer selected.
pub fn highlight<S: Surface>(surface: &mut S, selected: &[S::Element], candidates: &[S::Element]) {
    for element in selected {
        surface.set_highlighted(element, true);
    }

    for element in candidates.iter().filter(|c| !selected.contains(c)) {
        surface.set_highlighted(element, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use eframe::egui::{pos2, vec2, Rect};

    #[test]
    fn highlight_follows_selection() {
        let mut scene = Scene::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0)));
        let root = scene.root();
        let a = scene.add_child(root, "a", Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0)));
        let b = scene.add_child(root, "b", Rect::from_min_size(pos2(50.0, 50.0), vec2(10.0, 10.0)));

        highlight(&mut scene, &[a, b], &[a, b]);
        assert!(scene.is_highlighted(a) && scene.is_highlighted(b));

        highlight(&mut scene, &[b], &[a, b]);
        assert!(!scene.is_highlighted(a));
        assert!(scene.is_highlighted(b));
    }
}
