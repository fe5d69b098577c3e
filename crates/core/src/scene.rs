//! In-memory visual tree.
//!
//! [`Scene`] is an arena-backed [`Surface`] used by the headless replay
//! mode, the interactive host and the test suite. Scenes can be described
//! as JSON through [`SceneSpec`].
//!
//! # Example
//!
//! ```ignore
//! use rubberband_core::scene::Scene;
//!
//! let scene = Scene::load("scene.json")?;
//! for id in scene.descendants(scene.root()) {
//!     println!("{} {:?}", scene.label(id), scene.rect(id));
//! }
//! ```

use crate::error::Result;
use crate::surface::Surface;
use eframe::egui::{self, Rect};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Handle to an element of a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    marker: Option<String>,
    label: String,
    rect: Rect,
    highlighted: bool,
}

impl Node {
    fn new(label: String, marker: Option<String>, rect: Rect) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            marker,
            label,
            rect,
            highlighted: false,
        }
    }
}

/// An arena-backed visual tree rooted at a single container element.
///
/// Nodes are never freed: removing an element detaches it, and its handle
/// stays valid but is no longer [`contained`](Surface::contains).
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Scene {
    /// Creates a scene whose container occupies `container`.
    pub fn new(container: Rect) -> Self {
        Self {
            nodes: vec![Node::new("container".to_string(), None, container)],
            root: NodeId(0),
        }
    }

    /// Builds a scene from its JSON description.
    pub fn from_spec(spec: &SceneSpec) -> Self {
        let mut scene = Self::new(spec.container.to_rect());
        let root = scene.root();
        for element in &spec.elements {
            scene.add_spec(root, element);
        }
        scene
    }

    /// Reads and parses a JSON scene description from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Io`](crate::SelectError::Io) if the file
    /// cannot be read and [`SelectError::Json`](crate::SelectError::Json)
    /// if it is not a valid scene description.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let spec: SceneSpec = serde_json::from_str(&content)?;
        Ok(Self::from_spec(&spec))
    }

    fn add_spec(&mut self, parent: NodeId, spec: &ElementSpec) {
        let id = self.add_child(parent, &spec.label, spec.rect.to_rect());
        for child in &spec.children {
            self.add_spec(id, child);
        }
    }

    /// The container element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Appends a new labelled element occupying `rect` under `parent`.
    pub fn add_child(&mut self, parent: NodeId, label: &str, rect: Rect) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(label.to_string(), None, rect));
        self.attach(parent, id);
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != child);
        }
    }

    /// Moves or resizes an element.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        self.nodes[id.0].rect = rect;
    }

    /// Current rectangle of an element.
    pub fn rect(&self, id: NodeId) -> Rect {
        self.nodes[id.0].rect
    }

    /// Label of an element.
    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.0].label
    }

    /// Whether the highlight treatment is applied to an element.
    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.nodes[id.0].highlighted
    }

    /// Finds the first attached element with the given label, in document order.
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|id| self.label(*id) == label)
    }

    /// Every descendant of `id` in pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    /// Labels of the given elements, in order.
    pub fn labels(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|id| self.label(*id).to_string()).collect()
    }
}

impl Surface for Scene {
    type Element = NodeId;

    fn contains(&self, element: &NodeId) -> bool {
        let mut current = *element;
        if current.0 >= self.nodes.len() {
            return false;
        }
        loop {
            if current == self.root {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn client_bounds(&self, container: &NodeId) -> Rect {
        self.rect(*container)
    }

    fn children(&self, element: &NodeId) -> Vec<NodeId> {
        self.nodes[element.0].children.clone()
    }

    fn bounding_box(&self, element: &NodeId) -> Rect {
        self.rect(*element)
    }

    fn marker(&self, element: &NodeId) -> Option<&str> {
        self.nodes[element.0].marker.as_deref()
    }

    fn create_element(&mut self, marker: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(Node::new(String::new(), Some(marker.to_string()), Rect::NOTHING));
        id
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.attach(*parent, *child);
    }

    fn remove_child(&mut self, parent: &NodeId, child: &NodeId) {
        if self.nodes[child.0].parent == Some(*parent) {
            self.detach(*child);
        }
    }

    fn set_geometry(&mut self, element: &NodeId, rect: Rect) {
        self.set_rect(*element, rect);
    }

    fn set_highlighted(&mut self, element: &NodeId, highlighted: bool) {
        self.nodes[element.0].highlighted = highlighted;
    }
}

/// Rectangle in JSON scene descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RectSpec {
    pub fn to_rect(self) -> Rect {
        Rect::from_min_size(
            egui::pos2(self.left, self.top),
            egui::vec2(self.width, self.height),
        )
    }
}

/// An element and its subtree in a JSON scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub label: String,
    pub rect: RectSpec,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

/// JSON description of a scene: a container and its element tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSpec {
    pub container: RectSpec,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

impl SceneSpec {
    /// Built-in scene: a grid of cards, one of which holds nested chips.
    pub fn demo() -> Self {
        let rect = |left, top, width, height| RectSpec { left, top, width, height };
        let mut elements = Vec::new();
        for row in 0..3 {
            for col in 0..4 {
                let left = 60.0 + col as f32 * 150.0;
                let top = 60.0 + row as f32 * 130.0;
                let children = if row == 1 && col == 1 {
                    vec![
                        ElementSpec {
                            label: "chip-a".to_string(),
                            rect: rect(left + 10.0, top + 10.0, 40.0, 30.0),
                            children: Vec::new(),
                        },
                        ElementSpec {
                            label: "chip-b".to_string(),
                            rect: rect(left + 60.0, top + 50.0, 40.0, 30.0),
                            children: Vec::new(),
                        },
                    ]
                } else {
                    Vec::new()
                };
                elements.push(ElementSpec {
                    label: format!("card-{}{}", (b'A' + row as u8) as char, col + 1),
                    rect: rect(left, top, 120.0, 100.0),
                    children,
                });
            }
        }

        Self {
            container: rect(40.0, 40.0, 640.0, 420.0),
            elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    fn sample() -> Scene {
        let json = r#"{
            "container": { "left": 0, "top": 0, "width": 100, "height": 100 },
            "elements": [
                { "label": "a", "rect": { "left": 0, "top": 0, "width": 10, "height": 10 },
                  "children": [
                      { "label": "a1", "rect": { "left": 1, "top": 1, "width": 2, "height": 2 } }
                  ] },
                { "label": "b", "rect": { "left": 20, "top": 20, "width": 10, "height": 10 } }
            ]
        }"#;
        let spec: SceneSpec = serde_json::from_str(json).unwrap();
        Scene::from_spec(&spec)
    }

    #[test]
    fn spec_builds_tree_in_document_order() {
        let scene = sample();
        let root = scene.root();
        assert_eq!(scene.labels(&scene.children(&root)), vec!["a", "b"]);
        assert_eq!(scene.labels(&scene.descendants(root)), vec!["a", "a1", "b"]);
        assert_eq!(
            scene.rect(scene.find("b").unwrap()),
            Rect::from_min_size(pos2(20.0, 20.0), vec2(10.0, 10.0))
        );
    }

    #[test]
    fn created_elements_are_detached_until_appended() {
        let mut scene = sample();
        let root = scene.root();
        let el = scene.create_element("marker");
        assert!(!scene.contains(&el));
        assert_eq!(scene.marker(&el), Some("marker"));

        scene.append_child(&root, &el);
        assert!(scene.contains(&el));
        assert_eq!(scene.children(&root).last(), Some(&el));

        scene.remove_child(&root, &el);
        assert!(!scene.contains(&el));
        assert_eq!(scene.labels(&scene.children(&root)), vec!["a", "b"]);
    }

    #[test]
    fn unknown_handle_is_not_contained() {
        let scene = sample();
        assert!(!scene.contains(&NodeId(999)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Scene::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::SelectError::Io(_)));
    }

    #[test]
    fn load_reports_malformed_json() {
        let path = std::env::temp_dir().join(format!(
            "rubberband-malformed-scene-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "container": { "left": 0.0, "#).unwrap();

        let result = Scene::load(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(crate::SelectError::Json(_))));
    }

    #[test]
    fn demo_scene_fits_inside_its_container() {
        let scene = Scene::from_spec(&SceneSpec::demo());
        let bounds = scene.rect(scene.root());
        for id in scene.descendants(scene.root()) {
            assert!(bounds.contains_rect(scene.rect(id)), "{}", scene.label(id));
        }
    }
}
