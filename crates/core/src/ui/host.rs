//! Interactive host application.
//!
//! This module contains the `SelectionHost` struct which implements the
//! `eframe::App` trait: it draws a [`Scene`], feeds pointer input to a
//! [`DragSelector`] and lists the current selection in a side panel.

use super::pointer::{scopes, translate};
use super::rendering::{draw_container, draw_element, draw_selection_box};
use super::settings::Settings;
use crate::error::{Result, SelectError};
use crate::options::Options;
use crate::scene::{NodeId, Scene};
use crate::selection_box::SELECTION_BOX_MARKER;
use crate::selector::DragSelector;
use crate::surface::Surface;
use eframe::egui;
use tracing::{info, warn};

/// The interactive selection window.
pub struct SelectionHost {
    scene: Scene,
    selector: DragSelector<Scene>,
    settings: Settings,
    // Labels from the most recent callback
    selected: Vec<String>,
    candidate_count: usize,
}

impl SelectionHost {
    /// Creates a host and binds a selector to the scene's container.
    ///
    /// # Errors
    /// Fails if the selector cannot be bound to the container.
    pub fn new(scene: Scene, settings: Settings) -> Result<Self> {
        let selector = Self::bind(&scene, settings.deep)?;
        Ok(Self {
            scene,
            selector,
            settings,
            selected: Vec::new(),
            candidate_count: 0,
        })
    }

    fn bind(scene: &Scene, deep: bool) -> Result<DragSelector<Scene>> {
        DragSelector::bind(scene, scene.root(), Options::default().with_deep(deep))
    }

    /// Tears the current selector down and binds a fresh one.
    fn rebind(&mut self) {
        self.selector.destroy();
        match Self::bind(&self.scene, self.settings.deep) {
            Ok(selector) => self.selector = selector,
            Err(e) => warn!("Failed to rebind selector: {}", e),
        }
        if let Err(e) = self.settings.save() {
            warn!("Failed to save settings: {}", e);
        }
    }

    /// Forwards this frame's pointer events to the selector.
    fn process_input(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());
        let container = self.scene.rect(self.scene.root());

        for event in events.iter().filter_map(translate) {
            for scope in scopes(container, event.position()) {
                if let Some(result) = self.selector.dispatch(&mut self.scene, *scope, event) {
                    self.selected = self.scene.labels(&result.selected);
                    self.candidate_count = result.candidates.len();
                }
            }
        }
    }

    fn render_scene(&self, painter: &egui::Painter) {
        let root = self.scene.root();
        draw_container(painter, self.scene.rect(root));

        let mut stack: Vec<(NodeId, usize)> =
            self.scene.children(&root).into_iter().rev().map(|id| (id, 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            if self.scene.marker(&id) == Some(SELECTION_BOX_MARKER) {
                draw_selection_box(painter, self.scene.rect(id), self.settings.box_fill_color());
                continue;
            }

            let highlight = self
                .scene
                .is_highlighted(id)
                .then(|| self.settings.highlight_color());
            draw_element(painter, self.scene.rect(id), self.scene.label(id), highlight, depth);

            stack.extend(self.scene.children(&id).into_iter().rev().map(|c| (c, depth + 1)));
        }
    }

    fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("selection_panel")
            .min_width(180.0)
            .show(ctx, |ui| {
                ui.heading("Selection");

                let dragging = self.selector.is_dragging();
                let mut deep = self.settings.deep;
                let toggle = ui.add_enabled(!dragging, egui::Checkbox::new(&mut deep, "Deep traversal"));
                if toggle.changed() {
                    self.settings.deep = deep;
                    self.rebind();
                }

                ui.separator();
                ui.label(format!(
                    "{} of {} candidates",
                    self.selected.len(),
                    self.candidate_count
                ));
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for label in &self.selected {
                        ui.label(egui::RichText::new(label).monospace());
                    }
                });
            });
    }
}

impl eframe::App for SelectionHost {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.render_side_panel(ctx);

        let panel_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .outer_margin(egui::Margin::same(0));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                self.process_input(ctx);
                self.render_scene(ui.painter());
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Opens the host window and blocks until it is closed.
///
/// # Arguments
/// * `scene` - The visual tree to select in
/// * `settings` - Host preferences, including the initial traversal mode
pub fn run(scene: Scene, settings: Settings) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([940.0, 520.0]),
        ..Default::default()
    };

    let host = SelectionHost::new(scene, settings)?;
    info!("Opening selection window");

    eframe::run_native(
        "Rubberband",
        options,
        Box::new(move |_cc| Ok(Box::new(host) as Box<dyn eframe::App>)),
    )
    .map_err(|e| SelectError::ui(format!("Failed to run UI: {}", e)))
}
