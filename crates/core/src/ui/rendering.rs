//! Drawing helpers for the interactive host.

use eframe::egui;

/// Draws the container frame.
pub fn draw_container(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(28));
    painter.rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
        egui::StrokeKind::Inside,
    );
}

/// Draws one candidate element, with its label in the top-left corner.
///
/// # Arguments
/// * `painter` - The egui painter to draw with
/// * `rect` - Bounding box of the element
/// * `label` - Text drawn inside the element
/// * `highlight` - Glow colour when the element is highlighted
/// * `depth` - Nesting depth below the container, used to shade nested elements
pub fn draw_element(
    painter: &egui::Painter,
    rect: egui::Rect,
    label: &str,
    highlight: Option<egui::Color32>,
    depth: usize,
) {
    let shade = 60u8.saturating_add((depth.min(4) as u8) * 20);
    painter.rect_filled(rect, 3.0, egui::Color32::from_gray(shade));

    if let Some(color) = highlight {
        // Outer glow, then a crisp edge
        painter.rect_stroke(rect, 3.0, egui::Stroke::new(6.0, color), egui::StrokeKind::Outside);
        painter.rect_stroke(
            rect,
            3.0,
            egui::Stroke::new(1.5, color.to_opaque()),
            egui::StrokeKind::Middle,
        );
    }

    painter.text(
        rect.min + egui::vec2(4.0, 4.0),
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
}

/// Draws the selection box.
pub fn draw_selection_box(painter: &egui::Painter, rect: egui::Rect, fill: egui::Color32) {
    painter.rect_filled(rect, 0.0, fill);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, fill.to_opaque()),
        egui::StrokeKind::Middle,
    );
}
