//! Canvas rendering: retained trail segments plus a dot per walker.

use eframe::egui::{self, Color32, Stroke, StrokeKind};

use walker_core::canvas::{CanvasSize, TrailBuffer};
use walker_core::ecs::{Position, Walker};
use walker_core::palette::Color;

use crate::app::WalkerApp;

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

pub fn render_canvas(ui: &mut egui::Ui, app: &mut WalkerApp) {
    let size = *app.world.resource::<CanvasSize>();
    let desired = egui::vec2(size.width as f32, size.height as f32);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect;
    let origin = rect.left_top();

    painter.rect_filled(rect, 0.0, Color32::from_gray(20));
    painter.rect_stroke(
        rect,
        0.0,
        Stroke::new(1.0, Color32::from_gray(60)),
        StrokeKind::Middle,
    );

    {
        let trail = app.world.resource::<TrailBuffer>();
        for segment in trail.segments() {
            painter.line_segment(
                [
                    origin + egui::vec2(segment.from.0 as f32, segment.from.1 as f32),
                    origin + egui::vec2(segment.to.0 as f32, segment.to.1 as f32),
                ],
                Stroke::new(segment.width as f32, to_color32(segment.color)),
            );
        }
    }

    let mut walkers = app.world.query::<(&Walker, &Position)>();
    for (walker, position) in walkers.iter(&app.world) {
        let center = origin + egui::vec2(position.x as f32, position.y as f32);
        let radius = (walker.line_width as f32).max(1.5);
        painter.circle_filled(center, radius, to_color32(walker.color));
    }
}
