//! Control panel UI for walker settings and actions.

use eframe::egui;

use walker_core::config::{
    DIRECTION_LIMIT_RANGE, LINE_WIDTH_RANGE, SPEED_RANGE, WALKER_COUNT_RANGE,
};

use crate::app::WalkerApp;

/// Render the top control panel with run controls and walker settings.
pub fn render_control_panel(ui: &mut egui::Ui, app: &mut WalkerApp) {
    ui.horizontal(|ui| {
        if ui.button(if app.running { "Pause" } else { "Run" }).clicked() {
            app.running = !app.running;
            if app.running {
                app.last_frame_instant = Some(std::time::Instant::now());
            }
        }
        if ui.button("Step").clicked() {
            app.run_steps(1);
        }
        if ui.button("Restart").clicked() {
            app.restart();
        }
        if ui.button("Save settings").clicked() {
            app.save_settings();
        }
        if ui.button("Load settings").clicked() {
            app.load_settings();
        }
    });

    ui.horizontal(|ui| {
        ui.add(egui::Slider::new(&mut app.speed, SPEED_RANGE).text("Speed"));
        ui.add(egui::Slider::new(&mut app.line_width, LINE_WIDTH_RANGE).text("Line width"));
    });
    ui.horizontal(|ui| {
        ui.add(egui::Slider::new(&mut app.walker_count, WALKER_COUNT_RANGE).text("Walkers"));
        ui.add(
            egui::Slider::new(&mut app.direction_limit, DIRECTION_LIMIT_RANGE)
                .text("Direction limit"),
        );
    });
    ui.label("Direction limit applies immediately; other settings apply on restart.");

    let (total, halted) = app.walker_counts();
    ui.horizontal(|ui| {
        ui.label(format!("Sim time: {} ms", app.sim_time_ms()));
        ui.label(format!("Steps executed: {}", app.steps_executed));
        ui.label(format!("Walkers: {} ({} halted)", total, halted));
    });
}
