use std::time::{Duration, Instant};

use eframe::egui;

use walker_core::clock::TICK_PERIOD_MS;

use crate::app::WalkerApp;
use crate::ui::canvas::render_canvas;
use crate::ui::controls::render_control_panel;

pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([860.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Random Walkers",
        options,
        Box::new(|_cc| Ok(Box::new(WalkerApp::new()))),
    )
}

impl eframe::App for WalkerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_settings();

        if self.running {
            let now = Instant::now();
            let last = self.last_frame_instant.unwrap_or(now);
            let mut delta_secs = now.saturating_duration_since(last).as_secs_f64();
            if delta_secs <= 0.0 {
                delta_secs = 0.016;
            }
            self.last_frame_instant = Some(now);
            // One simulation millisecond per wall-clock millisecond.
            self.advance_by_budget((delta_secs * 1000.0) as u64);
            ctx.request_repaint_after(Duration::from_millis(TICK_PERIOD_MS));
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            render_control_panel(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            render_canvas(ui, self);
        });
    }
}
