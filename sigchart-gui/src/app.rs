use std::time::{Duration, Instant};

use eframe::egui;
use sigchart_core::{ChartColor, ChartSession};

use crate::render;

/// The cooperative driver: one `update` call is one loop iteration — feed
/// poll, input drain, paint, idle yield. All state lives on the UI thread;
/// nothing else ever touches it.
pub struct ChartApp {
    session: ChartSession,
    color: egui::Color32,
}

impl ChartApp {
    pub fn new(session: ChartSession, color: ChartColor) -> Self {
        let (r, g, b) = color.rgb();
        Self {
            session,
            color: egui::Color32::from_rgb(r, g, b),
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(err) = self.session.ingest(Instant::now()) {
            log::warn!("sample source error: {err}");
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.session.toggle_pause();
        }
        if ctx.input(|i| i.pointer.delta() != egui::Vec2::ZERO) {
            self.session.mark_dirty();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                render::draw_chart(ui, &self.session, self.color);
            });

        // Idle yield: wake immediately while samples are flowing, otherwise
        // tick over at a rate that keeps the readiness probe responsive
        // without pegging a core.
        if self.session.take_dirty() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_millis(15));
        }
    }
}
