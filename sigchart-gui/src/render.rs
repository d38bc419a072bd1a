use eframe::egui;
use sigchart_core::{ChartSession, PlotMapper};

use crate::overlay::CursorReadout;

const STATUS_BAR_HEIGHT: f32 = 16.0;
const SIGNAL_STROKE: f32 = 2.0;
const ZERO_GUIDE_GRAY: egui::Color32 = egui::Color32::from_gray(128);

/// Draws one frame: the signal strip, the zero guide, the status bar and,
/// when the pointer is over the plot, the cursor guides and label.
pub fn draw_chart(ui: &mut egui::Ui, session: &ChartSession, color: egui::Color32) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let plot_height = (rect.height() - STATUS_BAR_HEIGHT).max(0.0);
    let samples = session.window().as_slice();
    let mapper = PlotMapper::new(
        samples.len(),
        rect.width(),
        plot_height,
        session.range().clamp(),
    );

    draw_signal(&painter, rect, &mapper, samples, color);
    draw_status_bar(&painter, rect, plot_height, session);

    if let Some(pointer) = response.hover_pos() {
        let local = pointer - rect.min.to_vec2();
        CursorReadout::at(local, plot_height, &mapper, samples).draw(&painter, rect);
    }
}

fn draw_signal(
    painter: &egui::Painter,
    rect: egui::Rect,
    mapper: &PlotMapper,
    samples: &[f64],
    color: egui::Color32,
) {
    let stroke = egui::Stroke::new(SIGNAL_STROKE, color);
    for i in 1..samples.len() {
        let a = egui::pos2(
            rect.left() + mapper.x(i - 1),
            rect.top() + mapper.y(samples[i - 1]),
        );
        let b = egui::pos2(rect.left() + mapper.x(i), rect.top() + mapper.y(samples[i]));
        // Non-finite samples map to non-finite rows; skip those segments
        // rather than handing them to the tessellator.
        if !a.y.is_finite() || !b.y.is_finite() {
            continue;
        }
        painter.line_segment([a, b], stroke);
    }

    if let Some(row) = mapper.zero_row() {
        let y = rect.top() + row;
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            egui::Stroke::new(1.0, ZERO_GUIDE_GRAY),
        );
    }
}

fn draw_status_bar(
    painter: &egui::Painter,
    rect: egui::Rect,
    plot_height: f32,
    session: &ChartSession,
) {
    let separator_y = rect.top() + plot_height;
    painter.line_segment(
        [
            egui::pos2(rect.left(), separator_y),
            egui::pos2(rect.right(), separator_y),
        ],
        egui::Stroke::new(1.0, egui::Color32::WHITE),
    );

    let font = egui::FontId::monospace(12.0);
    let range = session.range();
    painter.text(
        egui::pos2(rect.left() + 10.0, separator_y),
        egui::Align2::LEFT_TOP,
        format!("max: {:.6}, min: {:.6}", range.max(), range.min()),
        font.clone(),
        egui::Color32::WHITE,
    );

    let mut last = format!("last: {:.6}", session.window().last());
    if session.paused() {
        last.push_str("  [paused]");
    }
    painter.text(
        egui::pos2(rect.right() - 10.0, separator_y),
        egui::Align2::RIGHT_TOP,
        last,
        font,
        egui::Color32::WHITE,
    );
}
