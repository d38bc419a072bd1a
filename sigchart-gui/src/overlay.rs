use eframe::egui;
use sigchart_core::PlotMapper;

const LABEL_MARGIN: f32 = 5.0;
const GUIDE_GRAY: egui::Color32 = egui::Color32::from_gray(64);

/// Pointer-driven inspection of the sample under the cursor: two guide lines
/// through the sample's position plus an `index : value` label that flips its
/// anchor near the viewport edges so it never clips outside the plot.
pub struct CursorReadout {
    pointer: egui::Pos2,
    plot_height: f32,
    guide_column: f32,
    guide_row: f32,
    text: String,
}

impl CursorReadout {
    /// `pointer` is viewport-local. Pointer rows below the plot area (over
    /// the status bar) are treated as if they were at the plot boundary.
    pub fn at(
        pointer: egui::Pos2,
        plot_height: f32,
        mapper: &PlotMapper,
        samples: &[f64],
    ) -> Self {
        let pointer = egui::pos2(pointer.x, pointer.y.min(plot_height));
        let index = mapper.index_at(pointer.x);
        let value = samples[index];
        Self {
            pointer,
            plot_height,
            guide_column: mapper.x(index),
            guide_row: mapper.y(value),
            text: format!("{index:4} : {value:.6}"),
        }
    }

    pub fn draw(&self, painter: &egui::Painter, rect: egui::Rect) {
        let stroke = egui::Stroke::new(1.0, GUIDE_GRAY);
        let column = rect.left() + self.guide_column;
        painter.line_segment(
            [
                egui::pos2(column, rect.top()),
                egui::pos2(column, rect.top() + self.plot_height),
            ],
            stroke,
        );
        if self.guide_row.is_finite() {
            let row = rect.top() + self.guide_row;
            painter.line_segment(
                [egui::pos2(rect.left(), row), egui::pos2(rect.right(), row)],
                stroke,
            );
        }

        let font = egui::FontId::monospace(12.0);
        let galley = painter.layout_no_wrap(self.text.clone(), font.clone(), GUIDE_GRAY);
        let (anchor, pos) = label_anchor(self.pointer, galley.size());
        painter.text(
            rect.min + pos.to_vec2(),
            anchor,
            &self.text,
            font,
            GUIDE_GRAY,
        );
    }
}

/// Picks the label anchor for a pointer position. The label normally sits
/// left of and above the pointer; within a label-width of the left edge it
/// flips to the right, and within a label-height of the top edge it flips
/// below, keeping the text inside the viewport.
fn label_anchor(pointer: egui::Pos2, label_size: egui::Vec2) -> (egui::Align2, egui::Pos2) {
    let flip_right = pointer.x - LABEL_MARGIN < label_size.x;
    let flip_below = pointer.y - LABEL_MARGIN < label_size.y;
    let x = if flip_right {
        pointer.x + LABEL_MARGIN
    } else {
        pointer.x - LABEL_MARGIN
    };
    let y = if flip_below {
        pointer.y + LABEL_MARGIN
    } else {
        pointer.y - LABEL_MARGIN
    };
    let anchor = match (flip_right, flip_below) {
        (false, false) => egui::Align2::RIGHT_BOTTOM,
        (true, false) => egui::Align2::LEFT_BOTTOM,
        (false, true) => egui::Align2::RIGHT_TOP,
        (true, true) => egui::Align2::LEFT_TOP,
    };
    (anchor, egui::pos2(x, y))
}

#[cfg(test)]
mod tests {
    use super::{label_anchor, CursorReadout};
    use eframe::egui;
    use sigchart_core::PlotMapper;

    const LABEL: egui::Vec2 = egui::vec2(80.0, 14.0);

    #[test]
    fn label_sits_left_of_and_above_the_pointer_by_default() {
        let (anchor, pos) = label_anchor(egui::pos2(400.0, 300.0), LABEL);
        assert_eq!(anchor, egui::Align2::RIGHT_BOTTOM);
        assert_eq!(pos, egui::pos2(395.0, 295.0));
    }

    #[test]
    fn label_flips_right_near_the_left_edge() {
        let (anchor, pos) = label_anchor(egui::pos2(20.0, 300.0), LABEL);
        assert_eq!(anchor, egui::Align2::LEFT_BOTTOM);
        assert_eq!(pos, egui::pos2(25.0, 295.0));
    }

    #[test]
    fn label_flips_below_near_the_top_edge() {
        let (anchor, pos) = label_anchor(egui::pos2(400.0, 10.0), LABEL);
        assert_eq!(anchor, egui::Align2::RIGHT_TOP);
        assert_eq!(pos, egui::pos2(395.0, 15.0));
    }

    #[test]
    fn label_flips_both_ways_in_the_corner() {
        let (anchor, _) = label_anchor(egui::pos2(10.0, 10.0), LABEL);
        assert_eq!(anchor, egui::Align2::LEFT_TOP);
    }

    #[test]
    fn pointer_at_the_right_edge_reads_the_last_sample() {
        let samples = [1.0, 2.0, 3.0, 4.0];
        let mapper = PlotMapper::new(samples.len(), 400.0, 300.0, (-1.0, 4.0));
        let readout = CursorReadout::at(egui::pos2(400.0, 100.0), 300.0, &mapper, &samples);
        assert!(readout.text.starts_with("   3 :"));
    }

    #[test]
    fn pointer_below_the_plot_clamps_to_the_boundary() {
        let samples = [0.0; 10];
        let mapper = PlotMapper::new(samples.len(), 400.0, 300.0, (-1.0, 1.0));
        let readout = CursorReadout::at(egui::pos2(200.0, 340.0), 300.0, &mapper, &samples);
        assert_eq!(readout.pointer.y, 300.0);
    }

    #[test]
    fn guides_follow_the_shared_mapper() {
        let samples = [0.0, 1.0, 2.0, 3.0];
        let mapper = PlotMapper::new(samples.len(), 300.0, 200.0, (-1.0, 3.0));
        let readout = CursorReadout::at(egui::pos2(150.0, 50.0), 200.0, &mapper, &samples);
        let index = mapper.index_at(150.0);
        assert_eq!(readout.guide_column, mapper.x(index));
        assert_eq!(readout.guide_row, mapper.y(samples[index]));
    }
}
