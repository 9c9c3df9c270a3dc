// src/gui/components/chart.rs
//
// Minimal chart frame on an egui Painter: title, axes, ticks, axis labels.
// Pages draw their marks through `ChartFrame::to_screen`.

use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::plot::padded_range;

pub const BAR_FILL: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);
pub const FIT_LINE: Color32 = Color32::from_rgb(0xd6, 0x27, 0x28);

const TICKS: usize = 5;
const PAD_L: f32 = 56.0;
const PAD_R: f32 = 16.0;
const PAD_T: f32 = 32.0;
const PAD_B: f32 = 44.0;

pub struct ChartFrame {
    pub plot: Rect,
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub response: egui::Response,
}

impl ChartFrame {
    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        let tx = ((x - self.x.0) / (self.x.1 - self.x.0)) as f32;
        let ty = ((y - self.y.0) / (self.y.1 - self.y.0)) as f32;
        Pos2::new(
            self.plot.left() + tx * self.plot.width(),
            self.plot.bottom() - ty * self.plot.height(),
        )
    }

    pub fn from_screen(&self, p: Pos2) -> (f64, f64) {
        let tx = ((p.x - self.plot.left()) / self.plot.width()) as f64;
        let ty = ((self.plot.bottom() - p.y) / self.plot.height()) as f64;
        (
            self.x.0 + tx * (self.x.1 - self.x.0),
            self.y.0 + ty * (self.y.1 - self.y.0),
        )
    }
}

pub struct Labels<'a> {
    pub title: &'a str,
    pub x: &'a str,
    pub y: &'a str,
}

/// Allocate the remaining space and draw the empty frame.
pub fn frame(
    ui: &mut egui::Ui,
    labels: Labels<'_>,
    x: (f64, f64),
    y: (f64, f64),
) -> (Painter, ChartFrame) {
    let size = Vec2::new(ui.available_width(), ui.available_height().max(200.0));
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let outer = response.rect;
    let plot = Rect::from_min_max(
        Pos2::new(outer.left() + PAD_L, outer.top() + PAD_T),
        Pos2::new(outer.right() - PAD_R, outer.bottom() - PAD_B),
    );

    // same degenerate-range handling as the PNG renderer
    let x = padded_range([x.0, x.1].into_iter(), 0.0);
    let y = padded_range([y.0, y.1].into_iter(), 0.0);
    let frame = ChartFrame { plot, x, y, response };

    let visuals = ui.visuals();
    let text = visuals.text_color();
    let grid = Stroke::new(1.0, visuals.weak_text_color().linear_multiply(0.25));
    let axis = Stroke::new(1.0, text);
    let font = FontId::proportional(12.0);

    painter.text(
        Pos2::new(outer.center().x, outer.top() + 4.0),
        Align2::CENTER_TOP,
        labels.title,
        FontId::proportional(16.0),
        text,
    );

    for i in 0..=TICKS {
        let t = i as f64 / TICKS as f64;
        let xv = x.0 + t * (x.1 - x.0);
        let yv = y.0 + t * (y.1 - y.0);
        let px = frame.to_screen(xv, y.0).x;
        let py = frame.to_screen(x.0, yv).y;

        painter.line_segment([Pos2::new(px, plot.top()), Pos2::new(px, plot.bottom())], grid);
        painter.line_segment([Pos2::new(plot.left(), py), Pos2::new(plot.right(), py)], grid);

        painter.line_segment([Pos2::new(px, plot.bottom()), Pos2::new(px, plot.bottom() + 4.0)], axis);
        painter.text(Pos2::new(px, plot.bottom() + 6.0), Align2::CENTER_TOP, tick_label(xv, x), font.clone(), text);

        painter.line_segment([Pos2::new(plot.left() - 4.0, py), Pos2::new(plot.left(), py)], axis);
        painter.text(Pos2::new(plot.left() - 6.0, py), Align2::RIGHT_CENTER, tick_label(yv, y), font.clone(), text);
    }

    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis);

    painter.text(
        Pos2::new(plot.center().x, outer.bottom() - 2.0),
        Align2::CENTER_BOTTOM,
        labels.x,
        font.clone(),
        text,
    );
    painter.text(
        Pos2::new(outer.left() + 2.0, plot.top() - 6.0),
        Align2::LEFT_BOTTOM,
        labels.y,
        font,
        text,
    );

    (painter, frame)
}

/// Fewer decimals for wide ranges.
fn tick_label(v: f64, (lo, hi): (f64, f64)) -> String {
    let span = hi - lo;
    if span >= 20.0 { format!("{:.0}", v) }
    else if span >= 2.0 { format!("{:.1}", v) }
    else { format!("{:.2}", v) }
}
