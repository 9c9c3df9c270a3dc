// src/plot.rs
//
// Static PNG rendering of the two charts (histogram, scatter + fit line).
// Plain raster drawing on an `image::RgbaImage`; titles and axis labels are
// left to the interactive GUI.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::analysis::{Histogram, LinearFit};

const BG: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AXIS: Rgba<u8> = Rgba([40, 40, 40, 255]);
const GRID: Rgba<u8> = Rgba([225, 225, 225, 255]);
const BAR: Rgba<u8> = Rgba([0x1f, 0x77, 0xb4, 255]);
const BAR_EDGE: Rgba<u8> = Rgba([0x15, 0x53, 0x7e, 255]);
const POINT: Rgba<u8> = Rgba([0x1f, 0x77, 0xb4, 200]);
const FIT: Rgba<u8> = Rgba([0xd6, 0x27, 0x28, 255]);

const MARGIN: u32 = 40;
const TICKS: usize = 5;

/// Data → pixel mapping for one plot area.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub w: u32,
    pub h: u32,
}

impl Frame {
    pub fn new(x: (f64, f64), y: (f64, f64), w: u32, h: u32) -> Self {
        Self { x: widen(x), y: widen(y), w, h }
    }

    fn left(&self) -> f64 { MARGIN as f64 }
    fn right(&self) -> f64 { self.w.saturating_sub(MARGIN) as f64 }
    fn top(&self) -> f64 { MARGIN as f64 }
    fn bottom(&self) -> f64 { self.h.saturating_sub(MARGIN) as f64 }

    pub fn px(&self, x: f64) -> f64 {
        self.left() + (x - self.x.0) / (self.x.1 - self.x.0) * (self.right() - self.left())
    }

    pub fn py(&self, y: f64) -> f64 {
        self.bottom() - (y - self.y.0) / (self.y.1 - self.y.0) * (self.bottom() - self.top())
    }
}

/// Zero-width ranges get ±0.5 so the mapping stays finite.
fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo { (lo, hi) } else { (lo - 0.5, lo + 0.5) }
}

/// Range of `values` plus `pad` (fraction of the span) on both ends.
pub fn padded_range(values: impl Iterator<Item = f64>, pad: f64) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    let (lo, hi) = widen((lo, hi));
    let d = (hi - lo) * pad;
    (lo - d, hi + d)
}

pub fn render_histogram(
    hist: &Histogram,
    path: &Path,
    w: u32,
    h: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut img = RgbaImage::from_pixel(w, h, BG);
    let y_max = (hist.max_count().max(1) as f64) * 1.05;
    let frame = Frame::new((hist.lo, hist.hi), (0.0, y_max), w, h);

    draw_grid(&mut img, &frame);

    let edges = hist.edges();
    for (i, &count) in hist.counts.iter().enumerate() {
        if count == 0 { continue; }
        let x0 = frame.px(edges[i]);
        let x1 = frame.px(edges[i + 1]);
        let y0 = frame.py(count as f64);
        let y1 = frame.py(0.0);
        fill_rect(&mut img, x0, y0, x1, y1, BAR);
        stroke_rect(&mut img, x0, y0, x1, y1, BAR_EDGE);
    }

    draw_axes(&mut img, &frame);
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

pub fn render_scatter(
    points: &[(f64, f64)],
    fit: Option<&LinearFit>,
    path: &Path,
    w: u32,
    h: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut img = RgbaImage::from_pixel(w, h, BG);
    let x = padded_range(points.iter().map(|p| p.0), 0.05);
    let y = padded_range(points.iter().map(|p| p.1), 0.05);
    let frame = Frame::new(x, y, w, h);

    draw_grid(&mut img, &frame);

    for &(px, py) in points {
        fill_circle(&mut img, frame.px(px), frame.py(py), 3.0, POINT);
    }

    if let Some(fit) = fit {
        // dashed, like "r--"
        let (x0, x1) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.0), hi.max(p.0)));
        if x0.is_finite() {
            let a = (frame.px(x0), frame.py(fit.eval(x0)));
            let b = (frame.px(x1), frame.py(fit.eval(x1)));
            draw_dashed_line(&mut img, a, b, 10.0, 6.0, FIT);
        }
    }

    draw_axes(&mut img, &frame);
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/* ---------- raster helpers ---------- */

fn put(img: &mut RgbaImage, x: i64, y: i64, c: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, c);
    }
}

fn fill_rect(img: &mut RgbaImage, x0: f64, y0: f64, x1: f64, y1: f64, c: Rgba<u8>) {
    let (xa, xb) = (x0.min(x1).round() as i64, x0.max(x1).round() as i64);
    let (ya, yb) = (y0.min(y1).round() as i64, y0.max(y1).round() as i64);
    for y in ya..=yb {
        for x in xa..=xb {
            put(img, x, y, c);
        }
    }
}

fn stroke_rect(img: &mut RgbaImage, x0: f64, y0: f64, x1: f64, y1: f64, c: Rgba<u8>) {
    draw_line(img, (x0, y0), (x1, y0), c);
    draw_line(img, (x1, y0), (x1, y1), c);
    draw_line(img, (x1, y1), (x0, y1), c);
    draw_line(img, (x0, y1), (x0, y0), c);
}

fn fill_circle(img: &mut RgbaImage, cx: f64, cy: f64, r: f64, c: Rgba<u8>) {
    let ri = r.ceil() as i64;
    let (cxi, cyi) = (cx.round() as i64, cy.round() as i64);
    for dy in -ri..=ri {
        for dx in -ri..=ri {
            if ((dx * dx + dy * dy) as f64) <= r * r {
                put(img, cxi + dx, cyi + dy, c);
            }
        }
    }
}

fn draw_line(img: &mut RgbaImage, a: (f64, f64), b: (f64, f64), c: Rgba<u8>) {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        put(img, (a.0 + dx * t).round() as i64, (a.1 + dy * t).round() as i64, c);
    }
}

fn draw_dashed_line(
    img: &mut RgbaImage,
    a: (f64, f64),
    b: (f64, f64),
    dash: f64,
    gap: f64,
    c: Rgba<u8>,
) {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 { return; }
    let (ux, uy) = (dx / len, dy / len);

    let mut s = 0.0;
    while s < len {
        let e = (s + dash).min(len);
        let p = (a.0 + ux * s, a.1 + uy * s);
        let q = (a.0 + ux * e, a.1 + uy * e);
        // 2px thick
        draw_line(img, p, q, c);
        draw_line(img, (p.0, p.1 + 1.0), (q.0, q.1 + 1.0), c);
        s = e + gap;
    }
}

fn draw_grid(img: &mut RgbaImage, f: &Frame) {
    for i in 0..=TICKS {
        let t = i as f64 / TICKS as f64;
        let x = f.left() + t * (f.right() - f.left());
        let y = f.top() + t * (f.bottom() - f.top());
        draw_line(img, (x, f.top()), (x, f.bottom()), GRID);
        draw_line(img, (f.left(), y), (f.right(), y), GRID);
    }
}

fn draw_axes(img: &mut RgbaImage, f: &Frame) {
    draw_line(img, (f.left(), f.bottom()), (f.right(), f.bottom()), AXIS);
    draw_line(img, (f.left(), f.top()), (f.left(), f.bottom()), AXIS);
    for i in 0..=TICKS {
        let t = i as f64 / TICKS as f64;
        let x = f.left() + t * (f.right() - f.left());
        let y = f.top() + t * (f.bottom() - f.top());
        draw_line(img, (x, f.bottom()), (x, f.bottom() + 5.0), AXIS);
        draw_line(img, (f.left() - 5.0, y), (f.left(), y), AXIS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_maps_corners() {
        let f = Frame::new((0.0, 10.0), (1.0, 5.0), 200, 100);
        assert_eq!(f.px(0.0), MARGIN as f64);
        assert_eq!(f.px(10.0), 160.0);
        assert_eq!(f.py(1.0), 60.0);
        assert_eq!(f.py(5.0), MARGIN as f64);
    }

    #[test]
    fn padded_range_handles_degenerate_input() {
        assert_eq!(padded_range(std::iter::empty(), 0.05), (0.0, 1.0));
        let (lo, hi) = padded_range([70.0, 70.0].into_iter(), 0.0);
        assert_eq!((lo, hi), (69.5, 70.5));
    }
}
