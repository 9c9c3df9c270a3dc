// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use cacao_scrape::{config::state::GuiState, gui};
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};

/// A cocoa bean: brown ellipse with a lighter center seam.
fn app_icon() -> IconData {
    const N: u32 = 64;
    let c = (N as f32 - 1.0) / 2.0;
    let rgba = RgbaImage::from_fn(N, N, |x, y| {
        let (dx, dy) = ((x as f32 - c) / 22.0, (y as f32 - c) / 30.0);
        let d = dx * dx + dy * dy;
        if d > 1.0 {
            Rgba([0, 0, 0, 0])
        } else if (x as f32 - c).abs() < 2.0 + 2.0 * (dy * 3.0).sin().abs() && d < 0.8 {
            Rgba([0xc8, 0x95, 0x6a, 255])
        } else {
            let shade = (1.0 - d * 0.4) * 255.0;
            Rgba([(0x6b as f32 * shade / 255.0) as u8, (0x3e as f32 * shade / 255.0) as u8, 0x26, 255])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
