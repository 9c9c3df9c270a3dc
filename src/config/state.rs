// src/config/state.rs
use super::options::{AppOptions, PageKind};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab
    pub current_page: PageKind,

    /// Cocoa page -> draw the fitted line
    pub show_fit: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page: PageKind::Reviews,
            show_fit: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{PLOT_H, PLOT_W};

    #[test]
    fn default_window_holds_a_chart() {
        let gui = AppState::default().gui;
        assert!(gui.window_w >= PLOT_W);
        assert!(gui.window_h >= PLOT_H);
        assert_eq!(gui.current_page, PageKind::Reviews);
    }
}
