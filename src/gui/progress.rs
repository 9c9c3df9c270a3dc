// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn step_done(&mut self, step: &str) {
        self.done += 1;
        if self.total == 0 {
            self.set_status(s!(step));
        } else {
            self.set_status(format!("{} ({}/{})", step, self.done, self.total));
        }
    }
    fn finish(&mut self) {
        self.set_status(s!("Ready"));
    }
}
