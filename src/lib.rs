// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod plot;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod store;
pub mod table;
