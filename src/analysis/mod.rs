// src/analysis/mod.rs
//! Descriptive analyses over a `ReviewTable`: rating histogram, top companies
//! by mean rating, and the cocoa-vs-rating least-squares line.
pub mod histogram;
pub mod ranking;
pub mod regression;

pub use histogram::{histogram, Histogram};
pub use ranking::top_companies;
pub use regression::{linear_fit, LinearFit};
