// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground
//! truth lives in the HTML* and *how to turn it into typed values*.
//!
//! ## What lives here
//! - **Pure HTML extraction** via `core::html` (class selection, header skip).
//! - **Text → value coercion** via `core::sanitize`.
//! - **Light shaping** into a `table::ReviewTable`.
//!
//! ## What does **not** live here
//! - Caching (`store`), analysis (`analysis`), export/plots (`runner`), GUI.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner → scrape::collect_reviews → specs::reviews::fetch()
//!                                              ↘ specs::reviews::parse_reviews()
//! ```
//!
//! ## Testing notes
//! Specs are testable **offline** against saved pages (`tests/fixtures/`).
pub mod reviews;
