//! Grouped-histogram exploration for delimited datasets.
//!
//! The core pieces are a [`data::model::Table`] of named equal-length
//! columns, a [`chart::GroupedHistogram`] builder that overlays one binned
//! distribution per group label, and a small [`stats`] module. The `app`,
//! `state` and `ui` modules wrap them in an egui viewer.

pub mod app;
pub mod chart;
pub mod color;
pub mod data;
pub mod error;
pub mod state;
pub mod stats;
pub mod ui;
