//! plotgrid-rs: multi-series dataset core for desktop charting applications.
//!
//! The crate keeps one in-memory dataset synchronized with two host-owned
//! views, an editable grid and a rendered chart, so desktop frontends only
//! wire widgets and callbacks while data semantics live here.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod grid;
pub mod import;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{PlotGridEngine, PlotGridEngineConfig};
pub use error::{PlotGridError, PlotGridResult};
