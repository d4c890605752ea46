mod annotation_controller;
mod axis_ticks;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod grid_sync;
mod hit_testing;
mod import_controller;
mod render_frame_builder;
mod sort_controller;
mod style_controller;
mod template_contract;

pub use engine::PlotGridEngine;
pub use engine_config::PlotGridEngineConfig;
pub use hit_testing::{HIT_TEST_RADIUS_PX, HitTestMatch};
pub use template_contract::{STYLE_TEMPLATE_JSON_SCHEMA_V1, StyleTemplate};
