//! Optional overlay modules live here.
//!
//! Keep extensions decoupled from store semantics: they may read chart
//! geometry but never mutate series data.

pub mod annotations;

pub use annotations::AnnotationLayer;
