//! sticks-rs: stick-series renderer core.
//!
//! This crate turns an ordered series of 2D data points into "stick"
//! geometry (one segment per point, from the zero baseline to the mapped
//! screen position), tracks which model changes require a geometry rebuild
//! versus a plain repaint, and maps pointer input back into data space.
//! Axis layout, theming storage, and the scene-graph lifecycle belong to
//! the embedding host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SticksItem, UpdateAction};
pub use error::{SticksError, SticksResult};
