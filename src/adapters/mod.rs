//! Adapter implementations for port traits.
//!
//! - `raster/` — Software rasterizer over an in-memory RGB canvas
//! - `recording` — Records draw calls while delegating to another painter

pub mod raster;
pub mod recording;
