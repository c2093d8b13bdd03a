//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the placeholder layouts and a
//! drawing backend. Implementations live in `src/adapters/`.

pub mod painter;

pub use painter::Painter;
