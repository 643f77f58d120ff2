//! Domain layer: entities and tree-drawing logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).
//! Randomness is always supplied by the caller.

pub mod entities;
pub mod error;
pub mod geometry;
pub mod palette;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use geometry::{Rows, TreeGeometry};
pub use palette::{Palette, FOLIAGE, GLYPHS};
