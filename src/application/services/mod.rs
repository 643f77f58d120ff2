//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services take their sinks and random engines as explicit arguments
//! but are themselves concrete structs, not traits.

mod render;

pub use render::RenderService;
