//! Infrastructure layer: engine construction and DI container
//!
//! This layer owns the non-deterministic parts and wires up services.

pub mod di;
pub mod error;
pub mod rng;

pub use error::{InfraError, InfraResult};
