//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid tree configurations.
/// They are raised before any row is rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("layers must be at least 1, got {0}")]
    InvalidLayers(u32),

    #[error("height must be greater than 0 when the tree is wider than one column (base radius {base_radius})")]
    ZeroHeight { base_radius: u32 },

    #[error("branch slope ratio must be a finite number, got {0}")]
    InvalidSlope(f32),

    #[error("tree too wide: base radius {base_radius} with slope ratio {ratio} exceeds {max} columns")]
    TooWide { base_radius: u32, ratio: f32, max: u32 },

    #[error("invalid decoration distribution: {0}")]
    Distribution(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
