pub mod allocate;
pub mod grid;
pub mod offsets;
pub mod point;

pub use allocate::*;
pub use grid::OccupancyGrid;
pub use offsets::OffsetPool;
pub use point::*;

use thiserror::Error;

/// Errors raised when the allocator is given parameters it cannot satisfy.
///
/// Every variant is a caller configuration problem: retrying with the same
/// inputs will fail the same way.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AllocationError {
    #[error("Separation must be positive and finite, got {0}")]
    InvalidSeparation(f64),

    #[error("Maximum number of points must be at least 1")]
    InvalidCapacity,

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Insufficient wind points: more than {max_points} points are needed to cover the region")]
    InsufficientPoints { max_points: usize },
}

impl AllocationError {
    /// All allocation errors are configuration errors; none are transient.
    pub fn is_configuration_error(&self) -> bool {
        true
    }
}
