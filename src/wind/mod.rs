pub mod advect;
pub mod field;

pub use advect::advect_points;
pub use field::{WindField, WindVector};

use thiserror::Error;

/// Errors building a wind field
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("Coordinate axis {axis} needs at least 2 values, got {len}")]
    AxisTooShort { axis: String, len: usize },

    #[error("Coordinate axis {0} must be finite and strictly ascending")]
    NotAscending(String),

    #[error("Component {component} has shape {found:?}, expected {expected:?} ([lat, lon])")]
    ShapeMismatch {
        component: String,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Grid resolution must be positive and finite, got {0}")]
    InvalidResolution(f64),
}
