pub mod ascii_writer;
pub mod json_writer;
pub mod output_trait;
pub mod reader;

pub use output_trait::{create_writer, create_writer_auto, write_point_set, PointSetFormat, PointSetWriter};
pub use reader::*;

use thiserror::Error;

/// Errors reading or writing point-set files
#[derive(Debug, Error)]
pub enum PointIoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}
