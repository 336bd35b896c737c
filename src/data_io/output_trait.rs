use super::PointIoError;
use crate::vectors::VectorPoint;
use std::path::Path;

/// Generic trait for writing point sets to different formats
pub trait PointSetWriter {
    /// Queue points for writing
    fn write_points(&mut self, points: &[VectorPoint]) -> Result<(), PointIoError>;

    /// Finalize and close the output file
    fn close(&mut self) -> Result<(), PointIoError>;

    /// Get the output file path
    fn get_output_path(&self) -> &str;
}

/// Point-set file format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointSetFormat {
    #[default]
    Json,
    Ascii,
}

impl PointSetFormat {
    /// Detect format from file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("txt") | Some("ascii") | Some("dat") => PointSetFormat::Ascii,
            _ => PointSetFormat::Json,
        }
    }

    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            PointSetFormat::Json => "json",
            PointSetFormat::Ascii => "txt",
        }
    }
}

impl std::fmt::Display for PointSetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointSetFormat::Json => write!(f, "json"),
            PointSetFormat::Ascii => write!(f, "ascii"),
        }
    }
}

impl std::str::FromStr for PointSetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(PointSetFormat::Json),
            "ascii" | "txt" | "text" => Ok(PointSetFormat::Ascii),
            _ => Err(format!("Unknown point set format: {}", s)),
        }
    }
}

/// Factory function to create appropriate writer for the format
pub fn create_writer(output_path: &Path, format: PointSetFormat) -> Box<dyn PointSetWriter> {
    match format {
        PointSetFormat::Json => Box::new(super::json_writer::JsonPointWriter::new(output_path)),
        PointSetFormat::Ascii => Box::new(super::ascii_writer::AsciiPointWriter::new(output_path)),
    }
}

/// Convenience function to auto-detect format and create writer
pub fn create_writer_auto(output_path: &Path) -> Box<dyn PointSetWriter> {
    create_writer(output_path, PointSetFormat::from_path(output_path))
}

/// Write a complete point set in one call
pub fn write_point_set(
    output_path: &Path,
    format: PointSetFormat,
    points: &[VectorPoint],
) -> Result<(), PointIoError> {
    let mut writer = create_writer(output_path, format);
    writer.write_points(points)?;
    writer.close()
}
