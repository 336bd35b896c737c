use super::output_trait::PointSetWriter;
use super::PointIoError;
use crate::vectors::VectorPoint;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Whitespace-separated text writer for point sets
pub struct AsciiPointWriter {
    file_path: String,
    points: Vec<VectorPoint>,
}

impl AsciiPointWriter {
    pub fn new(file_path: &Path) -> Self {
        Self {
            file_path: file_path.to_string_lossy().to_string(),
            points: Vec::new(),
        }
    }
}

impl PointSetWriter for AsciiPointWriter {
    fn write_points(&mut self, points: &[VectorPoint]) -> Result<(), PointIoError> {
        self.points.extend_from_slice(points);
        Ok(())
    }

    fn close(&mut self) -> Result<(), PointIoError> {
        let mut file = BufWriter::new(File::create(&self.file_path)?);

        writeln!(file, "# Wind vector points")?;
        writeln!(file, "# Count: {}", self.points.len())?;
        writeln!(file, "# Columns: longitude(deg) latitude(deg) age")?;

        for point in &self.points {
            writeln!(file, "{} {} {}", point.lon, point.lat, point.age)?;
        }
        file.flush()?;

        debug!(path = %self.file_path, count = self.points.len(), "Wrote ASCII point set");
        Ok(())
    }

    fn get_output_path(&self) -> &str {
        &self.file_path
    }
}
