use super::output_trait::PointSetWriter;
use super::PointIoError;
use crate::vectors::VectorPoint;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// JSON writer: the file holds an array of `{lon, lat, age}` objects
pub struct JsonPointWriter {
    file_path: String,
    points: Vec<VectorPoint>,
}

impl JsonPointWriter {
    pub fn new(file_path: &Path) -> Self {
        Self {
            file_path: file_path.to_string_lossy().to_string(),
            points: Vec::new(),
        }
    }
}

impl PointSetWriter for JsonPointWriter {
    fn write_points(&mut self, points: &[VectorPoint]) -> Result<(), PointIoError> {
        self.points.extend_from_slice(points);
        Ok(())
    }

    fn close(&mut self) -> Result<(), PointIoError> {
        let mut file = BufWriter::new(File::create(&self.file_path)?);
        serde_json::to_writer_pretty(&mut file, &self.points)?;
        file.flush()?;

        debug!(path = %self.file_path, count = self.points.len(), "Wrote JSON point set");
        Ok(())
    }

    fn get_output_path(&self) -> &str {
        &self.file_path
    }
}
