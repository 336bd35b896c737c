use super::{PointIoError, PointSetFormat};
use crate::vectors::VectorPoint;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a point set written by one of the point-set writers.
/// The format is taken from the file extension.
pub fn read_point_set(path: &Path) -> Result<Vec<VectorPoint>, PointIoError> {
    read_point_set_as(path, PointSetFormat::from_path(path))
}

pub fn read_point_set_as(path: &Path, format: PointSetFormat) -> Result<Vec<VectorPoint>, PointIoError> {
    let reader = BufReader::new(File::open(path)?);
    match format {
        PointSetFormat::Json => Ok(serde_json::from_reader(reader)?),
        PointSetFormat::Ascii => parse_ascii(reader),
    }
}

fn parse_ascii<R: BufRead>(reader: R) -> Result<Vec<VectorPoint>, PointIoError> {
    let mut points = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(PointIoError::Parse(format!(
                "line {}: expected 3 columns, found {}",
                line_no + 1,
                fields.len()
            )));
        }
        let bad = |what: &str| PointIoError::Parse(format!("line {}: invalid {}", line_no + 1, what));

        points.push(VectorPoint {
            lon: fields[0].parse().map_err(|_| bad("longitude"))?,
            lat: fields[1].parse().map_err(|_| bad("latitude"))?,
            age: fields[2].parse().map_err(|_| bad("age"))?,
        });
    }

    Ok(points)
}
