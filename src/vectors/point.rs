use super::AllocationError;
use serde::{Deserialize, Serialize};

/// A wind-vector seed location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorPoint {
    /// Longitude (or rotated-pole x coordinate) in degrees
    pub lon: f64,
    /// Latitude (or rotated-pole y coordinate) in degrees
    pub lat: f64,
    /// Number of successive allocations this point has survived
    pub age: u32,
}

impl VectorPoint {
    /// Create a newly allocated point (age 0)
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat, age: 0 }
    }

    pub fn with_age(lon: f64, lat: f64, age: u32) -> Self {
        Self { lon, lat, age }
    }

    /// Get position as (longitude, latitude) tuple
    pub fn position(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }

    /// Euclidean distance in the plot's native coordinates
    pub fn distance_to(&self, other: &VectorPoint) -> f64 {
        ((self.lon - other.lon).powi(2) + (self.lat - other.lat).powi(2)).sqrt()
    }
}

/// Rectangular lon/lat region to be covered with points.
///
/// The region is a flat rectangle: longitude does not wrap at the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl Default for Region {
    fn default() -> Self {
        Self::global()
    }
}

impl Region {
    /// Create a validated region
    pub fn new(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> Result<Self, AllocationError> {
        let region = Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        };
        region.validate()?;
        Ok(region)
    }

    /// Whole globe in unrotated coordinates
    pub fn global() -> Self {
        Self {
            lon_min: -180.0,
            lon_max: 180.0,
            lat_min: -90.0,
            lat_max: 90.0,
        }
    }

    pub fn validate(&self) -> Result<(), AllocationError> {
        let bounds = [self.lon_min, self.lon_max, self.lat_min, self.lat_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(AllocationError::InvalidRegion(format!(
                "bounds must be finite: {:?}",
                bounds
            )));
        }
        if self.lon_min >= self.lon_max {
            return Err(AllocationError::InvalidRegion(format!(
                "lon_min ({}) must be less than lon_max ({})",
                self.lon_min, self.lon_max
            )));
        }
        if self.lat_min >= self.lat_max {
            return Err(AllocationError::InvalidRegion(format!(
                "lat_min ({}) must be less than lat_max ({})",
                self.lat_min, self.lat_max
            )));
        }
        Ok(())
    }

    /// Inclusive containment test
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.lon_min && lon <= self.lon_max && lat >= self.lat_min && lat <= self.lat_max
    }

    pub fn width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// Deterministic starting point 10% of the way in from the low corner
    pub fn seed_point(&self) -> (f64, f64) {
        (
            self.lon_min * 0.9 + self.lon_max * 0.1,
            self.lat_min * 0.9 + self.lat_max * 0.1,
        )
    }
}
