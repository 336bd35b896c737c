use super::FieldError;
use crate::math::interpolate::{bilin_interp, find_grid_indices};
use crate::vectors::{Region, VectorPoint};
use ndarray::Array2;
use rayon::prelude::*;

/// Wind vector sampled at an allocated point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindVector {
    /// Longitude (degrees)
    pub lon: f64,
    /// Latitude (degrees)
    pub lat: f64,
    /// U-component wind velocity (m/s)
    pub u: f64,
    /// V-component wind velocity (m/s)
    pub v: f64,
    /// Age of the point the vector was sampled at
    pub age: u32,
}

impl WindVector {
    /// Calculate wind speed (horizontal)
    pub fn speed(&self) -> f64 {
        (self.u.powi(2) + self.v.powi(2)).sqrt()
    }

    /// Calculate wind direction (degrees from north, meteorological convention)
    pub fn direction(&self) -> f64 {
        let dir = self.v.atan2(self.u).to_degrees();
        // Convert to meteorological convention (direction FROM which wind blows)
        (270.0 - dir).rem_euclid(360.0)
    }
}

/// Horizontal wind on a regular lon/lat grid.
///
/// Components are stored with layout `[lat, lon]`; both coordinate axes are
/// strictly ascending.
#[derive(Debug, Clone)]
pub struct WindField {
    lons: Vec<f64>,
    lats: Vec<f64>,
    u: Array2<f64>,
    v: Array2<f64>,
}

impl WindField {
    pub fn new(
        lons: Vec<f64>,
        lats: Vec<f64>,
        u: Array2<f64>,
        v: Array2<f64>,
    ) -> Result<Self, FieldError> {
        check_axis("longitude", &lons)?;
        check_axis("latitude", &lats)?;

        let expected = (lats.len(), lons.len());
        for (name, component) in [("u", &u), ("v", &v)] {
            if component.dim() != expected {
                return Err(FieldError::ShapeMismatch {
                    component: name.to_string(),
                    expected,
                    found: component.dim(),
                });
            }
        }

        Ok(Self { lons, lats, u, v })
    }

    /// Field with the same wind everywhere, on a grid of the given resolution
    pub fn uniform(region: &Region, resolution: f64, u: f64, v: f64) -> Result<Self, FieldError> {
        Self::from_fn(region, resolution, |_, _| (u, v))
    }

    /// Build a field by evaluating `f(lon, lat) -> (u, v)` at every grid node
    pub fn from_fn<F>(region: &Region, resolution: f64, f: F) -> Result<Self, FieldError>
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(FieldError::InvalidResolution(resolution));
        }
        let lons = regular_axis(region.lon_min, region.lon_max, resolution);
        let lats = regular_axis(region.lat_min, region.lat_max, resolution);

        let mut u = Array2::zeros((lats.len(), lons.len()));
        let mut v = Array2::zeros((lats.len(), lons.len()));
        for (j, &lat) in lats.iter().enumerate() {
            for (i, &lon) in lons.iter().enumerate() {
                let (uu, vv) = f(lon, lat);
                u[[j, i]] = uu;
                v[[j, i]] = vv;
            }
        }

        Self::new(lons, lats, u, v)
    }

    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Extent of the grid, the natural region to allocate vectors over
    pub fn region(&self) -> Region {
        Region {
            lon_min: self.lons[0],
            lon_max: self.lons[self.lons.len() - 1],
            lat_min: self.lats[0],
            lat_max: self.lats[self.lats.len() - 1],
        }
    }

    /// Bilinear interpolation of (u, v) at a location; `None` outside the grid
    pub fn sample(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let (i0, i1, wx) = find_grid_indices(&self.lons, lon)?;
        let (j0, j1, wy) = find_grid_indices(&self.lats, lat)?;

        let interp = |c: &Array2<f64>| {
            bilin_interp(c[[j0, i0]], c[[j1, i0]], c[[j0, i1]], c[[j1, i1]], wx, wy)
        };
        Some((interp(&self.u), interp(&self.v)))
    }

    /// Sample the wind at each point in parallel, skipping points outside the grid
    pub fn sample_points(&self, points: &[VectorPoint]) -> Vec<WindVector> {
        points
            .par_iter()
            .filter_map(|p| {
                self.sample(p.lon, p.lat).map(|(u, v)| WindVector {
                    lon: p.lon,
                    lat: p.lat,
                    u,
                    v,
                    age: p.age,
                })
            })
            .collect()
    }
}

fn check_axis(name: &str, axis: &[f64]) -> Result<(), FieldError> {
    if axis.len() < 2 {
        return Err(FieldError::AxisTooShort {
            axis: name.to_string(),
            len: axis.len(),
        });
    }
    if axis.iter().any(|x| !x.is_finite()) || axis.windows(2).any(|w| w[1] <= w[0]) {
        return Err(FieldError::NotAscending(name.to_string()));
    }
    Ok(())
}

/// Nodes from `min` to `max` inclusive, spaced at most `resolution` apart
fn regular_axis(min: f64, max: f64, resolution: f64) -> Vec<f64> {
    let steps = (((max - min) / resolution).ceil() as usize).max(1);
    let step = (max - min) / steps as f64;
    (0..=steps)
        .map(|k| if k == steps { max } else { min + step * k as f64 })
        .collect()
}
