use super::Region;
use ndarray::Array2;

/// Cells marked by one point away from the grid edges
pub const EXCLUSION_CELLS: usize = 21;

/// Boolean occupancy grid overlaying a region, with the Bridson cell size
/// `separation / sqrt(2)`.
///
/// A marked cell holds a point or lies within the approximate exclusion
/// block of one. The grid lives for a single allocation call.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    origin: (f64, f64),
    cell_size: f64,
    occupied: Array2<bool>,
}

impl OccupancyGrid {
    /// Build the grid for `region`, or `None` if it would need more than
    /// `max_cells` cells. The size is checked before anything is allocated.
    pub fn new(region: &Region, separation: f64, max_cells: usize) -> Option<Self> {
        let cell_size = separation / std::f64::consts::SQRT_2;
        let nx = cells_along(region.width(), cell_size)?;
        let ny = cells_along(region.height(), cell_size)?;
        if nx.checked_mul(ny)? > max_cells {
            return None;
        }

        Some(Self {
            origin: (region.lon_min, region.lat_min),
            cell_size,
            occupied: Array2::from_elem((nx, ny), false),
        })
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Grid dimensions as (x cells, y cells)
    pub fn dims(&self) -> (usize, usize) {
        self.occupied.dim()
    }

    /// Cell containing a point. Cell boundaries belong to the lower cell
    /// index (floor); points on the high edge of the region are clamped into
    /// the last cell.
    pub fn cell_of(&self, lon: f64, lat: f64) -> (usize, usize) {
        let (nx, ny) = self.dims();
        let i = ((lon - self.origin.0) / self.cell_size).floor().max(0.0) as usize;
        let j = ((lat - self.origin.1) / self.cell_size).floor().max(0.0) as usize;
        (i.min(nx - 1), j.min(ny - 1))
    }

    pub fn is_occupied(&self, cell: (usize, usize)) -> bool {
        self.occupied[cell]
    }

    pub fn is_free_at(&self, lon: f64, lat: f64) -> bool {
        !self.is_occupied(self.cell_of(lon, lat))
    }

    /// Mark the 5x5 block around the point's cell, less its four corners,
    /// clipped to the grid.
    pub fn mark_exclusion(&mut self, lon: f64, lat: f64) {
        let (nx, ny) = self.dims();
        let (ci, cj) = self.cell_of(lon, lat);

        for di in -2i64..=2 {
            for dj in -2i64..=2 {
                if di.abs() == 2 && dj.abs() == 2 {
                    continue;
                }
                let i = ci as i64 + di;
                let j = cj as i64 + dj;
                if i < 0 || j < 0 || i >= nx as i64 || j >= ny as i64 {
                    continue;
                }
                self.occupied[(i as usize, j as usize)] = true;
            }
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|&&cell| cell).count()
    }
}

fn cells_along(extent: f64, cell_size: f64) -> Option<usize> {
    let n = (extent / cell_size).ceil().max(1.0);
    // `as` saturates, so counts that do not fit must be caught here
    if !n.is_finite() || n >= usize::MAX as f64 {
        return None;
    }
    Some(n as usize)
}
