use super::grid::EXCLUSION_CELLS;
use super::{AllocationError, OccupancyGrid, OffsetPool, Region, VectorPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::debug;

/// Number of pool offsets tried around an active point before it is retired
pub const TRIALS_PER_POINT: usize = 100;

/// Grids up to this many cells are always built, whatever the capacity
const MIN_GRID_CELLS: usize = 1 << 20;

/// Allocate wind-vector seed points evenly over a region.
///
/// Bridson's Poisson-disk method, modified so that the points from a previous
/// call (e.g. the previous animation frame, advected by the wind) are kept
/// wherever they are not crowded, and new points are only grown into gaps.
#[derive(Debug, Clone)]
pub struct VectorPointAllocator {
    pool: OffsetPool,
    trials_per_point: usize,
}

impl Default for VectorPointAllocator {
    fn default() -> Self {
        Self::new(OffsetPool::default())
    }
}

impl VectorPointAllocator {
    pub fn new(pool: OffsetPool) -> Self {
        Self {
            pool,
            trials_per_point: TRIALS_PER_POINT,
        }
    }

    pub fn with_trials_per_point(mut self, trials: usize) -> Self {
        self.trials_per_point = trials;
        self
    }

    pub fn pool(&self) -> &OffsetPool {
        &self.pool
    }

    pub fn trials_per_point(&self) -> usize {
        self.trials_per_point
    }

    /// Allocate points, seeding the trial RNG from `random_seed` (or from
    /// system entropy when `None`).
    pub fn allocate_seeded(
        &self,
        previous: Option<&[VectorPoint]>,
        region: &Region,
        separation: f64,
        max_points: usize,
        random_seed: Option<u64>,
    ) -> Result<Vec<VectorPoint>, AllocationError> {
        let mut rng = match random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        self.allocate(previous, region, separation, max_points, &mut rng)
    }

    /// Allocate points over `region` with approximate minimum spacing
    /// `separation`.
    ///
    /// Previous points inside the region come first, in their original order
    /// and with their age incremented; newly grown points follow in discovery
    /// order with age 0. Fails if more than `max_points` points are needed.
    pub fn allocate<R: Rng + ?Sized>(
        &self,
        previous: Option<&[VectorPoint]>,
        region: &Region,
        separation: f64,
        max_points: usize,
        rng: &mut R,
    ) -> Result<Vec<VectorPoint>, AllocationError> {
        if !(separation.is_finite() && separation > 0.0) {
            return Err(AllocationError::InvalidSeparation(separation));
        }
        if max_points == 0 {
            return Err(AllocationError::InvalidCapacity);
        }
        region.validate()?;

        // Each point marks at most EXCLUSION_CELLS cells, so a grid much
        // larger than that per point cannot be covered within capacity.
        let max_cells = max_points
            .saturating_mul(2 * EXCLUSION_CELLS)
            .max(MIN_GRID_CELLS);
        let mut grid = OccupancyGrid::new(region, separation, max_cells)
            .ok_or(AllocationError::InsufficientPoints { max_points })?;
        let mut points: Vec<VectorPoint> = Vec::new();
        // Front is always the smallest active index: new points are appended
        // behind it and only the front is ever retired.
        let mut active: VecDeque<usize> = VecDeque::new();

        let mut rejected = 0usize;
        for prev in previous.unwrap_or_default() {
            if !region.contains(prev.lon, prev.lat) || !grid.is_free_at(prev.lon, prev.lat) {
                rejected += 1;
                continue;
            }
            let point = VectorPoint::with_age(prev.lon, prev.lat, prev.age.saturating_add(1));
            accept(&mut points, &mut grid, &mut active, point, max_points)?;
        }

        if points.is_empty() {
            let (lon, lat) = region.seed_point();
            accept(&mut points, &mut grid, &mut active, VectorPoint::new(lon, lat), max_points)?;
        }

        let seeded = points.len();
        debug!(seeded, rejected, "Seeded vector points");

        while let Some(&current) = active.front() {
            match self.find_new(&points[current], region, separation, &grid, rng) {
                Some(point) => accept(&mut points, &mut grid, &mut active, point, max_points)?,
                None => {
                    active.pop_front();
                }
            }
        }

        debug!(
            total = points.len(),
            grown = points.len() - seeded,
            occupied_cells = grid.occupied_count(),
            "Allocated vector points"
        );

        Ok(points)
    }

    /// Try pool offsets around `origin` until one lands in the region on a
    /// free cell.
    fn find_new<R: Rng + ?Sized>(
        &self,
        origin: &VectorPoint,
        region: &Region,
        separation: f64,
        grid: &OccupancyGrid,
        rng: &mut R,
    ) -> Option<VectorPoint> {
        for _ in 0..self.trials_per_point {
            let (dx, dy) = self.pool.sample(rng)?;
            let lon = origin.lon + dx * separation;
            let lat = origin.lat + dy * separation;
            if !region.contains(lon, lat) {
                continue;
            }
            if grid.is_free_at(lon, lat) {
                return Some(VectorPoint::new(lon, lat));
            }
        }
        None
    }
}

fn accept(
    points: &mut Vec<VectorPoint>,
    grid: &mut OccupancyGrid,
    active: &mut VecDeque<usize>,
    point: VectorPoint,
    max_points: usize,
) -> Result<(), AllocationError> {
    if points.len() >= max_points {
        return Err(AllocationError::InsufficientPoints { max_points });
    }
    grid.mark_exclusion(point.lon, point.lat);
    active.push_back(points.len());
    points.push(point);
    Ok(())
}

/// Allocate points with the default offset pool.
///
/// Convenience wrapper around [`VectorPointAllocator::allocate_seeded`].
pub fn allocate_vector_points(
    previous: Option<&[VectorPoint]>,
    region: &Region,
    separation: f64,
    max_points: usize,
    random_seed: Option<u64>,
) -> Result<Vec<VectorPoint>, AllocationError> {
    VectorPointAllocator::default().allocate_seeded(previous, region, separation, max_points, random_seed)
}
