use crate::config::{Config, Constants};
use crate::vectors::{AllocationError, OffsetPool, Region, VectorPoint, VectorPointAllocator};
use crate::wind::{advect_points, WindField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Keeps a set of wind-vector points evenly spread from one video frame to
/// the next: each frame the points move with the wind, then crowded points
/// are culled and gaps refilled.
pub struct VectorAnimation {
    allocator: VectorPointAllocator,
    region: Region,
    separation: f64,
    max_points: usize,
    constants: Constants,
    rng: StdRng,
    points: Vec<VectorPoint>,
    frame_index: usize,
}

impl VectorAnimation {
    pub fn new(
        allocator: VectorPointAllocator,
        region: Region,
        separation: f64,
        max_points: usize,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            allocator,
            region,
            separation,
            max_points,
            constants: Constants::default(),
            rng,
            points: Vec::new(),
            frame_index: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let allocator = VectorPointAllocator::new(OffsetPool::from_seed(config.pool_seed))
            .with_trials_per_point(config.trials_per_point);
        let mut animation = Self::new(
            allocator,
            config.region,
            config.scale,
            config.max_points,
            config.random_seed,
        );
        animation.constants = config.constants.clone();
        animation
    }

    /// Allocate the opening frame from scratch
    pub fn first_frame(&mut self) -> Result<&[VectorPoint], AllocationError> {
        self.points = self.allocator.allocate(
            None,
            &self.region,
            self.separation,
            self.max_points,
            &mut self.rng,
        )?;
        self.frame_index = 0;
        Ok(&self.points)
    }

    /// Advance one frame: advect the current points for `dt_seconds` and
    /// reallocate with them as the previous set.
    ///
    /// Calling this before [`first_frame`](Self::first_frame) allocates from
    /// scratch.
    pub fn next_frame(
        &mut self,
        field: &WindField,
        dt_seconds: f64,
    ) -> Result<&[VectorPoint], AllocationError> {
        let moved = advect_points(&self.points, field, dt_seconds, &self.constants);
        let previous = (!moved.is_empty()).then_some(moved.as_slice());

        self.points = self.allocator.allocate(
            previous,
            &self.region,
            self.separation,
            self.max_points,
            &mut self.rng,
        )?;
        self.frame_index += 1;

        debug!(
            frame = self.frame_index,
            carried = moved.len(),
            points = self.points.len(),
            "Advanced vector animation"
        );
        Ok(&self.points)
    }

    pub fn points(&self) -> &[VectorPoint] {
        &self.points
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn region(&self) -> &Region {
        &self.region
    }
}
