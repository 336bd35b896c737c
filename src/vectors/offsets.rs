use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used for the shared offset pool when none is given
pub const DEFAULT_POOL_SEED: u64 = 12;

/// Number of raw draws before the annulus filter
pub const POOL_DRAWS: usize = 10_000;

/// Squared-magnitude bounds of the annulus, in units of the separation.
// TODO: revisit the outer bound against the textbook (1, 2) annulus once
// isotropy of the resulting point sets has been measured.
const MIN_MAGNITUDE_SQ: f64 = 1.0;
const MAX_MAGNITUDE_SQ: f64 = 6.0;

/// Fixed pool of candidate offsets lying in the annulus 1 < |v| < sqrt(6).
///
/// Trial candidates are drawn from this pool by index, so a trial costs a
/// lookup. The pool is built once from an explicit seed and is owned by the
/// allocator using it.
#[derive(Debug, Clone)]
pub struct OffsetPool {
    offsets: Vec<(f64, f64)>,
}

impl Default for OffsetPool {
    fn default() -> Self {
        Self::from_seed(DEFAULT_POOL_SEED)
    }
}

impl OffsetPool {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let offsets = (0..POOL_DRAWS)
            .map(|_| (rng.random_range(-3.0_f64..3.0), rng.random_range(-3.0_f64..3.0)))
            .filter(|&(x, y): &(f64, f64)| {
                let mag_sq = x * x + y * y;
                mag_sq > MIN_MAGNITUDE_SQ && mag_sq < MAX_MAGNITUDE_SQ
            })
            .collect();
        Self { offsets }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(f64, f64)> {
        self.offsets.get(index).copied()
    }

    /// Draw a random offset from the pool
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(f64, f64)> {
        if self.offsets.is_empty() {
            return None;
        }
        self.get(rng.random_range(0..self.offsets.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_lie_in_annulus() {
        let pool = OffsetPool::default();
        // Annulus area 5π out of a 36 square: roughly 44% of draws survive
        assert!(pool.len() > 3_500 && pool.len() < 5_200, "pool size {}", pool.len());
        for i in 0..pool.len() {
            let (x, y) = pool.get(i).unwrap();
            let mag_sq = x * x + y * y;
            assert!(mag_sq > 1.0 && mag_sq < 6.0);
        }
    }

    #[test]
    fn test_pool_is_reproducible() {
        let a = OffsetPool::from_seed(7);
        let b = OffsetPool::from_seed(7);
        let c = OffsetPool::from_seed(8);
        assert_eq!(a.offsets, b.offsets);
        assert_ne!(a.offsets, c.offsets);
    }
}
