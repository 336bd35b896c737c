pub mod animation;
pub mod config;
pub mod data_io;
pub mod math;
pub mod vectors;
pub mod wind;

pub use vectors::{allocate_vector_points, AllocationError, Region, VectorPoint, VectorPointAllocator};
