//! Geometry and distance matrices.
//!
//! Provides the scaled Euclidean distance between locations and a dense
//! precomputed matrix over all locations of an instance.

mod geometry;
mod matrix;

pub use geometry::{distance, scaled_distance, KM_PER_DEGREE};
pub use matrix::DistanceMatrix;
