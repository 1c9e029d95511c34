//! Dense distance matrix.

use super::scaled_distance;
use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::Location;
/// use u_fleetmix::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::depot(0.0, 0.0),
///     Location::new("1", 3.0, 4.0, 10),
///     Location::new("2", 6.0, 8.0, 20),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, 1.0);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes scaled Euclidean distances between all locations.
    pub fn from_locations(locations: &[Location], scale: f64) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = scaled_distance(&locations[i], &locations[j], scale);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Length of the closed tour depot → `stops` → depot.
    pub fn tour_length(&self, depot: usize, stops: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (stops.first(), stops.last()) else {
            return 0.0;
        };
        let inner: f64 = stops.windows(2).map(|w| self.get(w[0], w[1])).sum();
        self.get(depot, first) + inner + self.get(last, depot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::depot(0.0, 0.0),
            Location::new("1", 3.0, 4.0, 10),
            Location::new("2", 0.0, 8.0, 20),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), 1.0);
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_scale_applied() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), 100.0);
        assert!((dm.get(0, 1) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), 1.0);
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_tour_length() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), 1.0);
        assert_eq!(dm.tour_length(0, &[]), 0.0);
        assert!((dm.tour_length(0, &[1]) - 10.0).abs() < 1e-10);
        // 0 -> 1 -> 2 -> 0 = 5 + 5 + 8
        assert!((dm.tour_length(0, &[1, 2]) - 18.0).abs() < 1e-10);
    }
}
