//! Euclidean distance between coordinates, scaled to kilometers.

use crate::models::Location;

/// Default kilometers per coordinate degree.
pub const KM_PER_DEGREE: f64 = 100.0;

/// Distance in km between two locations at the default scale.
///
/// Symmetric and zero for identical coordinates. Non-finite coordinates
/// produce NaN; instances reject them before any distance is computed.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::Location;
/// use u_fleetmix::distance::distance;
///
/// let depot = Location::depot(0.0, 0.0);
/// let a = Location::new("A", 0.03, 0.04, 1);
/// assert!((distance(&depot, &a) - 5.0).abs() < 1e-9);
/// ```
pub fn distance(a: &Location, b: &Location) -> f64 {
    scaled_distance(a, b, KM_PER_DEGREE)
}

/// Distance between two locations with an explicit km-per-degree scale.
pub fn scaled_distance(a: &Location, b: &Location, scale: f64) -> f64 {
    scale * a.distance_to(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_scaled() {
        let a = Location::new("a", 0.0, 0.0, 0);
        let b = Location::new("b", 0.0, 1.0, 0);
        assert!((distance(&a, &b) - 100.0).abs() < 1e-10);
        assert!((scaled_distance(&a, &b, 1.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_symmetric_and_zero() {
        let a = Location::new("a", 4.4184, 114.0932, 0);
        let b = Location::new("b", 4.3555, 113.9777, 5);
        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_distance_known_pair() {
        // Depot to customer 1 of the Kuala Belait data set.
        let a = Location::new("Depot", 4.4184, 114.0932, 0);
        let b = Location::new("1", 4.3555, 113.9777, 5);
        let expected = 100.0 * (0.0629f64.powi(2) + 0.1155f64.powi(2)).sqrt();
        assert!((distance(&a, &b) - expected).abs() < 1e-9);
    }
}
