//! Depot and customer locations.

use serde::{Deserialize, Serialize};

/// Identifier reserved for the depot location.
pub const DEPOT_ID: &str = "Depot";

/// A customer (or the depot) with coordinates and a demand.
///
/// Coordinates are geographic degrees. The depot is the unique location
/// whose identifier is [`DEPOT_ID`]; its demand must be zero.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::Location;
///
/// let depot = Location::depot(4.4184, 114.0932);
/// assert!(depot.is_depot());
/// assert_eq!(depot.demand(), 0);
///
/// let c = Location::new("1", 4.3555, 113.9777, 5);
/// assert_eq!(c.id(), "1");
/// assert_eq!(c.demand(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: String,
    latitude: f64,
    longitude: f64,
    demand: i32,
}

impl Location {
    /// Creates a new location.
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64, demand: i32) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            demand,
        }
    }

    /// Creates the depot at the given coordinates (demand 0).
    pub fn depot(latitude: f64, longitude: f64) -> Self {
        Self::new(DEPOT_ID, latitude, longitude, 0)
    }

    /// Unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Units to deliver at this location.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Returns `true` if this is the depot.
    pub fn is_depot(&self) -> bool {
        self.id == DEPOT_ID
    }

    /// Returns `true` if both coordinates are finite.
    pub fn has_finite_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Unscaled Euclidean distance to another location, in degrees.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlon * dlon + dlat * dlat).sqrt()
    }
}
