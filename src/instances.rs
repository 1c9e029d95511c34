//! Bundled and generated problem instances.
//!
//! - [`kuala_belait`] — ten customers around a depot in Kuala Belait,
//!   served by two vehicle types
//! - [`random_instance`] — reproducible synthetic instances in the same area

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::RoutingError;
use crate::models::{Instance, InstanceDocument, Location, VehicleType};

/// Depot coordinates of the bundled data set.
const KB_DEPOT: (f64, f64) = (4.4184, 114.0932);

/// Customers of the bundled data set: `(id, latitude, longitude, demand)`.
const KB_CUSTOMERS: [(&str, f64, f64, i32); 10] = [
    ("1", 4.3555, 113.9777, 5),
    ("2", 4.3976, 114.0049, 8),
    ("3", 4.3163, 114.0764, 3),
    ("4", 4.3184, 113.9932, 6),
    ("5", 4.4024, 113.9896, 5),
    ("6", 4.4142, 114.0127, 8),
    ("7", 4.4804, 114.0734, 3),
    ("8", 4.3818, 114.2034, 6),
    ("9", 4.4935, 114.1828, 5),
    ("10", 4.4932, 114.1322, 8),
];

fn kb_vehicle_types() -> Vec<VehicleType> {
    vec![
        VehicleType::new("Type A", 25, 1.2),
        VehicleType::new("Type B", 30, 1.5),
    ]
}

/// The bundled data set in serialized form.
pub fn kuala_belait_document() -> InstanceDocument {
    let mut locations = vec![Location::depot(KB_DEPOT.0, KB_DEPOT.1)];
    locations.extend(
        KB_CUSTOMERS
            .iter()
            .map(|&(id, lat, lon, demand)| Location::new(id, lat, lon, demand)),
    );
    InstanceDocument {
        locations,
        vehicle_types: kb_vehicle_types(),
        distance_scale: crate::distance::KM_PER_DEGREE,
    }
}

/// The bundled data set as a validated instance.
///
/// # Examples
///
/// ```
/// use u_fleetmix::instances::kuala_belait;
///
/// let instance = kuala_belait().unwrap();
/// assert_eq!(instance.num_customers(), 10);
/// assert_eq!(instance.catalog().len(), 2);
/// ```
pub fn kuala_belait() -> Result<Instance, RoutingError> {
    Instance::from_document(kuala_belait_document())
}

/// Generates `customers` customers with demands in `1..=10` scattered
/// around the bundled depot, using the bundled vehicle types.
///
/// The same seed always yields the same instance.
///
/// # Examples
///
/// ```
/// use u_fleetmix::instances::random_instance;
///
/// let a = random_instance(25, 7).unwrap();
/// let b = random_instance(25, 7).unwrap();
/// assert_eq!(a.locations(), b.locations());
/// assert_eq!(a.num_customers(), 25);
/// ```
pub fn random_instance(customers: usize, seed: u64) -> Result<Instance, RoutingError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut locations = Vec::with_capacity(customers + 1);
    locations.push(Location::depot(KB_DEPOT.0, KB_DEPOT.1));
    for k in 1..=customers {
        let lat = KB_DEPOT.0 + rng.random_range(-0.12..0.12);
        let lon = KB_DEPOT.1 + rng.random_range(-0.15..0.15);
        let demand = rng.random_range(1..=10);
        locations.push(Location::new(k.to_string(), lat, lon, demand));
    }
    Instance::new(locations, kb_vehicle_types())
}
