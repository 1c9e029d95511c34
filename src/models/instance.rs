//! Validated problem instance.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::{Location, VehicleCatalog, VehicleType};
use crate::distance::{DistanceMatrix, KM_PER_DEGREE};
use crate::error::{InputError, RoutingError};

fn default_distance_scale() -> f64 {
    KM_PER_DEGREE
}

/// Serialized form of an instance.
///
/// ```json
/// {
///   "locations": [{"id": "Depot", "latitude": 0.0, "longitude": 0.0, "demand": 0}],
///   "vehicle_types": [{"name": "Van", "capacity": 20, "cost_per_km": 1.0}],
///   "distance_scale": 100.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceDocument {
    /// All locations, including exactly one depot.
    pub locations: Vec<Location>,
    /// Vehicle types in catalog order.
    pub vehicle_types: Vec<VehicleType>,
    /// Kilometers per coordinate degree.
    #[serde(default = "default_distance_scale")]
    pub distance_scale: f64,
}

/// A validated fleet size and mix routing problem.
///
/// Locations are re-indexed with the depot at index 0 and customers at
/// `1..=num_customers()` in input order. Pairwise distances are precomputed.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::{Instance, Location, VehicleType};
///
/// let instance = Instance::new(
///     vec![
///         Location::new("A", 0.0, 1.0, 5),
///         Location::depot(0.0, 0.0),
///         Location::new("B", 1.0, 0.0, 5),
///     ],
///     vec![VehicleType::new("Van", 20, 1.0)],
/// ).unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.location(0).id(), "Depot");
/// assert_eq!(instance.index_of("B"), Some(2));
/// assert!((instance.distance(0, 1) - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    locations: Vec<Location>,
    catalog: VehicleCatalog,
    distances: DistanceMatrix,
    distance_scale: f64,
}

impl Instance {
    /// Validates input with the default scale of 100 km per degree.
    pub fn new(
        locations: Vec<Location>,
        vehicle_types: Vec<VehicleType>,
    ) -> Result<Self, RoutingError> {
        Self::with_distance_scale(locations, vehicle_types, KM_PER_DEGREE)
    }

    /// Validates input with a custom coordinate-to-km scale.
    pub fn with_distance_scale(
        locations: Vec<Location>,
        vehicle_types: Vec<VehicleType>,
        distance_scale: f64,
    ) -> Result<Self, RoutingError> {
        if !distance_scale.is_finite() || distance_scale <= 0.0 {
            return Err(InputError::InvalidScale(distance_scale).into());
        }
        let catalog = validate_catalog(vehicle_types)?;
        let locations = validate_locations(locations)?;
        let distances = DistanceMatrix::from_locations(&locations, distance_scale);
        Ok(Self {
            locations,
            catalog,
            distances,
            distance_scale,
        })
    }

    /// Builds an instance from its serialized form.
    pub fn from_document(doc: InstanceDocument) -> Result<Self, RoutingError> {
        Self::with_distance_scale(doc.locations, doc.vehicle_types, doc.distance_scale)
    }

    /// Parses and validates a JSON instance document.
    pub fn from_json(json: &str) -> Result<Self, RoutingError> {
        let doc: InstanceDocument = serde_json::from_str(json).map_err(InputError::from)?;
        Self::from_document(doc)
    }

    /// Serializable form of this instance (depot first).
    pub fn to_document(&self) -> InstanceDocument {
        InstanceDocument {
            locations: self.locations.clone(),
            vehicle_types: self.catalog.types().to_vec(),
            distance_scale: self.distance_scale,
        }
    }

    /// The depot.
    pub fn depot(&self) -> &Location {
        &self.locations[0]
    }

    /// All locations, depot at index 0.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn location(&self, index: usize) -> &Location {
        &self.locations[index]
    }

    /// Index of the location with identifier `id`.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.locations.iter().position(|l| l.id() == id)
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.locations.len() - 1
    }

    /// Location indices of all customers.
    pub fn customer_indices(&self) -> RangeInclusive<usize> {
        1..=self.num_customers()
    }

    /// The vehicle catalog.
    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }

    /// Precomputed distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Distance in km between locations `from` and `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Kilometers per coordinate degree.
    pub fn distance_scale(&self) -> f64 {
        self.distance_scale
    }
}

fn validate_catalog(vehicle_types: Vec<VehicleType>) -> Result<VehicleCatalog, InputError> {
    if vehicle_types.is_empty() {
        return Err(InputError::EmptyCatalog);
    }
    let mut names = HashSet::new();
    for v in &vehicle_types {
        if !names.insert(v.name()) {
            return Err(InputError::DuplicateVehicle(v.name().to_string()));
        }
        if v.capacity() <= 0 {
            return Err(InputError::InvalidCapacity {
                name: v.name().to_string(),
                capacity: v.capacity(),
            });
        }
        if !v.cost_per_km().is_finite() || v.cost_per_km() <= 0.0 {
            return Err(InputError::InvalidCost {
                name: v.name().to_string(),
                cost: v.cost_per_km(),
            });
        }
    }
    Ok(VehicleCatalog::new(vehicle_types))
}

/// Checks every location and moves the depot to index 0.
fn validate_locations(locations: Vec<Location>) -> Result<Vec<Location>, InputError> {
    let mut ids = HashSet::new();
    let mut depot = None;
    let mut customers = Vec::with_capacity(locations.len());

    for loc in locations {
        if !ids.insert(loc.id().to_string()) {
            return Err(if loc.is_depot() {
                InputError::DuplicateDepot
            } else {
                InputError::DuplicateLocation(loc.id().to_string())
            });
        }
        if !loc.has_finite_coordinates() {
            return Err(InputError::NonFiniteCoordinate(loc.id().to_string()));
        }
        if loc.is_depot() {
            if loc.demand() != 0 {
                return Err(InputError::DepotDemand(loc.demand()));
            }
            depot = Some(loc);
        } else if loc.demand() < 0 {
            return Err(InputError::NegativeDemand {
                id: loc.id().to_string(),
                demand: loc.demand(),
            });
        } else {
            customers.push(loc);
        }
    }

    let depot = depot.ok_or(InputError::MissingDepot)?;
    let mut ordered = Vec::with_capacity(customers.len() + 1);
    ordered.push(depot);
    ordered.extend(customers);
    Ok(ordered)
}
