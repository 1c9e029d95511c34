//! Immutable vehicle catalog and the cheapest-feasible-vehicle rule.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::VehicleType;

/// The set of vehicle types a route may be assigned to.
///
/// Vehicle selection is a pure lookup: among the types whose capacity covers
/// a demand, pick the lowest cost per km, then the lowest capacity, then the
/// earliest inserted.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::{VehicleCatalog, VehicleType};
///
/// let catalog = VehicleCatalog::new(vec![
///     VehicleType::new("Type A", 25, 1.2),
///     VehicleType::new("Type B", 30, 1.5),
/// ]);
/// assert_eq!(catalog.cheapest_feasible(20).map(|i| catalog.get(i).name()), Some("Type A"));
/// assert_eq!(catalog.cheapest_feasible(28).map(|i| catalog.get(i).name()), Some("Type B"));
/// assert_eq!(catalog.cheapest_feasible(999), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleCatalog {
    types: Vec<VehicleType>,
}

impl VehicleCatalog {
    /// Creates a catalog preserving insertion order.
    pub fn new(types: Vec<VehicleType>) -> Self {
        Self { types }
    }

    /// Returns the index of the cheapest vehicle type that can carry `demand`.
    ///
    /// Returns `None` if no type has enough capacity.
    pub fn cheapest_feasible(&self, demand: i64) -> Option<usize> {
        self.types
            .iter()
            .enumerate()
            .filter(|(_, v)| v.can_carry(demand))
            .min_by(|(ia, a), (ib, b)| cheaper(a, b).then(ia.cmp(ib)))
            .map(|(i, _)| i)
    }

    /// Largest capacity in the catalog, or 0 if empty.
    pub fn max_capacity(&self) -> i32 {
        self.types.iter().map(|v| v.capacity()).max().unwrap_or(0)
    }

    /// Returns the vehicle type at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &VehicleType {
        &self.types[index]
    }

    /// Looks up a vehicle type by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.types.iter().position(|v| v.name() == name)
    }

    /// All vehicle types in insertion order.
    pub fn types(&self) -> &[VehicleType] {
        &self.types
    }

    /// Number of vehicle types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if the catalog has no vehicle types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Orders vehicle types the way [`VehicleCatalog::cheapest_feasible`] ranks them.
pub fn cheaper(a: &VehicleType, b: &VehicleType) -> Ordering {
    a.cost_per_km()
        .total_cmp(&b.cost_per_km())
        .then(a.capacity().cmp(&b.capacity()))
}
