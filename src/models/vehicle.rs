//! Vehicle type with capacity and per-kilometer cost.

use serde::{Deserialize, Serialize};

/// A class of vehicle available in unlimited number.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::VehicleType;
///
/// let v = VehicleType::new("Type A", 25, 1.2);
/// assert_eq!(v.name(), "Type A");
/// assert_eq!(v.capacity(), 25);
/// assert!(v.can_carry(25));
/// assert!(!v.can_carry(26));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    name: String,
    capacity: i32,
    cost_per_km: f64,
}

impl VehicleType {
    /// Creates a vehicle type.
    pub fn new(name: impl Into<String>, capacity: i32, cost_per_km: f64) -> Self {
        Self {
            name: name.into(),
            capacity,
            cost_per_km,
        }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the cost per kilometer.
    pub fn with_cost_per_km(mut self, cost: f64) -> Self {
        self.cost_per_km = cost;
        self
    }

    /// Unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum load.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Cost per kilometer traveled.
    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km
    }

    /// Returns `true` if `demand` fits in this vehicle.
    pub fn can_carry(&self, demand: i64) -> bool {
        demand <= i64::from(self.capacity)
    }

    /// Cost of driving `distance` km with this vehicle.
    pub fn cost_for(&self, distance: f64) -> f64 {
        distance * self.cost_per_km
    }
}
