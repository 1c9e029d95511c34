//! Route type: an ordered chain of customers between two depot legs.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::evaluation::RouteEvaluator;

/// One of the two depot-adjacent ends of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteEnd {
    /// The customer visited right after leaving the depot.
    Head,
    /// The customer visited right before returning to the depot.
    Tail,
}

/// A depot-to-depot route served by one vehicle.
///
/// Customers are location indices (the depot, index 0, is implicit at both
/// ends). Demand, vehicle, distance and cost are always derived from the
/// customer sequence by [`RouteEvaluator::build_route`], never patched
/// incrementally.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::{Instance, Location, Route, RouteEnd, VehicleType};
/// use u_fleetmix::evaluation::RouteEvaluator;
///
/// let instance = Instance::new(
///     vec![
///         Location::depot(0.0, 0.0),
///         Location::new("A", 0.0, 1.0, 5),
///         Location::new("B", 1.0, 0.0, 5),
///     ],
///     vec![VehicleType::new("Van", 20, 1.0)],
/// ).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
///
/// let a = Route::create(1, &evaluator).unwrap();
/// let b = Route::create(2, &evaluator).unwrap();
/// let ab = Route::merge(&a, &b, RouteEnd::Tail, RouteEnd::Head, &evaluator).unwrap();
/// assert_eq!(ab.customers(), &[1, 2]);
/// assert_eq!(ab.demand(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    customers: Vec<usize>,
    demand: i64,
    vehicle: usize,
    distance: f64,
    cost: f64,
}

impl Route {
    /// Assembles a route from already-derived values.
    pub(crate) fn from_parts(
        customers: Vec<usize>,
        demand: i64,
        vehicle: usize,
        distance: f64,
        cost: f64,
    ) -> Self {
        Self {
            customers,
            demand,
            vehicle,
            distance,
            cost,
        }
    }

    /// Creates a single-customer route with the cheapest feasible vehicle.
    ///
    /// Fails with [`RoutingError::Infeasible`] if no vehicle type covers the
    /// customer's demand.
    pub fn create(customer: usize, evaluator: &RouteEvaluator<'_>) -> Result<Self, RoutingError> {
        evaluator.build_route(vec![customer])
    }

    /// Joins two routes end to end at the given endpoints.
    ///
    /// `a` is oriented so that `join_a` becomes its last customer and `b` so
    /// that `join_b` becomes its first; the result is `a' + b'`. The vehicle
    /// is re-selected for the combined demand and distance and cost are
    /// recomputed from scratch.
    pub fn merge(
        a: &Route,
        b: &Route,
        join_a: RouteEnd,
        join_b: RouteEnd,
        evaluator: &RouteEvaluator<'_>,
    ) -> Result<Self, RoutingError> {
        let mut customers = a.oriented(join_a, RouteEnd::Tail);
        customers.extend(b.oriented(join_b, RouteEnd::Head));
        evaluator.build_route(customers)
    }

    /// Customer sequence with `end` moved to position `target`.
    fn oriented(&self, end: RouteEnd, target: RouteEnd) -> Vec<usize> {
        let mut seq = self.customers.clone();
        if end != target {
            seq.reverse();
        }
        seq
    }

    /// Which end of this route `customer` occupies, if any.
    ///
    /// A single-customer route reports [`RouteEnd::Head`]; its only customer
    /// serves both roles.
    pub fn end_of(&self, customer: usize) -> Option<RouteEnd> {
        if self.customers.first() == Some(&customer) {
            Some(RouteEnd::Head)
        } else if self.customers.last() == Some(&customer) {
            Some(RouteEnd::Tail)
        } else {
            None
        }
    }

    /// Returns `true` if `customer` is adjacent to the depot in this route.
    pub fn is_endpoint(&self, customer: usize) -> bool {
        self.end_of(customer).is_some()
    }

    /// Customer location indices in visit order.
    pub fn customers(&self) -> &[usize] {
        &self.customers
    }

    /// Number of customers on this route.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if the route visits no customer.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Sum of customer demands.
    pub fn demand(&self) -> i64 {
        self.demand
    }

    /// Catalog index of the assigned vehicle type.
    pub fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Round-trip distance in km, including both depot legs.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Distance times the assigned vehicle's cost per km.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Instance, Location, VehicleType};

    fn line_instance() -> Instance {
        Instance::new(
            vec![
                Location::depot(0.0, 0.0),
                Location::new("1", 0.0, 1.0, 4),
                Location::new("2", 0.0, 2.0, 4),
                Location::new("3", 0.0, 3.0, 4),
                Location::new("4", 0.0, 4.0, 4),
            ],
            vec![
                VehicleType::new("small", 8, 1.0),
                VehicleType::new("large", 16, 2.0),
            ],
        )
        .expect("valid instance")
    }

    #[test]
    fn test_route_create() {
        let inst = line_instance();
        let ev = RouteEvaluator::new(&inst);
        let r = Route::create(2, &ev).expect("feasible");
        assert_eq!(r.customers(), &[2]);
        assert_eq!(r.demand(), 4);
        assert_eq!(r.vehicle(), 0);
        assert!((r.distance() - 400.0).abs() < 1e-9);
        assert!((r.cost() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_route_endpoints() {
        let inst = line_instance();
        let ev = RouteEvaluator::new(&inst);
        let r = ev.build_route(vec![1, 2, 3]).expect("feasible");
        assert_eq!(r.end_of(1), Some(RouteEnd::Head));
        assert_eq!(r.end_of(3), Some(RouteEnd::Tail));
        assert_eq!(r.end_of(2), None);
        assert!(!r.is_endpoint(4));

        let single = Route::create(4, &ev).expect("feasible");
        assert_eq!(single.end_of(4), Some(RouteEnd::Head));
    }

    #[test]
    fn test_route_merge_orientations() {
        let inst = line_instance();
        let ev = RouteEvaluator::new(&inst);
        let a = ev.build_route(vec![1, 2]).expect("feasible");
        let b = ev.build_route(vec![3, 4]).expect("feasible");

        let m = Route::merge(&a, &b, RouteEnd::Tail, RouteEnd::Head, &ev).expect("feasible");
        assert_eq!(m.customers(), &[1, 2, 3, 4]);

        let m = Route::merge(&a, &b, RouteEnd::Head, RouteEnd::Head, &ev).expect("feasible");
        assert_eq!(m.customers(), &[2, 1, 3, 4]);

        let m = Route::merge(&a, &b, RouteEnd::Tail, RouteEnd::Tail, &ev).expect("feasible");
        assert_eq!(m.customers(), &[1, 2, 4, 3]);

        let m = Route::merge(&a, &b, RouteEnd::Head, RouteEnd::Tail, &ev).expect("feasible");
        assert_eq!(m.customers(), &[2, 1, 4, 3]);
    }

    #[test]
    fn test_route_merge_reselects_vehicle() {
        let inst = line_instance();
        let ev = RouteEvaluator::new(&inst);
        let a = ev.build_route(vec![1, 2]).expect("feasible");
        let b = ev.build_route(vec![3]).expect("feasible");
        assert_eq!(a.vehicle(), 0);

        let m = Route::merge(&a, &b, RouteEnd::Tail, RouteEnd::Head, &ev).expect("feasible");
        assert_eq!(m.demand(), 12);
        assert_eq!(m.vehicle(), 1);
        // 0 -> 1 -> 2 -> 3 -> 0 on a line: 100 + 100 + 100 + 300 km at 2.0/km
        assert!((m.distance() - 600.0).abs() < 1e-9);
        assert!((m.cost() - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_route_merge_infeasible() {
        let inst = Instance::new(
            vec![
                Location::depot(0.0, 0.0),
                Location::new("1", 0.0, 1.0, 10),
                Location::new("2", 0.0, 2.0, 10),
            ],
            vec![VehicleType::new("small", 15, 1.0)],
        )
        .expect("valid instance");
        let ev = RouteEvaluator::new(&inst);
        let a = Route::create(1, &ev).expect("feasible");
        let b = Route::create(2, &ev).expect("feasible");
        let err = Route::merge(&a, &b, RouteEnd::Tail, RouteEnd::Head, &ev);
        assert!(matches!(err, Err(RoutingError::Infeasible { demand: 20, .. })));
    }
}
