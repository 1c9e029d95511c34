//! Route evaluator that derives demand, vehicle, distance and cost.

use std::collections::HashMap;

use crate::error::RoutingError;
use crate::models::{Instance, Route, Solution, Violation, ViolationType};

/// Relative tolerance when comparing stored and recomputed route costs.
const COST_TOLERANCE: f64 = 1e-9;

/// Builds routes from customer sequences and verifies solutions.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::{Instance, Location, VehicleType};
/// use u_fleetmix::evaluation::RouteEvaluator;
///
/// let instance = Instance::new(
///     vec![
///         Location::depot(0.0, 0.0),
///         Location::new("A", 0.0, 0.03, 10),
///         Location::new("B", 0.04, 0.03, 20),
///     ],
///     vec![VehicleType::new("Van", 50, 2.0)],
/// ).unwrap();
///
/// let evaluator = RouteEvaluator::new(&instance);
/// let route = evaluator.build_route(vec![1, 2]).unwrap();
/// assert_eq!(route.demand(), 30);
/// // 3 + 4 + 5 km
/// assert!((route.distance() - 12.0).abs() < 1e-9);
/// assert!((route.cost() - 24.0).abs() < 1e-9);
/// ```
pub struct RouteEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// The instance this evaluator reads from.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Builds a route from a customer sequence.
    ///
    /// Selects the cheapest vehicle covering the total demand and computes
    /// distance and cost from scratch. Fails with
    /// [`RoutingError::Infeasible`] if no vehicle type is large enough.
    pub fn build_route(&self, customers: Vec<usize>) -> Result<Route, RoutingError> {
        let demand = self.demand_of(&customers);
        let catalog = self.instance.catalog();
        let vehicle = catalog
            .cheapest_feasible(demand)
            .ok_or_else(|| RoutingError::Infeasible {
                location: customers
                    .first()
                    .map(|&c| self.instance.location(c).id().to_string())
                    .unwrap_or_default(),
                demand,
                max_capacity: catalog.max_capacity(),
            })?;
        let distance = self.distance_of(&customers);
        let cost = catalog.get(vehicle).cost_for(distance);
        Ok(Route::from_parts(customers, demand, vehicle, distance, cost))
    }

    /// Sum of demands over `customers`.
    pub fn demand_of(&self, customers: &[usize]) -> i64 {
        customers
            .iter()
            .map(|&c| i64::from(self.instance.location(c).demand()))
            .sum()
    }

    /// Round-trip distance depot → `customers` → depot.
    pub fn distance_of(&self, customers: &[usize]) -> f64 {
        self.instance.distances().tour_length(0, customers)
    }

    /// Individual leg distances, starting with the depot leg and ending
    /// with the return leg. Empty for an empty sequence.
    pub fn legs(&self, customers: &[usize]) -> Vec<f64> {
        if customers.is_empty() {
            return Vec::new();
        }
        let mut stops = Vec::with_capacity(customers.len() + 2);
        stops.push(0);
        stops.extend_from_slice(customers);
        stops.push(0);
        stops
            .windows(2)
            .map(|w| self.instance.distance(w[0], w[1]))
            .collect()
    }

    /// Checks a solution for coverage, capacity, vehicle choice and cost
    /// consistency. An empty result means the solution is valid.
    pub fn verify(&self, solution: &Solution) -> Vec<Violation> {
        let mut violations = Vec::new();
        let catalog = self.instance.catalog();

        let mut seen: HashMap<usize, usize> = HashMap::new();
        for route in solution.routes() {
            for &c in route.customers() {
                *seen.entry(c).or_insert(0) += 1;
            }
        }
        for c in self.instance.customer_indices() {
            let id = self.instance.location(c).id().to_string();
            match seen.get(&c).copied().unwrap_or(0) {
                0 => violations.push(Violation::new(ViolationType::MissingCustomer { id })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::DuplicateCustomer { id })),
            }
        }

        for (route_index, route) in solution.routes().iter().enumerate() {
            let assigned = catalog.get(route.vehicle());
            if !assigned.can_carry(route.demand()) {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    route_index,
                    demand: route.demand(),
                    capacity: assigned.capacity(),
                }));
            }

            let cheapest = catalog.cheapest_feasible(route.demand());
            if cheapest != Some(route.vehicle()) {
                violations.push(Violation::new(ViolationType::VehicleNotCheapest {
                    route_index,
                    assigned: assigned.name().to_string(),
                    cheapest: cheapest.map(|i| catalog.get(i).name().to_string()),
                }));
            }

            let recomputed = assigned.cost_for(self.distance_of(route.customers()));
            if (recomputed - route.cost()).abs() > COST_TOLERANCE * recomputed.max(1.0) {
                violations.push(Violation::new(ViolationType::CostMismatch {
                    route_index,
                    stored: route.cost(),
                    recomputed,
                }));
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, VehicleType};

    fn setup() -> Instance {
        Instance::with_distance_scale(
            vec![
                Location::depot(0.0, 0.0),
                Location::new("1", 3.0, 4.0, 10),
                Location::new("2", 6.0, 8.0, 20),
                Location::new("3", 0.0, 5.0, 15),
            ],
            vec![
                VehicleType::new("small", 25, 1.0),
                VehicleType::new("large", 50, 3.0),
            ],
            1.0,
        )
        .expect("valid instance")
    }

    #[test]
    fn test_build_route_single() {
        let inst = setup();
        let eval = RouteEvaluator::new(&inst);
        let route = eval.build_route(vec![1]).expect("feasible");
        assert_eq!(route.len(), 1);
        // depot->1 = 5.0, 1->depot = 5.0
        assert!((route.distance() - 10.0).abs() < 1e-10);
        assert_eq!(route.demand(), 10);
        assert_eq!(route.vehicle(), 0);
        assert!((route.cost() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_build_route_upgrades_vehicle() {
        let inst = setup();
        let eval = RouteEvaluator::new(&inst);
        // 10 + 20 = 30 > 25
        let route = eval.build_route(vec![1, 2]).expect("feasible");
        assert_eq!(route.vehicle(), 1);
        // 5 + 5 + 10 = 20 km at 3.0
        assert!((route.cost() - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_build_route_infeasible() {
        let inst = setup();
        let eval = RouteEvaluator::new(&inst);
        // 10 + 20 + 15 + 20 = 65 > 50
        let err = eval.build_route(vec![1, 2, 3, 2]);
        match err {
            Err(RoutingError::Infeasible {
                location,
                demand,
                max_capacity,
            }) => {
                assert_eq!(location, "1");
                assert_eq!(demand, 65);
                assert_eq!(max_capacity, 50);
            }
            other => panic!("expected infeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_legs() {
        let inst = setup();
        let eval = RouteEvaluator::new(&inst);
        assert!(eval.legs(&[]).is_empty());
        let legs = eval.legs(&[1, 2]);
        assert_eq!(legs.len(), 3);
        assert!((legs[0] - 5.0).abs() < 1e-10);
        assert!((legs[1] - 5.0).abs() < 1e-10);
        assert!((legs[2] - 10.0).abs() < 1e-10);
        let total: f64 = legs.iter().sum();
        assert!((total - eval.distance_of(&[1, 2])).abs() < 1e-10);
    }

    #[test]
    fn test_verify_valid() {
        let inst = setup();
        let eval = RouteEvaluator::new(&inst);
        let sol = Solution::new(vec![
            eval.build_route(vec![1, 3]).expect("feasible"),
            eval.build_route(vec![2]).expect("feasible"),
        ]);
        assert!(eval.verify(&sol).is_empty());
    }

    #[test]
    fn test_verify_coverage() {
        let inst = setup();
        let eval = RouteEvaluator::new(&inst);
        let sol = Solution::new(vec![
            eval.build_route(vec![1]).expect("feasible"),
            eval.build_route(vec![1, 2]).expect("feasible"),
        ]);
        let violations = eval.verify(&sol);
        assert!(violations.contains(&Violation::new(ViolationType::DuplicateCustomer {
            id: "1".into()
        })));
        assert!(violations.contains(&Violation::new(ViolationType::MissingCustomer {
            id: "3".into()
        })));
    }

    #[test]
    fn test_verify_wrong_vehicle() {
        let inst = setup();
        let eval = RouteEvaluator::new(&inst);
        let sol = Solution::new(vec![
            Route::from_parts(vec![1], 10, 1, 10.0, 30.0),
            eval.build_route(vec![2]).expect("feasible"),
            eval.build_route(vec![3]).expect("feasible"),
        ]);
        let violations = eval.verify(&sol);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0].kind,
            ViolationType::VehicleNotCheapest { route_index: 0, cheapest: Some(name), .. } if name == "small"
        ));
    }

    #[test]
    fn test_verify_capacity_and_cost() {
        let inst = setup();
        let eval = RouteEvaluator::new(&inst);
        let sol = Solution::new(vec![
            Route::from_parts(vec![1, 2], 30, 0, 20.0, 1.0),
            eval.build_route(vec![3]).expect("feasible"),
        ]);
        let violations = eval.verify(&sol);
        assert!(violations
            .iter()
            .any(|v| matches!(v.kind, ViolationType::CapacityExceeded { demand: 30, capacity: 25, .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v.kind, ViolationType::VehicleNotCheapest { .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v.kind, ViolationType::CostMismatch { .. })));
    }
}
