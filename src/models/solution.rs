//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::Route;

/// A type of inconsistency found when verifying a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A customer appears on no route.
    MissingCustomer {
        /// Customer identifier.
        id: String,
    },
    /// A customer appears more than once across routes.
    DuplicateCustomer {
        /// Customer identifier.
        id: String,
    },
    /// Route demand exceeds the assigned vehicle's capacity.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Route demand.
        demand: i64,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// A cheaper vehicle type could serve the route.
    VehicleNotCheapest {
        /// Route index in the solution.
        route_index: usize,
        /// Assigned vehicle type name.
        assigned: String,
        /// Cheapest feasible vehicle type name, if any.
        cheapest: Option<String>,
    },
    /// Stored route metrics differ from a from-scratch recomputation.
    CostMismatch {
        /// Route index in the solution.
        route_index: usize,
        /// Stored cost.
        stored: f64,
        /// Recomputed cost.
        recomputed: f64,
    },
}

/// An inconsistency in a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// The routes that survive once no further merge is accepted.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::Solution;
///
/// let sol = Solution::new(vec![]);
/// assert_eq!(sol.num_routes(), 0);
/// assert_eq!(sol.total_cost(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
    total_cost: f64,
}

impl Solution {
    /// Creates a solution; the total cost is summed from the routes.
    pub fn new(routes: Vec<Route>) -> Self {
        let total_cost = routes.iter().map(Route::cost).sum();
        Self { routes, total_cost }
    }

    /// Routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Sum of route costs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Sum of route distances.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(Route::distance).sum()
    }

    /// Number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Customer location indices per route, in visit order.
    pub fn partition(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(|r| r.customers().to_vec()).collect()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::default();
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.num_served(), 0);
        assert_eq!(sol.total_cost(), 0.0);
        assert!(sol.partition().is_empty());
    }

    #[test]
    fn test_solution_totals() {
        let sol = Solution::new(vec![
            Route::from_parts(vec![1], 5, 0, 50.0, 60.0),
            Route::from_parts(vec![2, 3], 12, 1, 80.0, 120.0),
        ]);
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_served(), 3);
        assert!((sol.total_cost() - 180.0).abs() < 1e-10);
        assert!((sol.total_distance() - 130.0).abs() < 1e-10);
        assert_eq!(sol.partition(), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn test_violation_kind() {
        let v = Violation::new(ViolationType::CapacityExceeded {
            route_index: 0,
            demand: 40,
            capacity: 30,
        });
        assert!(matches!(v.kind, ViolationType::CapacityExceeded { demand: 40, .. }));
    }
}
