//! Read-only view of a solution for printing and serialization.

use std::fmt;

use serde::Serialize;

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution, DEPOT_ID};

/// One route resolved to identifiers and names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    /// Assigned vehicle type name.
    pub vehicle: String,
    /// Customer identifiers in visit order (depot excluded).
    pub stops: Vec<String>,
    /// Leg distances in km: depot → first stop, …, last stop → depot.
    pub legs: Vec<f64>,
    /// Total demand carried.
    pub demand: i64,
    /// Round-trip distance in km.
    pub distance: f64,
    /// Route cost.
    pub cost: f64,
}

/// Final routes with per-route details and grand totals.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::{Instance, Location, VehicleType};
/// use u_fleetmix::constructive::fleet_savings;
/// use u_fleetmix::report::SolutionReport;
///
/// let instance = Instance::new(
///     vec![
///         Location::depot(0.0, 0.0),
///         Location::new("A", 0.0, 1.0, 5),
///         Location::new("B", 1.0, 0.0, 5),
///     ],
///     vec![VehicleType::new("Van", 20, 1.0)],
/// ).unwrap();
/// let solution = fleet_savings(&instance).unwrap();
///
/// let report = SolutionReport::new(&instance, &solution);
/// assert_eq!(report.routes[0].vehicle, "Van");
/// assert_eq!(report.routes[0].stops, vec!["A", "B"]);
/// assert!(report.to_string().contains("Depot -> A (100.000 km)"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionReport {
    /// Per-route details, in solution order.
    pub routes: Vec<RouteReport>,
    /// Sum of route distances in km.
    pub total_distance: f64,
    /// Sum of route costs.
    pub total_cost: f64,
}

impl SolutionReport {
    /// Resolves a solution against the instance it was solved from.
    pub fn new(instance: &Instance, solution: &Solution) -> Self {
        let evaluator = RouteEvaluator::new(instance);
        let routes = solution
            .routes()
            .iter()
            .map(|route| RouteReport {
                vehicle: instance.catalog().get(route.vehicle()).name().to_string(),
                stops: route
                    .customers()
                    .iter()
                    .map(|&c| instance.location(c).id().to_string())
                    .collect(),
                legs: evaluator.legs(route.customers()),
                demand: route.demand(),
                distance: route.distance(),
                cost: route.cost(),
            })
            .collect();
        Self {
            routes,
            total_distance: solution.total_distance(),
            total_cost: solution.total_cost(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Round Trip Distance: {:.3} km, Cost: {:.2}, Demand: {}",
            self.distance, self.cost, self.demand
        )?;
        write!(f, "{DEPOT_ID}")?;
        let targets = self.stops.iter().map(String::as_str).chain([DEPOT_ID]);
        for (stop, leg) in targets.zip(&self.legs) {
            write!(f, " -> {stop} ({leg:.3} km)")?;
        }
        Ok(())
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Distance = {:.3} km", self.total_distance)?;
        writeln!(f, "Total Cost = {:.2}", self.total_cost)?;
        for (idx, route) in self.routes.iter().enumerate() {
            writeln!(f, "Vehicle {} ({}):", idx + 1, route.vehicle)?;
            writeln!(f, "{route}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::fleet_savings;
    use crate::models::{Location, VehicleType};

    fn solved() -> (Instance, Solution) {
        let inst = Instance::with_distance_scale(
            vec![
                Location::depot(0.0, 0.0),
                Location::new("near", 3.0, 4.0, 10),
                Location::new("far", 6.0, 8.0, 20),
            ],
            vec![
                VehicleType::new("small", 25, 1.0),
                VehicleType::new("large", 50, 1.2),
            ],
            1.0,
        )
        .expect("valid instance");
        let sol = fleet_savings(&inst).expect("feasible");
        (inst, sol)
    }

    #[test]
    fn test_report_totals() {
        let (inst, sol) = solved();
        let report = SolutionReport::new(&inst, &sol);
        assert_eq!(report.routes.len(), sol.num_routes());
        let cost: f64 = report.routes.iter().map(|r| r.cost).sum();
        assert!((cost - report.total_cost).abs() < 1e-9);
        for r in &report.routes {
            let legs: f64 = r.legs.iter().sum();
            assert!((legs - r.distance).abs() < 1e-9);
            assert_eq!(r.legs.len(), r.stops.len() + 1);
        }
    }

    #[test]
    fn test_report_merged_route() {
        // Separate: 10 + 20 = 30 km at 1.0. Merged: 20 km at 1.2 = 24.
        let (inst, sol) = solved();
        let report = SolutionReport::new(&inst, &sol);
        assert_eq!(report.routes.len(), 1);
        let r = &report.routes[0];
        assert_eq!(r.vehicle, "large");
        assert_eq!(r.demand, 30);
        assert!((r.cost - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_text() {
        let (inst, sol) = solved();
        let text = SolutionReport::new(&inst, &sol).to_string();
        assert!(text.starts_with("Total Distance = 20.000 km\nTotal Cost = 24.00\n"));
        assert!(text.contains("Vehicle 1 (large):"));
        // "far" sorts before "near", so the pair is joined far-first.
        assert!(text.contains("Depot -> far (10.000 km) -> near (5.000 km) -> Depot (5.000 km)"));
    }

    #[test]
    fn test_report_json() {
        let (inst, sol) = solved();
        let json = SolutionReport::new(&inst, &sol).to_json().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["routes"][0]["vehicle"], "large");
        assert_eq!(value["routes"][0]["stops"][1], "near");
    }
}
