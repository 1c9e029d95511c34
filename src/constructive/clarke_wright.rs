//! Cost-aware Clarke-Wright savings for a heterogeneous fleet.
//!
//! # Algorithm
//!
//! Every customer starts on its own route (depot → customer → depot) served
//! by the cheapest vehicle type that can carry its demand. Candidate pairs of
//! route endpoints are then taken in decreasing order of savings
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! (ties by ascending identifier pair). For each candidate the two routes
//! are joined at `i` and `j`, the cheapest vehicle for the combined demand is
//! re-selected, and the merge is accepted only if the merged route costs
//! strictly less than the two routes it replaces. A larger vehicle with a
//! higher rate can turn a positive distance saving into a cost increase, so
//! the savings sign alone never decides.
//!
//! Each candidate is looked at once: merged, or discarded for good.
//!
//! # Complexity
//!
//! O(n² log n) to rank the candidates, plus O(n²) pruning per accepted merge.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.
//!
//! Golden, B., Assad, A., Levy, L. & Gheysens, F. (1984). "The fleet size
//! and mix vehicle routing problem", *Computers & Operations Research*
//! 11(1), 49-66.

use serde::Serialize;
use tracing::{debug, info, trace};

use super::savings::{SavingsEntry, SavingsList};
use crate::error::RoutingError;
use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Route, Solution};

/// An accepted merge, reported to a [`MergeObserver`].
#[derive(Debug)]
pub struct MergeEvent<'e> {
    /// 1-based count of accepted merges so far.
    pub step: usize,
    /// The candidate pair that triggered the merge.
    pub entry: SavingsEntry,
    /// Route that contained `entry.i` before the merge.
    pub left: &'e Route,
    /// Route that contained `entry.j` before the merge.
    pub right: &'e Route,
    /// The route that replaced them.
    pub merged: &'e Route,
}

/// Receives accepted merges synchronously, e.g. to animate progress.
///
/// Observers only see shared references and cannot alter the solve.
pub trait MergeObserver {
    /// Called once after each accepted merge.
    fn on_merge(&mut self, event: &MergeEvent<'_>);
}

impl<F> MergeObserver for F
where
    F: FnMut(&MergeEvent<'_>),
{
    fn on_merge(&mut self, event: &MergeEvent<'_>) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl MergeObserver for NoObserver {
    fn on_merge(&mut self, _event: &MergeEvent<'_>) {}
}

/// Counters describing how the candidates were consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    /// Candidates taken off the list.
    pub evaluated: usize,
    /// Merges accepted.
    pub merged: usize,
    /// Skipped: same route, or no longer an endpoint.
    pub stale: usize,
    /// Discarded: no vehicle type can carry the combined demand.
    pub over_capacity: usize,
    /// Discarded: merged route not strictly cheaper.
    pub not_cheaper: usize,
}

enum Decision {
    Stale,
    OverCapacity(i64),
    NotCheaper { merged: f64, separate: f64 },
    Merged,
}

/// Merge engine state for one solve.
///
/// Routes live in an arena indexed by slot; `route_of[c]` is the slot of
/// the route currently holding customer `c`. Every customer is on exactly
/// one live route at all times.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::{Instance, Location, VehicleType};
/// use u_fleetmix::constructive::{FleetSavings, NoObserver};
///
/// let instance = Instance::new(
///     vec![
///         Location::depot(0.0, 0.0),
///         Location::new("A", 0.0, 1.0, 5),
///         Location::new("B", 1.0, 0.0, 5),
///     ],
///     vec![VehicleType::new("Van", 20, 1.0)],
/// ).unwrap();
///
/// let (solution, stats) = FleetSavings::new(&instance).unwrap().run(&mut NoObserver).unwrap();
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(stats.merged, 1);
/// ```
pub struct FleetSavings<'a> {
    evaluator: RouteEvaluator<'a>,
    routes: Vec<Option<Route>>,
    route_of: Vec<usize>,
    candidates: SavingsList,
    stats: MergeStats,
}

impl<'a> FleetSavings<'a> {
    /// Puts every customer on its own route and ranks all candidate pairs.
    ///
    /// Fails with [`RoutingError::Infeasible`] if some customer's demand
    /// exceeds every vehicle type's capacity.
    pub fn new(instance: &'a Instance) -> Result<Self, RoutingError> {
        let evaluator = RouteEvaluator::new(instance);
        let n = instance.locations().len();

        let mut routes = Vec::with_capacity(n);
        routes.push(None);
        for c in instance.customer_indices() {
            routes.push(Some(Route::create(c, &evaluator)?));
        }
        let route_of: Vec<usize> = (0..n).collect();

        let endpoints: Vec<usize> = instance.customer_indices().collect();
        let candidates = SavingsList::build(instance, &endpoints);

        Ok(Self {
            evaluator,
            routes,
            route_of,
            candidates,
            stats: MergeStats::default(),
        })
    }

    /// Current live routes in slot order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().flatten()
    }

    /// Remaining candidate pairs.
    pub fn candidates(&self) -> &SavingsList {
        &self.candidates
    }

    /// Merges until no candidate remains and returns the fixed point.
    pub fn run<O: MergeObserver>(
        mut self,
        observer: &mut O,
    ) -> Result<(Solution, MergeStats), RoutingError> {
        let instance = self.evaluator.instance();
        info!(
            customers = instance.num_customers(),
            vehicle_types = instance.catalog().len(),
            candidates = self.candidates.len(),
            "starting fleet savings"
        );

        while let Some(entry) = self.candidates.pop() {
            self.stats.evaluated += 1;
            match self.consider(entry, observer)? {
                Decision::Merged => self.stats.merged += 1,
                Decision::Stale => self.stats.stale += 1,
                Decision::OverCapacity(demand) => {
                    trace!(i = entry.i, j = entry.j, demand, "no vehicle for combined demand");
                    self.stats.over_capacity += 1;
                }
                Decision::NotCheaper { merged, separate } => {
                    trace!(i = entry.i, j = entry.j, merged, separate, "merge not cheaper");
                    self.stats.not_cheaper += 1;
                }
            }
        }

        let solution = Solution::new(self.routes.into_iter().flatten().collect());
        info!(
            routes = solution.num_routes(),
            total_cost = solution.total_cost(),
            merges = self.stats.merged,
            "fleet savings reached fixed point"
        );
        Ok((solution, self.stats))
    }

    fn consider<O: MergeObserver>(
        &mut self,
        entry: SavingsEntry,
        observer: &mut O,
    ) -> Result<Decision, RoutingError> {
        let slot_i = self.route_of[entry.i];
        let slot_j = self.route_of[entry.j];
        if slot_i == slot_j {
            return Ok(Decision::Stale);
        }
        let (Some(left), Some(right)) = (&self.routes[slot_i], &self.routes[slot_j]) else {
            return Ok(Decision::Stale);
        };
        let (Some(end_i), Some(end_j)) = (left.end_of(entry.i), right.end_of(entry.j)) else {
            return Ok(Decision::Stale);
        };

        let demand = left.demand() + right.demand();
        if self
            .evaluator
            .instance()
            .catalog()
            .cheapest_feasible(demand)
            .is_none()
        {
            return Ok(Decision::OverCapacity(demand));
        }

        let merged = Route::merge(left, right, end_i, end_j, &self.evaluator)?;
        let separate = left.cost() + right.cost();
        if merged.cost() >= separate {
            return Ok(Decision::NotCheaper {
                merged: merged.cost(),
                separate,
            });
        }

        let mut interior = vec![false; self.route_of.len()];
        let inner = merged.len().saturating_sub(1);
        for &c in merged.customers().iter().take(inner).skip(1) {
            interior[c] = true;
        }
        for &c in merged.customers() {
            self.route_of[c] = slot_i;
        }
        self.candidates.prune(&interior);

        debug!(
            i = entry.i,
            j = entry.j,
            savings = entry.value,
            demand = merged.demand(),
            vehicle = self.evaluator.instance().catalog().get(merged.vehicle()).name(),
            cost = merged.cost(),
            separate,
            "merged routes"
        );

        let left = self.routes[slot_i].replace(merged);
        let right = self.routes[slot_j].take();
        if let (Some(left), Some(right), Some(merged)) = (&left, &right, &self.routes[slot_i]) {
            observer.on_merge(&MergeEvent {
                step: self.stats.merged + 1,
                entry,
                left,
                right,
                merged,
            });
        }
        Ok(Decision::Merged)
    }
}

/// Solves an instance with the cost-aware savings heuristic.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::{Instance, Location, VehicleType};
/// use u_fleetmix::constructive::fleet_savings;
///
/// let instance = Instance::new(
///     vec![
///         Location::depot(0.0, 0.0),
///         Location::new("1", 0.0, 1.0, 10),
///         Location::new("2", 0.0, 2.0, 10),
///         Location::new("3", 0.0, 3.0, 10),
///     ],
///     vec![VehicleType::new("Van", 30, 1.0)],
/// ).unwrap();
///
/// let solution = fleet_savings(&instance).unwrap();
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(solution.num_served(), 3);
/// ```
pub fn fleet_savings(instance: &Instance) -> Result<Solution, RoutingError> {
    fleet_savings_with(instance, &mut NoObserver)
}

/// Like [`fleet_savings`], reporting each accepted merge to `observer`.
pub fn fleet_savings_with<O: MergeObserver>(
    instance: &Instance,
    observer: &mut O,
) -> Result<Solution, RoutingError> {
    let (solution, _) = FleetSavings::new(instance)?.run(observer)?;
    Ok(solution)
}
