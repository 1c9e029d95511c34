//! # u-fleetmix
//!
//! Fleet size and mix vehicle routing: assigns a heterogeneous, unlimited
//! fleet to customers around a single depot with a cost-aware extension of
//! the Clarke-Wright savings heuristic.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, VehicleType, VehicleCatalog, Route, Solution, Instance)
//! - [`distance`] — Scaled Euclidean geometry and distance matrix
//! - [`evaluation`] — Route building and solution verification
//! - [`constructive`] — Savings candidates and the merge engine
//! - [`report`] — Text and JSON view of a solution
//! - [`instances`] — Bundled and randomly generated instances
//! - [`error`] — Validation and infeasibility errors
//!
//! ## Example
//!
//! ```
//! use u_fleetmix::constructive::fleet_savings;
//! use u_fleetmix::evaluation::RouteEvaluator;
//! use u_fleetmix::instances::kuala_belait;
//!
//! let instance = kuala_belait().unwrap();
//! let solution = fleet_savings(&instance).unwrap();
//! assert_eq!(solution.num_served(), 10);
//! assert!(RouteEvaluator::new(&instance).verify(&solution).is_empty());
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod instances;
pub mod models;
pub mod report;

pub use error::{InputError, RoutingError};
