//! Domain model types for fleet size and mix routing.
//!
//! Provides locations with demands, vehicle types and the immutable catalog
//! they live in, routes as depot-to-depot customer chains, the final
//! solution, and the validated problem instance that ties them together.

mod catalog;
mod instance;
mod location;
mod route;
mod solution;
mod vehicle;

pub use catalog::{cheaper, VehicleCatalog};
pub use instance::{Instance, InstanceDocument};
pub use location::{Location, DEPOT_ID};
pub use route::{Route, RouteEnd};
pub use solution::{Solution, Violation, ViolationType};
pub use vehicle::VehicleType;
