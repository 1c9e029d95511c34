//! Route building and solution verification.
//!
//! [`RouteEvaluator`] derives a route's demand, vehicle, distance and cost
//! from its customer sequence, and re-checks a finished solution against
//! the coverage, capacity and vehicle-choice rules.

mod evaluator;

pub use evaluator::RouteEvaluator;
