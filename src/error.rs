//! Error types for instance validation and solving.

use thiserror::Error;

/// Reasons an instance is rejected before solving starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Two locations share the same identifier.
    #[error("duplicate location identifier `{0}`")]
    DuplicateLocation(String),

    /// No location is named `Depot`.
    #[error("missing depot location")]
    MissingDepot,

    /// More than one location is named `Depot`.
    #[error("duplicate depot location")]
    DuplicateDepot,

    /// The depot carries a nonzero demand.
    #[error("depot demand must be 0, got {0}")]
    DepotDemand(i32),

    /// A customer has a negative demand.
    #[error("location `{id}` has negative demand {demand}")]
    NegativeDemand {
        /// Location identifier.
        id: String,
        /// Offending demand.
        demand: i32,
    },

    /// A coordinate is NaN or infinite.
    #[error("location `{0}` has a non-finite coordinate")]
    NonFiniteCoordinate(String),

    /// The vehicle catalog is empty.
    #[error("vehicle catalog is empty")]
    EmptyCatalog,

    /// Two vehicle types share the same name.
    #[error("duplicate vehicle type `{0}`")]
    DuplicateVehicle(String),

    /// A vehicle type has zero or negative capacity.
    #[error("vehicle type `{name}` has non-positive capacity {capacity}")]
    InvalidCapacity {
        /// Vehicle type name.
        name: String,
        /// Offending capacity.
        capacity: i32,
    },

    /// A vehicle type has a cost per km that is not a positive finite number.
    #[error("vehicle type `{name}` has invalid cost per km {cost}")]
    InvalidCost {
        /// Vehicle type name.
        name: String,
        /// Offending cost.
        cost: f64,
    },

    /// The coordinate-to-km scale is not a positive finite number.
    #[error("invalid distance scale {0}")]
    InvalidScale(f64),

    /// The input document could not be parsed.
    #[error("malformed instance document: {0}")]
    Parse(String),
}

/// Errors surfaced by the solve entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// The instance failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A customer or partial route cannot be served by any vehicle type.
    #[error("demand {demand} at `{location}` exceeds the largest vehicle capacity {max_capacity}")]
    Infeasible {
        /// Identifier of the customer (or first customer of the route).
        location: String,
        /// Demand that could not be covered.
        demand: i64,
        /// Largest capacity in the catalog.
        max_capacity: i32,
    },
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        InputError::Parse(err.to_string())
    }
}
