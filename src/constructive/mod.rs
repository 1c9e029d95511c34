//! Route construction for fleet size and mix problems.
//!
//! - [`savings`] — Clarke-Wright savings candidates over route endpoints
//! - [`fleet_savings`] — cost-aware savings merge engine with per-route
//!   vehicle re-selection, O(n² log n)

mod clarke_wright;
pub mod savings;

pub use clarke_wright::{
    fleet_savings, fleet_savings_with, FleetSavings, MergeEvent, MergeObserver, MergeStats,
    NoObserver,
};
pub use savings::{SavingsEntry, SavingsList};
