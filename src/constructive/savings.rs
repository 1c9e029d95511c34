//! Savings candidates for merging routes.
//!
//! For two customers `i` and `j` that are both route endpoints,
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! estimates the distance saved by serving them on one route instead of two.
//! Savings only rank candidates; whether a merge is accepted is decided on
//! actual route cost by the merge engine.

use std::cmp::Ordering;

use crate::models::Instance;

/// A candidate pair of endpoint customers and its savings score.
///
/// `i` is always the customer with the lexicographically smaller identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsEntry {
    /// First customer (location index).
    pub i: usize,
    /// Second customer (location index).
    pub j: usize,
    /// Savings score in km.
    pub value: f64,
}

/// Savings of serving customers `i` and `j` consecutively.
pub fn savings(instance: &Instance, i: usize, j: usize) -> f64 {
    instance.distance(0, i) + instance.distance(0, j) - instance.distance(i, j)
}

/// Ranks entries by descending savings, then ascending identifier pair.
fn rank(instance: &Instance, a: &SavingsEntry, b: &SavingsEntry) -> Ordering {
    b.value.total_cmp(&a.value).then_with(|| {
        let key = |e: &SavingsEntry| (instance.location(e.i).id(), instance.location(e.j).id());
        key(a).cmp(&key(b))
    })
}

/// Live list of merge candidates, best candidate last.
///
/// # Examples
///
/// ```
/// use u_fleetmix::models::{Instance, Location, VehicleType};
/// use u_fleetmix::constructive::SavingsList;
///
/// let instance = Instance::new(
///     vec![
///         Location::depot(0.0, 0.0),
///         Location::new("A", 0.0, 1.0, 1),
///         Location::new("B", 0.0, 2.0, 1),
///         Location::new("C", 0.0, -1.0, 1),
///     ],
///     vec![VehicleType::new("Van", 10, 1.0)],
/// ).unwrap();
///
/// let mut list = SavingsList::build(&instance, &[1, 2, 3]);
/// assert_eq!(list.len(), 3);
/// let best = list.pop().unwrap();
/// assert_eq!((best.i, best.j), (1, 2));
/// assert!((best.value - 200.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct SavingsList {
    entries: Vec<SavingsEntry>,
}

impl SavingsList {
    /// Computes savings for every unordered pair among `endpoints`.
    pub fn build(instance: &Instance, endpoints: &[usize]) -> Self {
        let n = endpoints.len();
        let mut entries = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for (k, &a) in endpoints.iter().enumerate() {
            for &b in &endpoints[k + 1..] {
                if a == b {
                    continue;
                }
                let (i, j) = if instance.location(a).id() <= instance.location(b).id() {
                    (a, b)
                } else {
                    (b, a)
                };
                entries.push(SavingsEntry {
                    i,
                    j,
                    value: savings(instance, i, j),
                });
            }
        }
        entries.sort_by(|a, b| rank(instance, a, b).reverse());
        Self { entries }
    }

    /// Removes and returns the highest-ranked candidate.
    pub fn pop(&mut self) -> Option<SavingsEntry> {
        self.entries.pop()
    }

    /// Drops every candidate that references a customer flagged in `interior`.
    ///
    /// `interior` is indexed by location index. Order is preserved.
    pub fn prune(&mut self, interior: &[bool]) {
        self.entries.retain(|e| !interior[e.i] && !interior[e.j]);
    }

    /// Remaining candidates, best first.
    pub fn iter(&self) -> impl Iterator<Item = &SavingsEntry> {
        self.entries.iter().rev()
    }

    /// Number of remaining candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no candidates remain.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
