// Workload statistics and the category balancer.
//
// `WorkloadStats` counts assignments and completions per category for the
// lifetime of a distributor. Counters only go up, and only through
// `record_assignment` / `record_completion` — there is no reset and no
// decrement, so monotonicity holds by construction. Reads go through
// accessors; the distributor owns the instance and exposes it read-only.
//
// `balance` compares the realized assignment distribution against the
// configured ideal and emits one signed corrective delta per category,
// advisory only — nothing in this crate acts on the actions, the host's
// policy layer does.
//
// See also: `lifecycle.rs` for the single place assignments are recorded,
// `config.rs` for `ideal_distribution`.

use crate::types::TaskCategory;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Monotonic per-category dispatch counters.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkloadStats {
    assignments: BTreeMap<TaskCategory, u64>,
    completions: BTreeMap<TaskCategory, u64>,
}

impl WorkloadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful assignment.
    pub fn record_assignment(&mut self, category: TaskCategory) {
        *self.assignments.entry(category).or_insert(0) += 1;
    }

    /// Record one task completion.
    pub fn record_completion(&mut self, category: TaskCategory) {
        *self.completions.entry(category).or_insert(0) += 1;
    }

    pub fn assignments(&self, category: TaskCategory) -> u64 {
        self.assignments.get(&category).copied().unwrap_or(0)
    }

    pub fn completions(&self, category: TaskCategory) -> u64 {
        self.completions.get(&category).copied().unwrap_or(0)
    }

    pub fn total_assignments(&self) -> u64 {
        self.assignments.values().sum()
    }

    /// Realized assignment distribution, normalized to fractions. Empty when
    /// nothing has been assigned yet.
    pub fn distribution(&self) -> BTreeMap<TaskCategory, f64> {
        let total = self.total_assignments();
        if total == 0 {
            return BTreeMap::new();
        }
        self.assignments
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&category, &count)| (category, count as f64 / total as f64))
            .collect()
    }
}

/// One corrective step: how many assignments a category is short of (delta
/// positive, "favor this category next cycle") or over (delta negative) its
/// ideal share.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BalancingAction {
    pub category: TaskCategory,
    pub delta: f64,
}

impl BalancingAction {
    pub fn is_deficit(&self) -> bool {
        self.delta > 0.0
    }
}

/// Derive corrective actions from realized vs. ideal distribution.
///
/// Only categories present in both the stats (at least one assignment) and
/// the ideal weights participate; both sides are normalized over that
/// intersection, and the fractional gap is scaled back to assignment counts.
/// Degrades to an empty sequence when there is nothing to compare (no
/// assignments, no overlapping categories, or unusable weights).
pub fn balance(
    stats: &WorkloadStats,
    ideal: &BTreeMap<TaskCategory, f64>,
) -> SmallVec<[BalancingAction; 4]> {
    let current = stats.distribution();
    if current.is_empty() {
        return SmallVec::new();
    }

    let shared: Vec<TaskCategory> = current
        .keys()
        .copied()
        .filter(|category| ideal.contains_key(category))
        .collect();
    if shared.is_empty() {
        return SmallVec::new();
    }

    let ideal_total: f64 = shared.iter().map(|c| ideal[c]).sum();
    if !ideal_total.is_finite() || ideal_total <= 0.0 {
        return SmallVec::new();
    }
    let count_total: u64 = shared.iter().map(|&c| stats.assignments(c)).sum();
    if count_total == 0 {
        return SmallVec::new();
    }

    let mut actions = SmallVec::new();
    for &category in &shared {
        let ideal_frac = ideal[&category] / ideal_total;
        let current_frac = stats.assignments(category) as f64 / count_total as f64;
        actions.push(BalancingAction {
            category,
            delta: (ideal_frac - current_frac) * count_total as f64,
        });
    }
    actions
}
