// Assignment matching — who does what this cycle.
//
// Two steps. `prioritize` sorts the cycle's scored tasks once, descending by
// priority, with a stable sort: ties keep the aggregator's
// category-then-discovery order, nothing re-orders them by any other field.
// `select_task` then runs the greedy per-colonist pass: a linear scan of the
// prioritized list that takes the first task which is still available and
// which the colonist qualifies for.
//
// A selected task is consumed immediately (`available` cleared in the
// cycle's working set), so two colonists are never offered the same task
// within one cycle. If an assignment later fails, the distributor restores
// the flag so a colonist later in the same pass can still take the task.
//
// Qualification is the host's `Colonist::suited_for` check plus the
// configured proximity threshold against the task's work site.

use crate::colonist::Colonist;
use crate::config::DispatchConfig;
use crate::task::Task;
use serde::{Deserialize, Serialize};

/// A task with its computed priority for this cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoredTask {
    pub task: Task,
    pub priority: f64,
}

/// Sort scored tasks descending by priority. Stable: equal priorities keep
/// their aggregation order.
pub fn prioritize(mut scored: Vec<ScoredTask>) -> Vec<ScoredTask> {
    scored.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    scored
}

/// Whether this colonist qualifies for this task.
fn qualifies(colonist: &dyn Colonist, task: &Task, config: &DispatchConfig) -> bool {
    if let Some(max_distance) = config.max_assignment_distance {
        if colonist.position().manhattan_distance(task.source) > max_distance {
            return false;
        }
    }
    colonist.suited_for(task)
}

/// Greedy first-fit selection for one colonist: scan the prioritized list,
/// claim the first available task the colonist qualifies for, and return its
/// index. `None` leaves the colonist unassigned this cycle.
pub fn select_task(
    colonist: &dyn Colonist,
    scored: &mut [ScoredTask],
    config: &DispatchConfig,
) -> Option<usize> {
    for (index, entry) in scored.iter_mut().enumerate() {
        if !entry.task.available {
            continue;
        }
        if !qualifies(colonist, &entry.task, config) {
            continue;
        }
        entry.task.available = false;
        return Some(index);
    }
    None
}
