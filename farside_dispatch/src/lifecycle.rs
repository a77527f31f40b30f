// Assignment and completion handling.
//
// The per-pairing state machine is Free → Assigned → (host-driven: Busy) →
// Completed → Free. This module owns the two transitions the core performs:
//
// - **Assign**: compute a path to the task's work site, hand the colonist
//   its `TaskAssignment`, and only then record the assignment in the stats.
//   Path or colonist failure aborts before anything is committed; the
//   colonist stays free and the counters untouched.
// - **Complete**: the host reports a finished task as an explicit
//   `TaskCompleted` event (there is no callback into cycle state: events
//   may arrive at any time, long after the originating task list is gone).
//   Applying one grants the experience reward and bumps the completion
//   counter. The reassignment check that may follow lives in
//   `distributor.rs`, since it needs the whole cycle machinery.
//
// See also: `matcher.rs` for how the matched task was chosen,
// `balance.rs` for `WorkloadStats`.

use crate::balance::WorkloadStats;
use crate::colonist::{Colonist, TaskAssignment};
use crate::colony::Pathfinder;
use crate::error::DispatchError;
use crate::task::Task;
use crate::types::{ColonistId, TaskCategory};
use serde::{Deserialize, Serialize};

/// A finished task, reported by the host when the colonist's task timer
/// elapses. Carries the reward so the core can grant experience without
/// holding any task state across cycles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskCompleted {
    pub colonist: ColonistId,
    pub category: TaskCategory,
    pub experience_reward: f64,
}

/// Commit a matched pair: path, hand-over, stats, in that order, stopping
/// at the first failure. Exactly one `record_assignment` per `Ok`.
pub(crate) fn assign_matched(
    colonist: &mut dyn Colonist,
    task: &Task,
    pathfinder: &dyn Pathfinder,
    stats: &mut WorkloadStats,
) -> Result<(), DispatchError> {
    let path = pathfinder.compute_path(colonist.position(), task.source)?;
    colonist.assign_task(TaskAssignment {
        task: task.id,
        category: task.category,
        path,
        target: task.target,
        duration_ticks: task.duration_ticks,
        experience_reward: task.experience_reward,
    })?;
    stats.record_assignment(task.category);
    Ok(())
}

/// Apply one completion event to its colonist.
pub(crate) fn apply_completion(
    event: &TaskCompleted,
    colonist: &mut dyn Colonist,
    stats: &mut WorkloadStats,
) {
    colonist.gain_experience(event.category, event.experience_reward);
    stats.record_completion(event.category);
}
