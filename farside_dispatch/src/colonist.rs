// Colonist seam — the dispatch core's view of the host's worker entities.
//
// Colonists are external: the core never constructs, destroys, or stores
// them. It reads free/busy status and position, asks whether a colonist can
// take a task, and hands over a `TaskAssignment` when a match succeeds. The
// colonist's own execution (walking the path, running the task timer) is the
// host's business; the core hears about it again only through a
// `TaskCompleted` event (see `lifecycle.rs`).
//
// See also: `matcher.rs` for where `is_free`/`suited_for` are consulted,
// `distributor.rs` for the cycle that drives a roster.

use crate::colony::Path;
use crate::error::DispatchError;
use crate::task::Task;
use crate::types::{ColonistId, GridPos, TaskCategory, TaskId};
use serde::{Deserialize, Serialize};

/// Everything a colonist needs to begin a task. Handed to
/// `Colonist::assign_task` after pathfinding succeeds; the path leads to the
/// task's work site, the target is where the output goes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskAssignment {
    pub task: TaskId,
    pub category: TaskCategory,
    pub path: Path,
    pub target: GridPos,
    pub duration_ticks: u64,
    pub experience_reward: f64,
}

/// A worker agent capable of performing one task at a time.
///
/// `suited_for` is the host's capability check — skill gates, tool
/// requirements, mood, whatever the host models. The default accepts
/// everything; the matcher separately applies the configured proximity
/// threshold, so a host only overrides this for checks of its own.
pub trait Colonist {
    fn id(&self) -> ColonistId;

    fn is_free(&self) -> bool;

    fn position(&self) -> GridPos;

    /// Accumulated experience in a category. Hosts typically read this
    /// inside their `suited_for` override.
    fn experience(&self, category: TaskCategory) -> f64;

    fn suited_for(&self, task: &Task) -> bool {
        let _ = task;
        true
    }

    /// Begin the given task. An `Err` means nothing was committed on the
    /// colonist's side and the core will leave it free.
    fn assign_task(&mut self, assignment: TaskAssignment) -> Result<(), DispatchError>;

    fn gain_experience(&mut self, category: TaskCategory, amount: f64);
}

/// The host's colonist registry. `free_colonists` fixes the matching order
/// for a cycle; `colonist` resolves an id for assignment and completion
/// handling.
pub trait ColonistRoster {
    fn free_colonists(&self) -> Vec<ColonistId>;

    fn colonist(&mut self, id: ColonistId) -> Option<&mut dyn Colonist>;
}
