// Error kinds for the dispatch core.
//
// Every fallible operation returns one of these explicitly; the
// `Distributor` is the single place that converts a failure into a degraded
// default (empty aggregation, zero priority, colonist left unassigned).
// Nothing below the distributor logs-and-swallows on its own.
//
// Collaborator implementations construct these too: a provider that cannot
// reach its data source returns `Provider`, a pathfinder that cannot connect
// two cells returns `NoPath`, a colonist that refuses work returns
// `AssignmentRejected`.

use crate::task::Modifier;
use crate::types::{ColonistId, GridPos, TaskCategory, TaskId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("task provider for {category} failed: {reason}")]
    Provider {
        category: TaskCategory,
        reason: String,
    },

    #[error("modifier {modifier} not resolvable on task {task}")]
    UnresolvedModifier { task: TaskId, modifier: Modifier },

    #[error("no priority weights configured for {category}")]
    UnscoredCategory { category: TaskCategory },

    #[error("resource tracker failed: {0}")]
    Resources(String),

    #[error("no path from {from} to {to}")]
    NoPath { from: GridPos, to: GridPos },

    #[error("pathfinding failed: {0}")]
    Pathfinding(String),

    #[error("colonist {colonist} rejected assignment: {reason}")]
    AssignmentRejected {
        colonist: ColonistId,
        reason: String,
    },

    #[error("colonist {colonist} not found in roster")]
    UnknownColonist { colonist: ColonistId },
}
