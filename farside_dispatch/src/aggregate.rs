// Task aggregation — one collection pass per cycle.
//
// Queries each category provider independently and merges the results into
// one mapping, stamping per-cycle `TaskId`s in category-then-discovery
// order. That order is load-bearing: it is the stable tie-break the matcher
// relies on when priorities are equal.
//
// A failing provider is isolated — its category is omitted and recorded in
// `failed`, the other providers still contribute. Total failure degrades to
// an empty mapping; the distributor decides what to log and do about it.
//
// See also: `task.rs` for `TaskProvider`, `distributor.rs` for the cycle
// that consumes the aggregation.

use crate::error::DispatchError;
use crate::task::{Task, TaskProvider};
use crate::types::{TaskCategory, TaskId};
use std::collections::BTreeMap;

/// The result of one collection pass. `by_category` holds every task the
/// healthy providers produced; `failed` records the providers that didn't
/// answer, with their errors, for the orchestrator to act on.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub by_category: BTreeMap<TaskCategory, Vec<Task>>,
    pub failed: Vec<(TaskCategory, DispatchError)>,
}

impl Aggregation {
    /// Total number of collected tasks.
    pub fn task_count(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    /// Flatten into a single list in canonical order: category order first
    /// (mining, building, maintenance, research), discovery order within.
    pub fn into_tasks(self) -> Vec<Task> {
        self.by_category.into_values().flatten().collect()
    }
}

/// Collect tasks from every provider. The provider's slot in the map
/// determines the category of everything it returns.
pub fn collect_tasks(
    providers: &BTreeMap<TaskCategory, Box<dyn TaskProvider>>,
) -> Aggregation {
    let mut aggregation = Aggregation::default();
    let mut next_id = 0u32;

    for (&category, provider) in providers {
        match provider.collect() {
            Ok(tasks) => {
                let mut stamped = Vec::with_capacity(tasks.len());
                for mut task in tasks {
                    task.id = TaskId(next_id);
                    task.category = category;
                    next_id += 1;
                    stamped.push(task);
                }
                aggregation.by_category.insert(category, stamped);
            }
            Err(error) => aggregation.failed.push((category, error)),
        }
    }

    aggregation
}
