// Data-driven dispatch configuration.
//
// All tunable dispatch parameters live here in `DispatchConfig`, loadable
// from JSON at startup. The dispatch logic never uses magic numbers — it
// reads from the config. This enables balance iteration without
// recompilation.
//
// The priority matrix is the heart of it: one `CategoryWeights` entry per
// task category, a base score plus linear modifier weights. Scoring is
// `(base + Σ weight * attribute) * colony_need_multiplier` — see
// `scoring.rs`.
//
// See also: `distributor.rs` which owns the config, `balance.rs` for how
// `ideal_distribution` is consumed, `matcher.rs` for
// `max_assignment_distance`.

use crate::task::Modifier;
use crate::types::{ResourceKind, TaskCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base score and modifier weights for one task category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryWeights {
    /// Flat score every task of this category starts from.
    pub base: f64,
    /// Linear weights applied to the task's attribute values. Every modifier
    /// listed here must be resolvable on every task of the category.
    pub modifiers: BTreeMap<Modifier, f64>,
}

/// Static priority configuration, one entry per category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriorityMatrix {
    pub categories: BTreeMap<TaskCategory, CategoryWeights>,
}

impl PriorityMatrix {
    /// Weights for a category, if configured.
    pub fn weights(&self, category: TaskCategory) -> Option<&CategoryWeights> {
        self.categories.get(&category)
    }
}

/// Complete dispatch configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Priority scoring matrix.
    pub matrix: PriorityMatrix,

    /// Desired long-run share of assignments per category. Relative weights;
    /// the balancer normalizes them.
    pub ideal_distribution: BTreeMap<TaskCategory, f64>,

    /// Which resource each category produces. Drives the colony-need
    /// multiplier; a category with no entry scores at neutral need (1.0).
    pub category_outputs: BTreeMap<TaskCategory, ResourceKind>,

    /// Maximum manhattan distance (in cells) between a colonist and a task's
    /// work site for the matcher to consider the pair. `None` disables the
    /// proximity check.
    pub max_assignment_distance: Option<u32>,

    /// Whether a colonist that just completed a task is immediately matched
    /// against a fresh task list instead of waiting for the next cycle.
    pub reassign_on_completion: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            TaskCategory::Mining,
            CategoryWeights {
                base: 10.0,
                modifiers: BTreeMap::from([
                    (Modifier::ResourceScarcity, 2.0),
                    (Modifier::Depth, -0.5),
                ]),
            },
        );
        categories.insert(
            TaskCategory::Building,
            CategoryWeights {
                base: 12.0,
                modifiers: BTreeMap::from([(Modifier::Urgency, 3.0)]),
            },
        );
        categories.insert(
            TaskCategory::Maintenance,
            CategoryWeights {
                base: 8.0,
                modifiers: BTreeMap::from([
                    (Modifier::Criticality, 4.0),
                    (Modifier::Decay, 1.5),
                ]),
            },
        );
        categories.insert(
            TaskCategory::Research,
            CategoryWeights {
                base: 6.0,
                modifiers: BTreeMap::from([(Modifier::Complexity, -1.0)]),
            },
        );

        Self {
            matrix: PriorityMatrix { categories },
            ideal_distribution: BTreeMap::from([
                (TaskCategory::Mining, 0.35),
                (TaskCategory::Building, 0.30),
                (TaskCategory::Maintenance, 0.20),
                (TaskCategory::Research, 0.15),
            ]),
            category_outputs: BTreeMap::from([
                (TaskCategory::Mining, ResourceKind::Minerals),
                (TaskCategory::Building, ResourceKind::Housing),
                (TaskCategory::Maintenance, ResourceKind::Upkeep),
                (TaskCategory::Research, ResourceKind::Science),
            ]),
            max_assignment_distance: Some(64),
            reassign_on_completion: true,
        }
    }
}

impl DispatchConfig {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
