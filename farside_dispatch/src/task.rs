// Task descriptors and the per-category provider interface.
//
// Tasks are ephemeral: the aggregator recomputes them fresh each distribution
// cycle by querying one `TaskProvider` per category, and nothing in this
// crate holds a task past the end of the cycle that produced it. A provider
// describes the work that exists in the world right now; the dispatch core
// only decides who does it.
//
// See also: `aggregate.rs` for the collection pass that stamps `TaskId`s,
// `scoring.rs` for how `attributes` feed the priority matrix, `matcher.rs`
// for how `available` is consumed on match.
//
// **Critical constraint: determinism.** Attributes live in a `BTreeMap` so
// scoring iterates modifiers in a fixed order.

use crate::error::DispatchError;
use crate::types::{GridPos, TaskCategory, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A named scoring attribute. The priority matrix references these by name;
/// a task must carry a value for every modifier its category's weights
/// mention, or scoring fails explicitly (never a silent partial sum).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modifier {
    /// How scarce the resource this task yields currently is.
    ResourceScarcity,
    /// How soon the work is needed.
    Urgency,
    /// How bad it gets if the work is skipped.
    Criticality,
    /// How deep below the surface the work site sits.
    Depth,
    /// How involved the work is.
    Complexity,
    /// How far degradation has progressed at the work site.
    Decay,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::ResourceScarcity => "resource_scarcity",
            Modifier::Urgency => "urgency",
            Modifier::Criticality => "criticality",
            Modifier::Depth => "depth",
            Modifier::Complexity => "complexity",
            Modifier::Decay => "decay",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work one colonist can be assigned to for one cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// Per-cycle sequence number. Provider-set values are overwritten by the
    /// aggregator.
    pub id: TaskId,
    /// The category of the provider slot this task came from. Also stamped
    /// by the aggregator.
    pub category: TaskCategory,
    /// Where the work happens (the deposit, the construction site, the
    /// broken pump). Pathfinding and the proximity check use this.
    pub source: GridPos,
    /// Where the work's output goes (the stockpile, the lab). Carried
    /// through to the colonist untouched.
    pub target: GridPos,
    /// Estimated duration in simulation ticks.
    pub duration_ticks: u64,
    /// Experience granted to the colonist on completion.
    pub experience_reward: f64,
    /// Whether the task can still be claimed. Providers may emit reserved
    /// tasks with this unset; the matcher clears it on match.
    pub available: bool,
    /// Category-specific scoring attributes, keyed by modifier name.
    pub attributes: BTreeMap<Modifier, f64>,
}

/// One of the four category providers. The host implements this against its
/// world state (deposits, blueprints, damage reports, research queues); the
/// aggregator calls each provider independently so one failing source never
/// blocks the others.
pub trait TaskProvider {
    fn collect(&self) -> Result<Vec<Task>, DispatchError>;
}
