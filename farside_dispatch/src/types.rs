// Core types shared across the dispatch crate.
//
// Defines grid positions (`GridPos`), compact entity identifiers
// (`ColonistId`, `TaskId`), the task category enum, and the colony resource
// kinds the resource tracker reports on. All plain-data types derive
// `Serialize` and `Deserialize` so configs, stats, and events can be saved
// and replayed.
//
// **Critical constraint: determinism.** Every type used as a map key has a
// total order and goes into `BTreeMap`, never `HashMap`. Category iteration
// order (`TaskCategory::ALL`, and `Ord` on the enum) is the canonical
// aggregation order: mining, building, maintenance, research.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position on the 2D colony grid, in cell units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two positions.
    pub fn manhattan_distance(self, other: Self) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Entity IDs — compact integers
// ---------------------------------------------------------------------------

// Colonists are external entities identified by whatever index the host
// uses; tasks are ephemeral and numbered per cycle. Compact u32 wrappers
// keep both cheap to copy and log.
macro_rules! compact_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

compact_id!(/// Identifier for a colonist, minted by the host roster.
ColonistId);
compact_id!(/// Per-cycle identifier for a task, stamped by the aggregator
/// in category-then-discovery order. Valid only within one cycle.
TaskId);

// ---------------------------------------------------------------------------
// Categories and resources
// ---------------------------------------------------------------------------

/// The kind of work a task represents. Each category has its own provider,
/// its own priority weights, and its own workload counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskCategory {
    Mining,
    Building,
    Maintenance,
    Research,
}

impl TaskCategory {
    /// All categories in canonical aggregation order.
    pub const ALL: [TaskCategory; 4] = [
        TaskCategory::Mining,
        TaskCategory::Building,
        TaskCategory::Maintenance,
        TaskCategory::Research,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Mining => "mining",
            TaskCategory::Building => "building",
            TaskCategory::Maintenance => "maintenance",
            TaskCategory::Research => "research",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A colony resource the tracker reports current/target levels for. Each
/// task category produces one of these (see `DispatchConfig::category_outputs`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    Minerals,
    Housing,
    Upkeep,
    Science,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Minerals => "minerals",
            ResourceKind::Housing => "housing",
            ResourceKind::Upkeep => "upkeep",
            ResourceKind::Science => "science",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, -4);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
    }

    #[test]
    fn grid_pos_ordering() {
        // GridPos must have a total order (needed for BTreeMap keys).
        let a = GridPos::new(0, 0);
        let b = GridPos::new(1, 0);
        assert!(a < b);
    }

    #[test]
    fn category_order_is_canonical() {
        // BTreeMap iteration over categories must match ALL — the matcher's
        // tie-break depends on it.
        use std::collections::BTreeMap;
        let map: BTreeMap<TaskCategory, u8> =
            TaskCategory::ALL.iter().map(|&c| (c, 0)).collect();
        let keys: Vec<TaskCategory> = map.keys().copied().collect();
        assert_eq!(keys, TaskCategory::ALL);
    }

    #[test]
    fn id_display_format() {
        assert_eq!(ColonistId(7).to_string(), "ColonistId(7)");
        assert_eq!(TaskId(0).to_string(), "TaskId(0)");
    }

    #[test]
    fn category_serialization_roundtrip() {
        for category in TaskCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            let restored: TaskCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(category, restored);
        }
    }
}
