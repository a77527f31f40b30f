// Colony-side collaborator seams: pathfinding and resource levels.
//
// Both are consumed capabilities. The core never inspects a `Path` beyond
// passing it to the colonist, and never computes resource levels itself —
// it only turns the tracker's current-vs-target gap into scoring pressure
// (see `scoring.rs`).

use crate::error::DispatchError;
use crate::types::{GridPos, ResourceKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A walkable route between two grid positions. Opaque to the dispatch
/// core; produced by the host's pathfinder and handed to the colonist
/// unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Path {
    /// Positions to visit, first element the start cell.
    pub waypoints: Vec<GridPos>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

/// The host's pathfinding routine.
pub trait Pathfinder {
    fn compute_path(&self, from: GridPos, to: GridPos) -> Result<Path, DispatchError>;
}

/// The host's resource-level bookkeeping. Targets encode policy (how much
/// the colony wants on hand); the gap between target and current drives the
/// colony-need multiplier.
pub trait ResourceTracker {
    fn current_levels(&self) -> BTreeMap<ResourceKind, f64>;

    fn target_levels(&self) -> BTreeMap<ResourceKind, f64>;
}
