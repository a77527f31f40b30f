// Priority scoring engine.
//
// Pure functions: a task, its category's weights, and the colony-need
// multiplier in; one number out. The formula is
//
//   priority = (base + Σ weight(m) * attribute(task, m)) * need_multiplier
//
// over the modifiers declared for the category. All arithmetic is f64 with
// no clamping — priorities can go negative, and a negative task still ranks
// (last) rather than being excluded.
//
// The colony-need multiplier expresses how urgently the colony wants output
// of a category: the relative gap between the target and current level of
// the category's output resource, floored at zero. A saturated category
// multiplies everything to 0.0 and sinks to the bottom of the ranking.
//
// A modifier the matrix declares but the task doesn't carry is an explicit
// `UnresolvedModifier` error — the caller decides the fallback (the
// distributor logs it and scores the task 0.0). A partial sum is never
// returned.

use crate::config::CategoryWeights;
use crate::error::DispatchError;
use crate::task::Task;
use crate::types::{ResourceKind, TaskCategory};
use std::collections::BTreeMap;

/// Score one task against its category's weights.
pub fn score_task(
    task: &Task,
    weights: &CategoryWeights,
    need_multiplier: f64,
) -> Result<f64, DispatchError> {
    let mut priority = weights.base;
    for (&modifier, &weight) in &weights.modifiers {
        let value = task.attributes.get(&modifier).copied().ok_or(
            DispatchError::UnresolvedModifier {
                task: task.id,
                modifier,
            },
        )?;
        priority += weight * value;
    }
    Ok(priority * need_multiplier)
}

/// Colony-need multiplier for a category.
///
/// `1.0` (neutral) when the category has no output resource configured or
/// the target level is unset/zero; otherwise
/// `max(0, (target - current) / target)`.
pub fn need_multiplier(
    category: TaskCategory,
    outputs: &BTreeMap<TaskCategory, ResourceKind>,
    current: &BTreeMap<ResourceKind, f64>,
    targets: &BTreeMap<ResourceKind, f64>,
) -> f64 {
    let Some(kind) = outputs.get(&category) else {
        return 1.0;
    };
    let target = targets.get(kind).copied().unwrap_or(0.0);
    if target <= 0.0 {
        return 1.0;
    }
    let have = current.get(kind).copied().unwrap_or(0.0);
    ((target - have) / target).max(0.0)
}

/// Diagnostic scalar: mean deficit ratio across all resources with a
/// positive target. `0.0` when no targets are set.
pub fn resource_need(
    current: &BTreeMap<ResourceKind, f64>,
    targets: &BTreeMap<ResourceKind, f64>,
) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for (kind, &target) in targets {
        if target <= 0.0 {
            continue;
        }
        let have = current.get(kind).copied().unwrap_or(0.0);
        sum += ((target - have) / target).max(0.0);
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / f64::from(count) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Modifier;
    use crate::types::{GridPos, TaskId};

    fn mining_task(attributes: BTreeMap<Modifier, f64>) -> Task {
        Task {
            id: TaskId(0),
            category: TaskCategory::Mining,
            source: GridPos::new(0, 0),
            target: GridPos::new(0, 0),
            duration_ticks: 100,
            experience_reward: 1.0,
            available: true,
            attributes,
        }
    }

    #[test]
    fn base_plus_weighted_modifiers() {
        // base 10, resource_scarcity weight 2, attribute 3, neutral need
        // => 10 + 2*3 = 16.
        let weights = CategoryWeights {
            base: 10.0,
            modifiers: BTreeMap::from([(Modifier::ResourceScarcity, 2.0)]),
        };
        let task = mining_task(BTreeMap::from([(Modifier::ResourceScarcity, 3.0)]));
        assert_eq!(score_task(&task, &weights, 1.0).unwrap(), 16.0);
    }

    #[test]
    fn need_multiplier_scales_whole_score() {
        let weights = CategoryWeights {
            base: 10.0,
            modifiers: BTreeMap::from([(Modifier::ResourceScarcity, 2.0)]),
        };
        let task = mining_task(BTreeMap::from([(Modifier::ResourceScarcity, 3.0)]));
        assert_eq!(score_task(&task, &weights, 0.5).unwrap(), 8.0);
        assert_eq!(score_task(&task, &weights, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn negative_priorities_are_allowed() {
        let weights = CategoryWeights {
            base: 1.0,
            modifiers: BTreeMap::from([(Modifier::Depth, -2.0)]),
        };
        let task = mining_task(BTreeMap::from([(Modifier::Depth, 5.0)]));
        assert_eq!(score_task(&task, &weights, 1.0).unwrap(), -9.0);
    }

    #[test]
    fn unresolved_modifier_is_an_error_not_a_partial_sum() {
        let weights = CategoryWeights {
            base: 10.0,
            modifiers: BTreeMap::from([
                (Modifier::ResourceScarcity, 2.0),
                (Modifier::Depth, 1.0),
            ]),
        };
        // Task carries scarcity but not depth.
        let task = mining_task(BTreeMap::from([(Modifier::ResourceScarcity, 3.0)]));
        let err = score_task(&task, &weights, 1.0).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::UnresolvedModifier {
                modifier: Modifier::Depth,
                ..
            }
        ));
    }

    #[test]
    fn multiplier_reflects_resource_deficit() {
        let outputs = BTreeMap::from([(TaskCategory::Mining, ResourceKind::Minerals)]);
        let targets = BTreeMap::from([(ResourceKind::Minerals, 100.0)]);

        // Empty stockpile: full need.
        let current = BTreeMap::from([(ResourceKind::Minerals, 0.0)]);
        assert_eq!(
            need_multiplier(TaskCategory::Mining, &outputs, &current, &targets),
            1.0
        );

        // Half full: half need.
        let current = BTreeMap::from([(ResourceKind::Minerals, 50.0)]);
        assert_eq!(
            need_multiplier(TaskCategory::Mining, &outputs, &current, &targets),
            0.5
        );

        // Saturated (and overshoot): zero, not negative.
        let current = BTreeMap::from([(ResourceKind::Minerals, 150.0)]);
        assert_eq!(
            need_multiplier(TaskCategory::Mining, &outputs, &current, &targets),
            0.0
        );
    }

    #[test]
    fn multiplier_is_neutral_without_a_target() {
        let outputs = BTreeMap::from([(TaskCategory::Research, ResourceKind::Science)]);
        let current = BTreeMap::new();
        let targets = BTreeMap::new();
        assert_eq!(
            need_multiplier(TaskCategory::Research, &outputs, &current, &targets),
            1.0
        );
        // Unmapped category is neutral too.
        assert_eq!(
            need_multiplier(TaskCategory::Mining, &outputs, &current, &targets),
            1.0
        );
    }

    #[test]
    fn resource_need_is_mean_deficit() {
        let targets = BTreeMap::from([
            (ResourceKind::Minerals, 100.0),
            (ResourceKind::Science, 10.0),
        ]);
        let current = BTreeMap::from([
            (ResourceKind::Minerals, 75.0), // deficit 0.25
            (ResourceKind::Science, 10.0),  // deficit 0.0
        ]);
        assert_eq!(resource_need(&current, &targets), 0.125);

        assert_eq!(resource_need(&BTreeMap::new(), &BTreeMap::new()), 0.0);
    }
}
