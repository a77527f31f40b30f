// The distributor — orchestrates one full distribution cycle.
//
// `Distributor` owns everything the dispatch core keeps between cycles: the
// config, the workload counters, the completion queue, and the injected
// collaborators (providers, pathfinder, resource tracker, log sink). The
// colonist roster stays with the host and is passed in per call.
//
// One `auto_distribute` call runs the §-by-§ pipeline to completion,
// synchronously: drain pending completions → aggregate → score → sort →
// match → assign. The transient working set (`DistributionCycle`) lives
// only for the duration of the call. Cycles never overlap; the host driver
// must not re-enter while a cycle is in flight.
//
// Failure policy: the distributor is the single degrade point. Every
// component below it reports errors explicitly; here they turn into a log
// line with cycle/colonist/task context and a safe default (skip the
// category, score zero, leave the colonist unassigned). No public operation
// panics or returns an error, and a failed cycle still runs to the end.
//
// The completion queue is the one asynchronous boundary: the host calls
// `notify_completion` whenever a task timer elapses, and the events are
// drained either explicitly (`process_completions`) or at the start of the
// next cycle. Events carry everything they need, so they are safe to apply
// long after the cycle that made the assignment is gone.
//
// See also: `aggregate.rs`, `scoring.rs`, `matcher.rs`, `lifecycle.rs`,
// `balance.rs` for the individual stages; `config.rs` for the knobs.

use crate::aggregate;
use crate::balance::{self, BalancingAction, WorkloadStats};
use crate::colonist::ColonistRoster;
use crate::colony::{Pathfinder, ResourceTracker};
use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::lifecycle::{self, TaskCompleted};
use crate::log::LogSink;
use crate::matcher::{self, ScoredTask};
use crate::scoring;
use crate::task::{Task, TaskProvider};
use crate::types::{ColonistId, TaskCategory};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::collections::{BTreeMap, VecDeque};

/// Transient working set of one distribution pass. Built at the start of
/// the call, dropped at the end — never persisted.
struct DistributionCycle {
    /// Tasks with computed priorities, sorted descending.
    scored: Vec<ScoredTask>,
}

/// The dispatch orchestrator. One instance per colony; workload stats live
/// and grow for its whole lifetime (a host wanting per-era stats starts a
/// fresh distributor).
pub struct Distributor {
    config: DispatchConfig,
    providers: BTreeMap<TaskCategory, Box<dyn TaskProvider>>,
    pathfinder: Box<dyn Pathfinder>,
    resources: Box<dyn ResourceTracker>,
    log: Box<dyn LogSink>,
    stats: WorkloadStats,
    completions: VecDeque<TaskCompleted>,
    /// Running cycle number, for log context only.
    cycle: u64,
}

impl Distributor {
    pub fn new(
        config: DispatchConfig,
        providers: BTreeMap<TaskCategory, Box<dyn TaskProvider>>,
        pathfinder: Box<dyn Pathfinder>,
        resources: Box<dyn ResourceTracker>,
        log: Box<dyn LogSink>,
    ) -> Self {
        Self {
            config,
            providers,
            pathfinder,
            resources,
            log,
            stats: WorkloadStats::new(),
            completions: VecDeque::new(),
            cycle: 0,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Read-only view of the workload counters.
    pub fn stats(&self) -> &WorkloadStats {
        &self.stats
    }

    /// Number of completion events waiting to be processed.
    pub fn pending_completions(&self) -> usize {
        self.completions.len()
    }

    /// Enqueue a finished task reported by the host. Safe to call at any
    /// time between cycles.
    pub fn notify_completion(&mut self, event: TaskCompleted) {
        self.completions.push_back(event);
    }

    /// Run one full distribution cycle. Side effects only; failures degrade
    /// and are logged, never propagated.
    pub fn auto_distribute(&mut self, roster: &mut dyn ColonistRoster) {
        self.cycle += 1;

        // Apply completions that arrived since the last cycle first, so
        // just-freed colonists take part in this one.
        self.process_completions(roster);

        let free = roster.free_colonists();
        if free.is_empty() {
            self.log
                .info(&format!("cycle {}: no free colonists", self.cycle));
            return;
        }

        let mut cycle = self.build_cycle();
        if cycle.scored.is_empty() {
            self.log
                .info(&format!("cycle {}: no tasks to distribute", self.cycle));
            return;
        }

        let free_count = free.len();
        let mut assigned = 0usize;
        for colonist_id in free {
            if self.dispatch_one(colonist_id, roster, &mut cycle) {
                assigned += 1;
            }
        }

        self.log.info(&format!(
            "cycle {}: assigned {assigned} of {free_count} free colonists ({} tasks on offer)",
            self.cycle,
            cycle.scored.len(),
        ));
    }

    /// Drain and apply all queued completion events. Per-event failures are
    /// logged and never affect the remaining events.
    pub fn process_completions(&mut self, roster: &mut dyn ColonistRoster) {
        while let Some(event) = self.completions.pop_front() {
            self.apply_one_completion(&event, roster);
        }
    }

    /// Advisory: corrective deltas between the realized assignment
    /// distribution and the configured ideal.
    pub fn balance_workload(&self) -> SmallVec<[BalancingAction; 4]> {
        balance::balance(&self.stats, &self.config.ideal_distribution)
    }

    /// Diagnostic: mean deficit ratio across tracked resources.
    pub fn calculate_resource_need(&self) -> f64 {
        scoring::resource_need(
            &self.resources.current_levels(),
            &self.resources.target_levels(),
        )
    }

    // -----------------------------------------------------------------------
    // Cycle internals
    // -----------------------------------------------------------------------

    /// Aggregate and prioritize the current task universe.
    fn build_cycle(&self) -> DistributionCycle {
        let aggregation = aggregate::collect_tasks(&self.providers);
        for (category, error) in &aggregation.failed {
            self.log.warn(&format!(
                "cycle {}: {category} tasks unavailable: {error}",
                self.cycle
            ));
        }

        let current = self.resources.current_levels();
        let targets = self.resources.target_levels();
        let mut multipliers = FxHashMap::default();
        for category in TaskCategory::ALL {
            multipliers.insert(
                category,
                scoring::need_multiplier(
                    category,
                    &self.config.category_outputs,
                    &current,
                    &targets,
                ),
            );
        }

        let mut scored = Vec::with_capacity(aggregation.task_count());
        for task in aggregation.into_tasks() {
            let multiplier = multipliers.get(&task.category).copied().unwrap_or(1.0);
            let priority = self.score_or_zero(&task, multiplier);
            scored.push(ScoredTask { task, priority });
        }

        DistributionCycle {
            scored: matcher::prioritize(scored),
        }
    }

    /// Score a task, degrading to priority 0 (with a warning) on any
    /// scoring failure; the task still ranks, just behind every
    /// positively-scored one.
    fn score_or_zero(&self, task: &Task, multiplier: f64) -> f64 {
        let result = self
            .config
            .matrix
            .weights(task.category)
            .ok_or(DispatchError::UnscoredCategory {
                category: task.category,
            })
            .and_then(|weights| scoring::score_task(task, weights, multiplier));

        match result {
            Ok(priority) => priority,
            Err(error) => {
                self.log.warn(&format!(
                    "cycle {}: scoring task {} failed ({error}); defaulting to 0",
                    self.cycle, task.id
                ));
                0.0
            }
        }
    }

    /// Match and assign one colonist. Returns whether an assignment was
    /// committed.
    fn dispatch_one(
        &mut self,
        colonist_id: ColonistId,
        roster: &mut dyn ColonistRoster,
        cycle: &mut DistributionCycle,
    ) -> bool {
        let Some(colonist) = roster.colonist(colonist_id) else {
            self.log.warn(&format!(
                "cycle {}: {}",
                self.cycle,
                DispatchError::UnknownColonist {
                    colonist: colonist_id
                }
            ));
            return false;
        };
        if !colonist.is_free() {
            // Roster listed it free but the colonist disagrees; trust the
            // colonist.
            return false;
        }

        let Some(index) = matcher::select_task(&*colonist, &mut cycle.scored, &self.config)
        else {
            self.log.warn(&format!(
                "cycle {}: no suitable task for colonist {colonist_id}",
                self.cycle
            ));
            return false;
        };

        let task = cycle.scored[index].task.clone();
        match lifecycle::assign_matched(colonist, &task, self.pathfinder.as_ref(), &mut self.stats)
        {
            Ok(()) => true,
            Err(error) => {
                // Nothing was committed; put the task back on offer for the
                // colonists still waiting in this pass.
                cycle.scored[index].task.available = true;
                self.log.warn(&format!(
                    "cycle {}: assigning task {} to colonist {colonist_id} failed: {error}",
                    self.cycle, task.id
                ));
                false
            }
        }
    }

    fn apply_one_completion(&mut self, event: &TaskCompleted, roster: &mut dyn ColonistRoster) {
        let Some(colonist) = roster.colonist(event.colonist) else {
            self.log.error(&format!(
                "completion of a {} task dropped: {}",
                event.category,
                DispatchError::UnknownColonist {
                    colonist: event.colonist
                }
            ));
            return;
        };
        lifecycle::apply_completion(event, colonist, &mut self.stats);

        if self.config.reassign_on_completion {
            self.reassign_one(event.colonist, roster);
        }
    }

    /// Reassignment check: match one just-freed colonist against a fresh
    /// task list without waiting for the next full cycle.
    fn reassign_one(&mut self, colonist_id: ColonistId, roster: &mut dyn ColonistRoster) {
        let mut cycle = self.build_cycle();
        if cycle.scored.is_empty() {
            return;
        }
        let Some(colonist) = roster.colonist(colonist_id) else {
            return;
        };
        if !colonist.is_free() {
            return;
        }

        let Some(index) = matcher::select_task(&*colonist, &mut cycle.scored, &self.config)
        else {
            self.log.info(&format!(
                "no follow-up task for colonist {colonist_id}"
            ));
            return;
        };

        let task = cycle.scored[index].task.clone();
        if let Err(error) =
            lifecycle::assign_matched(colonist, &task, self.pathfinder.as_ref(), &mut self.stats)
        {
            self.log.warn(&format!(
                "follow-up assignment of task {} to colonist {colonist_id} failed: {error}",
                task.id
            ));
        }
    }
}
