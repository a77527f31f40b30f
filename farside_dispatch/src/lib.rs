// farside_dispatch — pure Rust colonist dispatch library.
//
// This crate contains the task distribution core for Farside: it decides
// which colonist does what, in what order, and how outcomes feed back into
// future decisions. It has zero engine dependencies and can be tested,
// benchmarked, and run headless. Everything else — how tasks appear in the
// world, how colonists walk, how the clock advances, how resources are
// mined and spent — belongs to the host and is reached through trait seams.
//
// Module overview:
// - `distributor.rs`: Top-level `Distributor`, the per-cycle pipeline and
//   completion queue.
// - `aggregate.rs`:   Task collection from the four category providers.
// - `scoring.rs`:     Priority formula + colony-need multiplier.
// - `matcher.rs`:     Priority sort and greedy first-fit matching.
// - `lifecycle.rs`:   Assignment commit and `TaskCompleted` handling.
// - `balance.rs`:     `WorkloadStats` + advisory category balancer.
// - `config.rs`:      `DispatchConfig` — all tunable parameters.
// - `task.rs`:        `Task` descriptors, modifiers, `TaskProvider` seam.
// - `colonist.rs`:    `Colonist` / `ColonistRoster` seams.
// - `colony.rs`:      `Pathfinder` / `ResourceTracker` seams.
// - `log.rs`:         Fire-and-forget `LogSink` channel.
// - `error.rs`:       `DispatchError` kinds.
// - `types.rs`:       Grid positions, entity IDs, category/resource enums.
//
// **Critical constraint: determinism.** Given identical collaborator
// responses, a cycle is a pure function of its inputs: category collections
// use `BTreeMap`, ties sort stably in aggregation order, and nothing reads
// system time or OS entropy. Identical inputs, identical assignments.

pub mod aggregate;
pub mod balance;
pub mod colonist;
pub mod colony;
pub mod config;
pub mod distributor;
pub mod error;
pub mod lifecycle;
pub mod log;
pub mod matcher;
pub mod scoring;
pub mod task;
pub mod types;
