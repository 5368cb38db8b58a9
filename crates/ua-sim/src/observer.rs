//! Per-tick hooks for printing or recording a running session.

use ua_agent::NpcStore;
use ua_behavior::Outcome;
use ua_core::Tick;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run].
///
/// Every hook defaults to doing nothing.
///
/// # Example: position printer
///
/// ```rust,ignore
/// struct Positions { every: u64 }
///
/// impl SimObserver for Positions {
///     fn on_tick_end(&mut self, tick: Tick, npcs: &NpcStore) {
///         if tick.0 % self.every == 0 {
///             for npc in npcs.iter() {
///                 println!("{tick} {}: {}", npc.id, npc.body.position);
///             }
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any behavior is stepped.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for each outcome, just before it is triggered on the dispatcher.
    fn on_outcome(&mut self, _tick: Tick, _outcome: &Outcome) {}

    /// Called once all outcomes of the tick have been handled.
    fn on_tick_end(&mut self, _tick: Tick, _npcs: &NpcStore) {}

    /// Called when `run` returns normally.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
