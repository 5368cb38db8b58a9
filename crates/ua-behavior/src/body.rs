//! Spatial state a behavior is allowed to drive, and the per-tick context.

use ua_core::{Tick, Vec3};

/// An agent's kinematic state.
///
/// This is the only part of the agent a behavior can mutate.  The host
/// engine's transforms are synchronised from it by the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub position: Vec3,
    /// Movement speed in world units per second.
    pub speed:    f32,
}

impl Body {
    #[inline]
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self { position, speed }
    }

    /// Move toward `target` by at most `speed * delta_secs` and return the
    /// distance still remaining.
    pub fn step_towards(&mut self, target: Vec3, speed: f32, delta_secs: f32) -> f32 {
        self.position = self.position.move_towards(target, speed * delta_secs);
        self.position.distance(target)
    }
}

/// Everything a behavior sees during one tick.
///
/// Built fresh by the simulation for each agent each tick; the borrow of the
/// agent's [`Body`] lasts only for the call.
pub struct TickContext<'a> {
    pub tick:            Tick,
    /// Game seconds covered by this tick.
    pub delta_secs:      f32,
    /// Distance under which a mover counts as arrived.
    pub arrival_epsilon: f32,
    pub body:            &'a mut Body,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(tick: Tick, delta_secs: f32, arrival_epsilon: f32, body: &'a mut Body) -> Self {
        Self { tick, delta_secs, arrival_epsilon, body }
    }
}
