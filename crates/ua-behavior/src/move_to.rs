//! Move through one or more waypoints at the agent's speed.

use std::collections::VecDeque;

use tracing::trace;
use ua_core::Vec3;

use crate::{
    Behavior, BehaviorError, BehaviorParams, BehaviorResult, BehaviorState, Binding, Lifecycle,
    Outcome, TickContext,
};

/// Walks the agent's [`Body`][crate::Body] toward each waypoint in turn.
///
/// Each tick moves at most `speed * delta_secs` toward the current waypoint.
/// A waypoint counts as reached once the remaining distance is within
/// `arrival_epsilon`; the next one is targeted from the following tick.
/// Completion is reported on the tick the last waypoint is reached.
#[derive(Debug, Default)]
pub struct MoveBehavior {
    life:      Lifecycle,
    waypoints: VecDeque<Vec3>,
    speed:     Option<f32>,
}

impl MoveBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waypoints not yet reached, current target first.
    pub fn remaining_waypoints(&self) -> impl Iterator<Item = &Vec3> {
        self.waypoints.iter()
    }
}

fn is_finite(p: Vec3) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}

impl Behavior for MoveBehavior {
    fn name(&self) -> &'static str {
        "move"
    }

    fn configure(&mut self, binding: Binding, params: &BehaviorParams) -> BehaviorResult<()> {
        if params.waypoints.is_empty() {
            return Err(BehaviorError::MissingParameter("waypoints"));
        }
        if let Some(bad) = params.waypoints.iter().find(|p| !is_finite(**p)) {
            return Err(BehaviorError::InvalidParameter(format!("non-finite waypoint {bad}")));
        }
        if let Some(speed) = params.speed {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(BehaviorError::InvalidParameter(format!(
                    "speed must be positive, got {speed}"
                )));
            }
        }
        self.life.configure(binding)?;
        self.waypoints = params.waypoints.iter().copied().collect();
        self.speed = params.speed;
        Ok(())
    }

    fn execute(&mut self) -> BehaviorResult<()> {
        self.life.start()
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> Option<Outcome> {
        if !self.life.is_running() {
            return None;
        }
        let Some(&target) = self.waypoints.front() else {
            return self.life.complete();
        };

        let speed = self.speed.unwrap_or(ctx.body.speed);
        let remaining = ctx.body.step_towards(target, speed, ctx.delta_secs);
        trace!(tick = %ctx.tick, %target, remaining, "move step");

        if remaining <= ctx.arrival_epsilon {
            self.waypoints.pop_front();
            if self.waypoints.is_empty() {
                return self.life.complete();
            }
        }
        None
    }

    fn cancel(&mut self) -> Option<Outcome> {
        self.life.cancel()
    }

    fn state(&self) -> BehaviorState {
        self.life.state()
    }

    fn binding(&self) -> Option<Binding> {
        self.life.binding()
    }
}
