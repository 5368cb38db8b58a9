//! Stand still for a fixed amount of game time.

use crate::{
    Behavior, BehaviorError, BehaviorParams, BehaviorResult, BehaviorState, Binding, Lifecycle,
    Outcome, TickContext,
};

/// Completes once the accumulated tick time reaches `duration_secs`.
#[derive(Debug, Default)]
pub struct WaitBehavior {
    life:          Lifecycle,
    duration_secs: f32,
    elapsed_secs:  f32,
}

impl WaitBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Game seconds still to wait.
    pub fn remaining_secs(&self) -> f32 {
        (self.duration_secs - self.elapsed_secs).max(0.0)
    }
}

impl Behavior for WaitBehavior {
    fn name(&self) -> &'static str {
        "wait"
    }

    fn configure(&mut self, binding: Binding, params: &BehaviorParams) -> BehaviorResult<()> {
        let secs = params
            .duration_secs
            .ok_or(BehaviorError::MissingParameter("duration_secs"))?;
        if !(secs.is_finite() && secs >= 0.0) {
            return Err(BehaviorError::InvalidParameter(format!(
                "duration_secs must be non-negative, got {secs}"
            )));
        }
        self.life.configure(binding)?;
        self.duration_secs = secs;
        self.elapsed_secs = 0.0;
        Ok(())
    }

    fn execute(&mut self) -> BehaviorResult<()> {
        self.life.start()
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> Option<Outcome> {
        if !self.life.is_running() {
            return None;
        }
        self.elapsed_secs += ctx.delta_secs;
        if self.elapsed_secs >= self.duration_secs {
            return self.life.complete();
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
