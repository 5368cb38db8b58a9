//! A placeholder behavior that never finishes on its own.

use crate::{
    Behavior, BehaviorParams, BehaviorResult, BehaviorState, Binding, Lifecycle, Outcome,
    TickContext,
};

/// Occupies the agent's behavior slot without doing anything.
///
/// It only ends when cancelled, which reports a failure and sends the agent
/// back through root reselection.
#[derive(Debug, Default)]
pub struct DoNothingBehavior {
    life: Lifecycle,
}

impl DoNothingBehavior {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for DoNothingBehavior {
    fn name(&self) -> &'static str {
        "do-nothing"
    }

    fn configure(&mut self, binding: Binding, _params: &BehaviorParams) -> BehaviorResult<()> {
        self.life.configure(binding)
    }

    fn execute(&mut self) -> BehaviorResult<()> {
        self.life.start()
    }

    fn tick(&mut self, _ctx: &mut TickContext<'_>) -> Option<Outcome> {
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
