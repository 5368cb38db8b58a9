//! Reports a behavior hands back when its work ends.

use ua_core::{AgentId, UtilityId};
use ua_events::GameEvent;

/// The (utility, agent) pair a behavior works for.  Every outcome is tagged
/// with it so handlers know which goal on which agent ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Binding {
    pub utility: UtilityId,
    pub agent:   AgentId,
}

impl Binding {
    #[inline]
    pub fn new(utility: UtilityId, agent: AgentId) -> Self {
        Self { utility, agent }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum OutcomeKind {
    /// The work finished naturally.
    Complete,
    /// The work was cancelled or interrupted.
    Failure,
}

/// A terminal report from a behavior.  Produced at most once per behavior.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Outcome {
    pub kind:    OutcomeKind,
    pub binding: Binding,
}

impl Outcome {
    #[inline]
    pub fn complete(binding: Binding) -> Self {
        Self { kind: OutcomeKind::Complete, binding }
    }

    #[inline]
    pub fn failure(binding: Binding) -> Self {
        Self { kind: OutcomeKind::Failure, binding }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.kind == OutcomeKind::Complete
    }
}

impl From<Outcome> for GameEvent {
    fn from(outcome: Outcome) -> GameEvent {
        let Binding { utility, agent } = outcome.binding;
        match outcome.kind {
            OutcomeKind::Complete => GameEvent::UtilityComplete { utility, agent },
            OutcomeKind::Failure  => GameEvent::UtilityFailure { utility, agent },
        }
    }
}
