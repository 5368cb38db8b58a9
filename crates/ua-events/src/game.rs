//! Domain events exchanged between the decision engine and the presentation
//! layer.

use ua_core::{AgentId, PlayerId, UtilityId};

use crate::Event;

/// Why a utility started executing on an agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StartReason {
    /// Assigned explicitly from outside the graph (e.g. `Sim::assign`).
    Assigned,
    /// Followed the `next` link of the utility that just completed.
    Successor,
    /// Picked by root reselection after a failure, a chain end, or start-up.
    Reselected,
}

/// Every event the simulation triggers.
#[derive(Clone, PartialEq, Debug)]
pub enum GameEvent {
    /// A utility's behavior was attached to the agent and started.
    UtilityStarted {
        utility: UtilityId,
        agent:   AgentId,
        reason:  StartReason,
    },

    /// The agent's behavior for `utility` finished its work.
    UtilityComplete {
        utility: UtilityId,
        agent:   AgentId,
    },

    /// The agent's behavior for `utility` was cancelled or interrupted.
    UtilityFailure {
        utility: UtilityId,
        agent:   AgentId,
    },

    /// The agent reached its terminal state and will no longer act.
    AgentIdle { agent: AgentId },

    ScoreChanged {
        player: PlayerId,
        score:  i64,
    },

    GameOver { winner: PlayerId },
}

/// Routing key for [`GameEvent`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum GameEventKind {
    UtilityStarted,
    UtilityComplete,
    UtilityFailure,
    AgentIdle,
    ScoreChanged,
    GameOver,
}

impl GameEvent {
    /// The agent this event concerns, if any.
    pub fn agent(&self) -> Option<AgentId> {
        match self {
            GameEvent::UtilityStarted { agent, .. }
            | GameEvent::UtilityComplete { agent, .. }
            | GameEvent::UtilityFailure { agent, .. }
            | GameEvent::AgentIdle { agent } => Some(*agent),
            GameEvent::ScoreChanged { .. } | GameEvent::GameOver { .. } => None,
        }
    }
}

impl Event for GameEvent {
    type Kind = GameEventKind;

    fn kind(&self) -> GameEventKind {
        match self {
            GameEvent::UtilityStarted { .. }  => GameEventKind::UtilityStarted,
            GameEvent::UtilityComplete { .. } => GameEventKind::UtilityComplete,
            GameEvent::UtilityFailure { .. }  => GameEventKind::UtilityFailure,
            GameEvent::AgentIdle { .. }       => GameEventKind::AgentIdle,
            GameEvent::ScoreChanged { .. }    => GameEventKind::ScoreChanged,
            GameEvent::GameOver { .. }        => GameEventKind::GameOver,
        }
    }
}
