use thiserror::Error;

use ua_agent::AgentError;
use ua_core::{CoreError, PlayerId};
use ua_events::EventError;
use ua_utility::UtilityError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error(transparent)]
    Utility(#[from] UtilityError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Event(#[from] EventError),
}

pub type SimResult<T> = Result<T, SimError>;
