use thiserror::Error;

use ua_behavior::BehaviorError;
use ua_core::{AgentId, UtilityId};

#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    #[error("agent {0} not found")]
    NotFound(AgentId),

    #[error("agent {agent} is already executing {utility}")]
    Busy { agent: AgentId, utility: UtilityId },

    #[error("agent {0} is terminal and accepts no more work")]
    Terminal(AgentId),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),
}

pub type AgentResult<T> = Result<T, AgentError>;
