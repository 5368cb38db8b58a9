use thiserror::Error;

use ua_behavior::BehaviorError;
use ua_core::{AgentId, AgentKind, UtilityId};

#[derive(Debug, Error, PartialEq)]
pub enum UtilityError {
    // ── Graph construction ────────────────────────────────────────────────
    #[error("utility `{0}` declared twice")]
    DuplicateName(String),

    #[error("utility `{from}` names unknown successor `{to}`")]
    UnknownSuccessor { from: String, to: String },

    #[error("successor chain forms a cycle: {}", path.join(" -> "))]
    Cycle { path: Vec<String> },

    // ── Lookup ────────────────────────────────────────────────────────────
    #[error("utility {0} not found")]
    NotFound(UtilityId),

    #[error("no utility named `{0}`")]
    UnknownName(String),

    // ── Selection / execution ─────────────────────────────────────────────
    #[error("no root utility is available for {agent} of kind {kind}")]
    NoEligibleRoot { agent: AgentId, kind: AgentKind },

    #[error("utility `{utility}` is not available for agents of kind {kind}")]
    Ineligible { utility: String, kind: AgentKind },

    #[error("utility `{utility}` has no behavior implementation")]
    Unimplemented { utility: String },

    #[error(transparent)]
    Behavior(#[from] BehaviorError),
}

pub type UtilityResult<T> = Result<T, UtilityError>;
