use thiserror::Error;

use crate::BoxError;

#[derive(Debug, Error)]
pub enum EventError {
    /// A handler failed while the dispatcher ran under `FailurePolicy::Propagate`.
    #[error("handler for {kind} event failed: {source}")]
    Handler {
        kind:   String,
        source: BoxError,
    },
}

pub type EventResult<T> = Result<T, EventError>;
