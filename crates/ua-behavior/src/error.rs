use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BehaviorError {
    #[error("behavior must be configured before it is executed")]
    NotConfigured,

    #[error("behavior is already running")]
    AlreadyRunning,

    #[error("behavior has already finished")]
    Finished,

    #[error("missing behavior parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("invalid behavior parameter: {0}")]
    InvalidParameter(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
