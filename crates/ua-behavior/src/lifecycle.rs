//! Shared state machine that enforces the exactly-once reporting contract.
//!
//! ```text
//! Unconfigured ──configure──► Ready ──execute──► Running ──complete──► Completed
//!                                                   └──────cancel────► Cancelled
//! ```
//!
//! Only a `Running` lifecycle produces an [`Outcome`]; every other call to
//! `complete`/`cancel` returns `None`.

use crate::{BehaviorError, BehaviorResult, Binding, Outcome};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum BehaviorState {
    #[default]
    Unconfigured,
    Ready,
    Running,
    Completed,
    Cancelled,
}

impl BehaviorState {
    /// `true` once the behavior has produced its outcome.
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, BehaviorState::Completed | BehaviorState::Cancelled)
    }
}

/// Embedded in every built-in behavior.
#[derive(Clone, Debug, Default)]
pub struct Lifecycle {
    binding: Option<Binding>,
    state:   BehaviorState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind to a (utility, agent) pair.  Rejected while running.
    pub fn configure(&mut self, binding: Binding) -> BehaviorResult<()> {
        if self.state == BehaviorState::Running {
            return Err(BehaviorError::AlreadyRunning);
        }
        self.binding = Some(binding);
        self.state = BehaviorState::Ready;
        Ok(())
    }

    pub fn start(&mut self) -> BehaviorResult<()> {
        match self.state {
            BehaviorState::Ready        => {
                self.state = BehaviorState::Running;
                Ok(())
            }
            BehaviorState::Unconfigured => Err(BehaviorError::NotConfigured),
            BehaviorState::Running      => Err(BehaviorError::AlreadyRunning),
            BehaviorState::Completed
            | BehaviorState::Cancelled  => Err(BehaviorError::Finished),
        }
    }

    pub fn complete(&mut self) -> Option<Outcome> {
        self.finish(BehaviorState::Completed).map(Outcome::complete)
    }

    pub fn cancel(&mut self) -> Option<Outcome> {
        self.finish(BehaviorState::Cancelled).map(Outcome::failure)
    }

    fn finish(&mut self, to: BehaviorState) -> Option<Binding> {
        if self.state != BehaviorState::Running {
            return None;
        }
        self.state = to;
        self.binding
    }

    #[inline]
    pub fn state(&self) -> BehaviorState {
        self.state
    }

    #[inline]
    pub fn binding(&self) -> Option<Binding> {
        self.binding
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == BehaviorState::Running
    }
}
