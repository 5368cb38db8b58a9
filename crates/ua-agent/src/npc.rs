//! A single autonomous agent and the behavior slot it owns.
//!
//! # Status
//!
//! ```text
//!            attach                 outcome / cancel
//!   Idle ─────────────► Executing ───────────────────► Idle
//!    │                                                   │
//!    └──────────── set_terminal ──► Terminal ◄───────────┘
//! ```
//!
//! After an outcome the agent is `Idle` but still remembers
//! `current_utility`, so the transition handler can tell a fresh report from
//! a stale one.

use tracing::trace;
use ua_behavior::{Behavior, Body, Outcome, TickContext};
use ua_core::{AgentId, AgentKind, Tick, UtilityId};
use ua_utility::AgentView;

use crate::{AgentError, AgentResult};

/// Why an agent stopped acting for the rest of the session.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TerminalReason {
    /// Reselection found no root utility for the agent's kind.
    NoEligibleRoot,
    /// A utility could not be executed (unimplemented goal, bad parameters).
    Faulted(String),
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum NpcStatus {
    #[default]
    Idle,
    Executing,
    Terminal(TerminalReason),
}

pub struct Npc {
    pub id:   AgentId,
    pub kind: AgentKind,
    pub body: Body,

    spawn:           Body,
    current_utility: Option<UtilityId>,
    behavior:        Option<Box<dyn Behavior>>,
    status:          NpcStatus,
    started_tick:    Option<Tick>,
}

impl Npc {
    pub fn new(id: AgentId, kind: AgentKind, body: Body) -> Self {
        Self {
            id,
            kind,
            body,
            spawn: body,
            current_utility: None,
            behavior: None,
            status: NpcStatus::Idle,
            started_tick: None,
        }
    }

    // ── Behavior slot ─────────────────────────────────────────────────────

    /// Start a configured behavior for `utility` in the agent's slot.
    ///
    /// Fails if a behavior is already running or the agent is terminal.  If
    /// the behavior refuses to start it is dropped and the slot stays empty.
    pub fn attach(
        &mut self,
        utility: UtilityId,
        mut behavior: Box<dyn Behavior>,
        tick: Tick,
    ) -> AgentResult<()> {
        if let NpcStatus::Terminal(_) = self.status {
            return Err(AgentError::Terminal(self.id));
        }
        if self.behavior.is_some() {
            return Err(AgentError::Busy {
                agent:   self.id,
                utility: self.current_utility.unwrap_or(UtilityId::INVALID),
            });
        }
        behavior.execute()?;
        trace!(agent = %self.id, %utility, behavior = behavior.name(), %tick, "behavior attached");
        self.behavior = Some(behavior);
        self.current_utility = Some(utility);
        self.status = NpcStatus::Executing;
        self.started_tick = Some(tick);
        Ok(())
    }

    /// Empty the slot without reporting anything.
    pub fn detach(&mut self) -> Option<Box<dyn Behavior>> {
        let behavior = self.behavior.take();
        self.current_utility = None;
        self.started_tick = None;
        if self.status == NpcStatus::Executing {
            self.status = NpcStatus::Idle;
        }
        behavior
    }

    /// Advance the running behavior by one tick.
    ///
    /// The behavior is dropped as soon as it yields its outcome.
    pub fn tick_behavior(&mut self, tick: Tick, delta_secs: f32, arrival_epsilon: f32) -> Option<Outcome> {
        let behavior = self.behavior.as_mut()?;
        let mut ctx = TickContext::new(tick, delta_secs, arrival_epsilon, &mut self.body);
        let outcome = behavior.tick(&mut ctx)?;
        self.release();
        Some(outcome)
    }

    /// Cancel the running behavior.  `None` if nothing was running.
    pub fn cancel_behavior(&mut self) -> Option<Outcome> {
        let outcome = self.behavior.as_mut()?.cancel();
        self.release();
        outcome
    }

    fn release(&mut self) {
        self.behavior = None;
        self.started_tick = None;
        self.status = NpcStatus::Idle;
    }

    /// Stop the agent for good.  Any running behavior is dropped silently.
    pub fn set_terminal(&mut self, reason: TerminalReason) {
        self.behavior = None;
        self.current_utility = None;
        self.started_tick = None;
        self.status = NpcStatus::Terminal(reason);
    }

    /// Back to the spawn state: idle, no behavior, spawn position and speed.
    pub fn reset(&mut self) {
        self.behavior = None;
        self.current_utility = None;
        self.started_tick = None;
        self.status = NpcStatus::Idle;
        self.body = self.spawn;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn status(&self) -> &NpcStatus {
        &self.status
    }

    #[inline]
    pub fn is_executing(&self) -> bool {
        self.behavior.is_some()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, NpcStatus::Terminal(_))
    }

    /// The utility running now, or the one whose outcome is awaiting its
    /// transition.
    #[inline]
    pub fn current_utility(&self) -> Option<UtilityId> {
        self.current_utility
    }

    pub fn behavior(&self) -> Option<&dyn Behavior> {
        self.behavior.as_deref()
    }

    /// Ticks the current behavior has been running at `now`.
    pub fn running_for(&self, now: Tick) -> Option<u64> {
        self.started_tick.map(|t| now.since(t))
    }

    pub fn view(&self) -> AgentView {
        AgentView { id: self.id, kind: self.kind, position: self.body.position }
    }
}

impl std::fmt::Debug for Npc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Npc")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("body", &self.body)
            .field("status", &self.status)
            .field("current_utility", &self.current_utility)
            .field("behavior", &self.behavior.as_ref().map(|b| b.name()))
            .finish()
    }
}
