//! Moves agents through the utility graph in response to behavior outcomes.
//!
//! # Transitions
//!
//! | Event              | Action                                                   |
//! |--------------------|----------------------------------------------------------|
//! | `UtilityComplete`  | execute the node's `next`, or reselect a root if none    |
//! | `UtilityFailure`   | reselect a root                                          |
//!
//! Reselection that finds nothing makes the agent terminal and triggers
//! `AgentIdle`.  A utility that cannot be executed (unimplemented goal,
//! rejected parameters, successor not available for the agent's kind) faults
//! the agent, triggers `AgentIdle`, and the error is returned so the
//! dispatcher's failure policy applies.
//!
//! An outcome is acted on only while the agent is waiting on it: not
//! terminal, no behavior attached, and `current_utility` equal to the
//! reported utility.  Anything else is stale and ignored.

use tracing::{debug, error};
use ua_agent::{AgentError, TerminalReason};
use ua_core::{AgentId, UtilityId};
use ua_events::{GameEvent, GameEventKind, StartReason, SubscriptionId};
use ua_utility::UtilityError;

use crate::{GameDispatcher, SimError, SimResult, World};

pub struct UtilityManager;

impl UtilityManager {
    /// Subscribe the complete and failure handlers.
    pub fn install(dispatcher: &mut GameDispatcher) -> [SubscriptionId; 2] {
        let complete = dispatcher.subscribe(GameEventKind::UtilityComplete, |world, d, event| {
            let &GameEvent::UtilityComplete { utility, agent } = event else {
                return Ok(());
            };
            Ok(Self::on_complete(world, d, utility, agent)?)
        });
        let failure = dispatcher.subscribe(GameEventKind::UtilityFailure, |world, d, event| {
            let &GameEvent::UtilityFailure { utility, agent } = event else {
                return Ok(());
            };
            Ok(Self::on_failure(world, d, utility, agent)?)
        });
        [complete, failure]
    }

    /// Spawn `utility`'s behavior, attach it to `agent`, and start it.
    ///
    /// Never completes synchronously: the behavior's outcome arrives on a
    /// later tick.  Triggers `UtilityStarted` on success.
    pub fn execute(
        world:      &mut World,
        dispatcher: &mut GameDispatcher,
        utility:    UtilityId,
        agent:      AgentId,
        reason:     StartReason,
    ) -> SimResult<()> {
        let kind = world.npcs.try_get(agent)?.kind;
        let node = world.graph.try_get(utility)?;
        if !node.is_available_for(kind) {
            return Err(UtilityError::Ineligible { utility: node.name.clone(), kind }.into());
        }
        debug!(%agent, utility = %node.name, ?reason, "executing utility");

        let behavior = match node.instantiate(agent) {
            Ok(b) => b,
            Err(err) => return Self::fault(world, dispatcher, agent, err.into()),
        };
        let tick = world.tick;
        match world.npcs.try_get_mut(agent)?.attach(utility, behavior, tick) {
            Ok(()) => {}
            Err(err @ AgentError::Behavior(_)) => {
                return Self::fault(world, dispatcher, agent, err.into());
            }
            Err(err) => return Err(err.into()),
        }

        dispatcher.trigger(world, GameEvent::UtilityStarted { utility, agent, reason })?;
        Ok(())
    }

    /// Pick a root for `agent` and execute it.
    pub fn reselect(world: &mut World, dispatcher: &mut GameDispatcher, agent: AgentId) -> SimResult<()> {
        let view = world.npcs.try_get(agent)?.view();
        let choice = world.selector.select(&world.graph, &view, world.rngs.get_mut(agent));
        match choice {
            Ok(utility) => Self::execute(world, dispatcher, utility, agent, StartReason::Reselected),
            Err(UtilityError::NoEligibleRoot { kind, .. }) => {
                error!(%agent, %kind, "no eligible root utility, agent stops");
                if let Some(npc) = world.npcs.get_mut(agent) {
                    npc.set_terminal(TerminalReason::NoEligibleRoot);
                }
                dispatcher.trigger(world, GameEvent::AgentIdle { agent })?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    fn on_complete(
        world:      &mut World,
        dispatcher: &mut GameDispatcher,
        utility:    UtilityId,
        agent:      AgentId,
    ) -> SimResult<()> {
        if !Self::awaiting(world, utility, agent) {
            debug!(%agent, %utility, "stale completion ignored");
            return Ok(());
        }
        let Some(next) = world.graph.try_get(utility)?.next else {
            return Self::reselect(world, dispatcher, agent);
        };
        match Self::execute(world, dispatcher, next, agent, StartReason::Successor) {
            Err(err @ SimError::Utility(UtilityError::Ineligible { .. })) => {
                Self::fault(world, dispatcher, agent, err)
            }
            other => other,
        }
    }

    fn on_failure(
        world:      &mut World,
        dispatcher: &mut GameDispatcher,
        utility:    UtilityId,
        agent:      AgentId,
    ) -> SimResult<()> {
        if !Self::awaiting(world, utility, agent) {
            debug!(%agent, %utility, "stale failure ignored");
            return Ok(());
        }
        debug!(%agent, %utility, "utility failed, reselecting");
        Self::reselect(world, dispatcher, agent)
    }

    fn awaiting(world: &World, utility: UtilityId, agent: AgentId) -> bool {
        world.npcs.get(agent).is_some_and(|npc| {
            !npc.is_terminal() && !npc.is_executing() && npc.current_utility() == Some(utility)
        })
    }

    fn fault(
        world:      &mut World,
        dispatcher: &mut GameDispatcher,
        agent:      AgentId,
        err:        SimError,
    ) -> SimResult<()> {
        error!(%agent, error = %err, "utility could not be executed, agent faulted");
        if let Some(npc) = world.npcs.get_mut(agent) {
            npc.set_terminal(TerminalReason::Faulted(err.to_string()));
        }
        dispatcher.trigger(world, GameEvent::AgentIdle { agent })?;
        Err(err)
    }
}
