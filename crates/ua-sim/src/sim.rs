//! The `Sim` struct and its tick loop.

use tracing::{debug, info, warn};
use ua_agent::{AgentError, Npc};
use ua_behavior::Outcome;
use ua_core::{AgentId, FailurePolicy, PlayerId, SimClock, SimConfig, Tick, UtilityId};
use ua_events::{
    DispatchStats, EventDispatcher, GameEvent, GameEventKind, HandlerResult, StartReason,
    SubscriptionId,
};
use ua_utility::UtilityGraph;

use crate::{GameDispatcher, Scoreboard, SimError, SimObserver, SimResult, UtilityManager, World};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The session runner.
///
/// Each tick:
///
/// 1. **Step**: every executing agent's behavior is ticked once, in
///    ascending `AgentId` order.  Behaviors past the watchdog limit (if
///    configured) are cancelled instead.
/// 2. **Report**: the outcomes collected in step 1 are triggered on the
///    dispatcher in the same order.  Handlers attach successor or reselected
///    behaviors, which first tick on the following tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Session configuration (tick duration, total ticks, seed, …).
    pub config: SimConfig,

    pub clock: SimClock,

    /// Handler context: graph, agents, RNGs, selector, scores.
    pub world: World,

    pub(crate) dispatcher: GameDispatcher,
}

impl Sim {
    // ── Agent control ─────────────────────────────────────────────────────

    /// Execute `utility` on an idle agent.
    ///
    /// Fails if the agent is executing, terminal, or not of a kind the
    /// utility allows.
    pub fn assign(&mut self, agent: AgentId, utility: UtilityId) -> SimResult<()> {
        let npc = self.world.npcs.try_get(agent)?;
        if npc.is_terminal() {
            return Err(AgentError::Terminal(agent).into());
        }
        if npc.is_executing() {
            return Err(AgentError::Busy {
                agent,
                utility: npc.current_utility().unwrap_or(UtilityId::INVALID),
            }
            .into());
        }
        self.world.tick = self.clock.current_tick;
        UtilityManager::execute(&mut self.world, &mut self.dispatcher, utility, agent, StartReason::Assigned)
    }

    /// Start the session: announce every player's score and pick a root for
    /// every idle agent.
    ///
    /// An agent whose root cannot be executed is faulted and skipped under
    /// [`FailurePolicy::Isolate`]; under `Propagate` the error is returned
    /// and the remaining agents are left idle.
    pub fn start_all(&mut self) -> SimResult<()> {
        self.world.tick = self.clock.current_tick;
        let scores: Vec<(PlayerId, i64)> =
            self.world.scoreboard.players().iter().map(|p| (p.id, p.score)).collect();
        for (player, score) in scores {
            self.dispatcher.trigger(&mut self.world, GameEvent::ScoreChanged { player, score })?;
        }

        let idle: Vec<AgentId> = self
            .world
            .npcs
            .iter()
            .filter(|n| !n.is_executing() && !n.is_terminal())
            .map(|n| n.id)
            .collect();
        info!(agents = idle.len(), tick = %self.clock.current_tick, "session started");
        for agent in idle {
            match UtilityManager::reselect(&mut self.world, &mut self.dispatcher, agent) {
                Ok(()) => {}
                Err(err @ SimError::Event(_)) => return Err(err),
                Err(err) if self.config.failure_policy == FailurePolicy::Propagate => return Err(err),
                Err(err) => debug!(%agent, error = %err, "agent skipped at session start"),
            }
        }
        Ok(())
    }

    /// Cancel the agent's running behavior.  The resulting failure sends the
    /// agent through root reselection.
    ///
    /// Returns `false` if nothing was running.
    pub fn interrupt(&mut self, agent: AgentId) -> SimResult<bool> {
        let Some(outcome) = self.world.npcs.try_get_mut(agent)?.cancel_behavior() else {
            return Ok(false);
        };
        debug!(%agent, utility = %outcome.binding.utility, "behavior interrupted");
        self.world.tick = self.clock.current_tick;
        self.dispatcher.trigger(&mut self.world, outcome.into())?;
        Ok(true)
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`, or until the game
    /// is over.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() && !self.is_game_over() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Process one tick and advance the clock.
    ///
    /// Under [`FailurePolicy::Propagate`] the first handler error is returned
    /// after the whole tick has run.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        self.world.tick = now;
        observer.on_tick_start(now);

        // Every collected outcome is reported even if an earlier one fails:
        // its agent has already released the behavior.
        let mut first_error = None;
        for outcome in self.step_behaviors(now) {
            observer.on_outcome(now, &outcome);
            let agent = outcome.binding.agent;
            if let Err(err) = self.dispatcher.trigger(&mut self.world, outcome.into()) {
                if first_error.is_some() {
                    warn!(%agent, error = %err, "further outcome handler failure this tick");
                } else {
                    first_error = Some(err);
                }
            }
        }

        observer.on_tick_end(now, &self.world.npcs);
        self.clock.advance();
        match first_error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn step_behaviors(&mut self, now: Tick) -> Vec<Outcome> {
        let delta = self.clock.delta_secs();
        let epsilon = self.config.arrival_epsilon;
        let timeout = self.config.behavior_timeout_ticks;

        self.world
            .npcs
            .iter_mut()
            .filter(|npc| npc.is_executing())
            .filter_map(|npc| match timeout {
                Some(limit) if npc.running_for(now).is_some_and(|t| t >= limit) => {
                    warn!(agent = %npc.id, limit, "behavior timed out, cancelling");
                    npc.cancel_behavior()
                }
                _ => npc.tick_behavior(now, delta, epsilon),
            })
            .collect()
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// Subscribe an application handler to `kind`.
    pub fn subscribe<F>(&mut self, kind: GameEventKind, handler: F) -> SubscriptionId
    where
        F: Fn(&mut World, &mut EventDispatcher<GameEvent, World>, &GameEvent) -> HandlerResult
            + Send
            + Sync
            + 'static,
    {
        self.dispatcher.subscribe(kind, handler)
    }

    pub fn unsubscribe(&mut self, kind: GameEventKind, id: SubscriptionId) -> bool {
        self.dispatcher.unsubscribe(kind, id)
    }

    /// Trigger an application event on the session dispatcher.
    pub fn trigger(&mut self, event: GameEvent) -> SimResult<()> {
        self.dispatcher.trigger(&mut self.world, event)?;
        Ok(())
    }

    #[inline]
    pub fn dispatch_stats(&self) -> DispatchStats {
        self.dispatcher.stats()
    }

    #[inline]
    pub fn pending_events(&self) -> usize {
        self.dispatcher.pending()
    }

    // ── Scores ────────────────────────────────────────────────────────────

    /// Register a player and announce their zero score.
    pub fn add_player(&mut self, name: impl Into<String>) -> SimResult<PlayerId> {
        let player = self.world.scoreboard.add_player(name);
        self.dispatcher.trigger(&mut self.world, GameEvent::ScoreChanged { player, score: 0 })?;
        Ok(player)
    }

    /// Add `delta` to a player's score.  Reaching the winning score ends the
    /// game (at most once per session).
    pub fn add_score(&mut self, player: PlayerId, delta: i64) -> SimResult<i64> {
        let score = self.world.scoreboard.apply(player, delta)?;
        self.dispatcher.trigger(&mut self.world, GameEvent::ScoreChanged { player, score })?;
        if self.world.scoreboard.is_winning(score) {
            self.declare_winner(player)?;
        }
        Ok(score)
    }

    /// End the game with `player` as winner.  Returns `false` if it was
    /// already over; `GameOver` is triggered only the first time.
    pub fn declare_winner(&mut self, player: PlayerId) -> SimResult<bool> {
        if !self.world.scoreboard.set_winner(player)? {
            return Ok(false);
        }
        info!(%player, tick = %self.clock.current_tick, "game over");
        self.dispatcher.trigger(&mut self.world, GameEvent::GameOver { winner: player })?;
        Ok(true)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.world.scoreboard.is_game_over()
    }

    // ── Session ───────────────────────────────────────────────────────────

    /// Return to the state right after building.
    ///
    /// Pending events, scores, the winner, every behavior (dropped without
    /// reporting), agent statuses and positions, RNG streams, and the clock
    /// are reset.  Subscriptions and players are kept.
    pub fn reset_session(&mut self) {
        self.dispatcher.reset();
        self.clock.reset();
        self.world.tick = Tick::ZERO;
        self.world.scoreboard.reset();
        self.world.npcs.iter_mut().for_each(Npc::reset);
        self.world.rngs.reseed(self.config.seed);
        info!(agents = self.world.npcs.len(), "session reset");
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn npc(&self, agent: AgentId) -> Option<&Npc> {
        self.world.npcs.get(agent)
    }

    #[inline]
    pub fn graph(&self) -> &UtilityGraph {
        &self.world.graph
    }

    #[inline]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.world.scoreboard
    }
}
