//! Fluent builder for constructing a [`Sim`].

use tracing::debug;
use ua_agent::{NpcRngs, NpcStore};
use ua_core::{FailurePolicy, SimConfig, Tick};
use ua_events::EventDispatcher;
use ua_utility::{RootSelector, UtilityGraph};

use crate::{Scoreboard, Sim, SimError, SimResult, UtilityManager, World};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick duration, total ticks, seed, …
/// - [`UtilityGraph`]: from [`ua_utility::UtilityGraphBuilder`]
/// - [`NpcStore`] + [`NpcRngs`]: from [`ua_agent::NpcStoreBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                              |
/// |-----------------------|--------------------------------------|
/// | `.selector(s)`        | `RootSelector::default()` (first match) |
/// | `.failure_policy(p)`  | `config.failure_policy`              |
/// | `.players(names)`     | no players                           |
/// | `.winning_score(n)`   | none (only `declare_winner` ends the game) |
///
/// # Example
///
/// ```rust,ignore
/// let (npcs, rngs) = NpcStoreBuilder::new(seed).npc(AgentKind::Priest, start, 2.0).build();
/// let mut sim = SimBuilder::new(config, graph, npcs, rngs)
///     .players(["Alice"])
///     .build()?;
/// sim.start_all()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:        SimConfig,
    graph:         UtilityGraph,
    npcs:          NpcStore,
    rngs:          NpcRngs,
    selector:      Option<RootSelector>,
    policy:        Option<FailurePolicy>,
    players:       Vec<String>,
    winning_score: Option<i64>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, graph: UtilityGraph, npcs: NpcStore, rngs: NpcRngs) -> Self {
        Self {
            config,
            graph,
            npcs,
            rngs,
            selector:      None,
            policy:        None,
            players:       Vec::new(),
            winning_score: None,
        }
    }

    /// Root scoring and tie-break rule used for reselection.
    pub fn selector(mut self, selector: RootSelector) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Override `config.failure_policy` for the session dispatcher.
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Register players in order; their ids start at zero.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn winning_score(mut self, score: i64) -> Self {
        self.winning_score = Some(score);
        self
    }

    /// Validate inputs, install the utility manager, and return a
    /// ready-to-start [`Sim`].
    ///
    /// The per-agent RNG streams are reseeded from `config.seed`.
    pub fn build(mut self) -> SimResult<Sim> {
        self.config.validate()?;

        if self.rngs.len() != self.npcs.len() {
            return Err(SimError::AgentCountMismatch {
                expected: self.npcs.len(),
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }
        if self.rngs.seed() != self.config.seed {
            debug!(store_seed = self.rngs.seed(), config_seed = self.config.seed, "reseeding agent RNGs");
        }
        self.rngs.reseed(self.config.seed);

        if let Some(policy) = self.policy {
            self.config.failure_policy = policy;
        }
        let mut dispatcher = EventDispatcher::with_policy(self.config.failure_policy);
        UtilityManager::install(&mut dispatcher);

        let mut scoreboard = Scoreboard::new(self.winning_score);
        for name in self.players {
            scoreboard.add_player(name);
        }

        debug!(
            agents = self.npcs.len(),
            utilities = self.graph.len(),
            policy = ?self.config.failure_policy,
            "simulation built"
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            world: World {
                graph: self.graph,
                npcs: self.npcs,
                rngs: self.rngs,
                selector: self.selector.unwrap_or_default(),
                scoreboard,
                tick: Tick::ZERO,
            },
            dispatcher,
        })
    }
}
