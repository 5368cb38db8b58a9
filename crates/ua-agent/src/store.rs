//! Agent storage: `NpcStore` (agent state) and `NpcRngs` (per-agent RNG).
//!
//! Root selection needs `&Npc` (to build the agent view) and
//! `&mut AgentRng` (for random tie-breaks) at the same time.  Keeping the
//! RNGs in their own struct lets both borrows coexist:
//!
//! ```ignore
//! let view = world.npcs.get(agent)?.view();
//! let id = selector.select(&world.graph, &view, world.rngs.get_mut(agent))?;
//! ```

use ua_core::{AgentId, AgentRng};

use crate::{AgentError, AgentResult, Npc};

// ── NpcRngs ───────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, indexed by [`AgentId`].
pub struct NpcRngs {
    seed:  u64,
    inner: Vec<AgentRng>,
}

impl NpcRngs {
    pub(crate) fn new(count: usize, seed: u64) -> Self {
        Self { seed, inner: seeded(count, seed) }
    }

    /// Mutable reference to one agent's RNG.
    ///
    /// # Panics
    ///
    /// If `agent` is out of range.  Ids handed out by the store never are.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    /// Rewind every stream to its initial state for `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.inner = seeded(self.inner.len(), seed);
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn seeded(count: usize, seed: u64) -> Vec<AgentRng> {
    (0..count as u32).map(|i| AgentRng::new(seed, AgentId(i))).collect()
}

// ── NpcStore ──────────────────────────────────────────────────────────────────

/// Every agent in the session, indexed by [`AgentId`].
#[derive(Debug, Default)]
pub struct NpcStore {
    npcs: Vec<Npc>,
}

impl NpcStore {
    pub(crate) fn new(npcs: Vec<Npc>) -> Self {
        Self { npcs }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.npcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.npcs.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Npc> {
        self.npcs.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Npc> {
        self.npcs.get_mut(agent.index())
    }

    pub fn try_get(&self, agent: AgentId) -> AgentResult<&Npc> {
        self.get(agent).ok_or(AgentError::NotFound(agent))
    }

    pub fn try_get_mut(&mut self, agent: AgentId) -> AgentResult<&mut Npc> {
        self.get_mut(agent).ok_or(AgentError::NotFound(agent))
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.npcs.len() as u32).map(AgentId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Npc> {
        self.npcs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Npc> {
        self.npcs.iter_mut()
    }
}
