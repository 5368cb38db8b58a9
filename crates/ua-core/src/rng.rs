//! Seeded random streams, one per agent.
//!
//! An agent's stream depends only on the session seed and its own id:
//!
//!   stream_seed(seed, id) = seed XOR (id * GOLDEN_GAMMA)
//!
//! so random tie-breaks replay exactly for a fixed seed, and agents appended
//! to a store never shift the streams of agents already in it.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// Odd 64-bit constant (golden ratio × 2⁶⁴) spreading neighbouring ids apart.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

#[inline]
fn stream_seed(session_seed: u64, agent: AgentId) -> u64 {
    session_seed ^ u64::from(agent.0).wrapping_mul(GOLDEN_GAMMA)
}

/// One agent's random stream.
pub struct AgentRng {
    agent: AgentId,
    rng:   SmallRng,
}

impl AgentRng {
    pub fn new(session_seed: u64, agent: AgentId) -> Self {
        AgentRng { agent, rng: SmallRng::seed_from_u64(stream_seed(session_seed, agent)) }
    }

    /// The agent this stream belongs to.
    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// Raw access for `rand` distributions.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Uniform pick from `items`; `None` when empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

impl std::fmt::Debug for AgentRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRng").field("agent", &self.agent).finish_non_exhaustive()
    }
}
