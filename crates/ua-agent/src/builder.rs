//! Fluent builder for constructing `NpcStore` + `NpcRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use ua_agent::NpcStoreBuilder;
//! use ua_core::{AgentId, AgentKind, Vec3};
//!
//! let (npcs, rngs) = NpcStoreBuilder::new(/*seed=*/ 42)
//!     .npc(AgentKind::Priest, Vec3::new(5.0, 5.0, 5.0), 2.0)
//!     .npcs(AgentKind::Villager, [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)], 1.5)
//!     .build();
//!
//! assert_eq!(npcs.len(), 3);
//! assert_eq!(rngs.len(), 3);
//! assert_eq!(npcs.get(AgentId(0)).unwrap().kind, AgentKind::Priest);
//! ```
//!
//! Ids are assigned in the order agents are added, starting at zero.

use ua_behavior::Body;
use ua_core::{AgentId, AgentKind, Vec3};

use crate::{Npc, NpcRngs, NpcStore};

pub struct NpcStoreBuilder {
    seed: u64,
    npcs: Vec<Npc>,
}

impl NpcStoreBuilder {
    /// `seed` is the global RNG seed; each agent's stream is derived from it.
    pub fn new(seed: u64) -> Self {
        Self { seed, npcs: Vec::new() }
    }

    /// Add one agent with movement `speed` in world units per second.
    pub fn npc(mut self, kind: AgentKind, position: Vec3, speed: f32) -> Self {
        let id = AgentId(self.npcs.len() as u32);
        self.npcs.push(Npc::new(id, kind, Body::new(position, speed)));
        self
    }

    /// Add one agent of `kind` per position.
    pub fn npcs(mut self, kind: AgentKind, positions: impl IntoIterator<Item = Vec3>, speed: f32) -> Self {
        for p in positions {
            self = self.npc(kind, p, speed);
        }
        self
    }

    pub fn build(self) -> (NpcStore, NpcRngs) {
        let rngs = NpcRngs::new(self.npcs.len(), self.seed);
        (NpcStore::new(self.npcs), rngs)
    }
}
