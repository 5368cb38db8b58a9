//! `ua-sim`: session orchestration for the `rust_ua` decision engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Step   : tick each executing agent's behavior in ascending AgentId
//!               order; cancel behaviors past the watchdog limit.
//!   ② Report : trigger each collected outcome as UtilityComplete /
//!               UtilityFailure.  UtilityManager handles them:
//!                 Complete → execute `next`, or reselect a root
//!                 Failure  → reselect a root
//!                 nothing eligible → agent terminal, AgentIdle
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`sim`]      | `Sim`: tick loop, assign/interrupt, scores, session reset  |
//! | [`builder`]  | `SimBuilder`                                               |
//! | [`manager`]  | `UtilityManager`: execute, reselect, outcome handlers      |
//! | [`world`]    | `World` handler context, `GameDispatcher` alias            |
//! | [`score`]    | `Scoreboard`, `Player`                                     |
//! | [`observer`] | `SimObserver`, `NoopObserver`                              |
//! | [`error`]    | `SimError`, `SimResult<T>`                                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ua_agent::NpcStoreBuilder;
//! use ua_core::{AgentKind, SimConfig, Vec3};
//! use ua_sim::{NoopObserver, SimBuilder};
//!
//! let (npcs, rngs) = NpcStoreBuilder::new(0)
//!     .npc(AgentKind::Priest, Vec3::new(5.0, 5.0, 5.0), 2.0)
//!     .build();
//! let mut sim = SimBuilder::new(SimConfig::default(), graph, npcs, rngs).build()?;
//! sim.start_all()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod manager;
pub mod observer;
pub mod score;
pub mod sim;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use manager::UtilityManager;
pub use observer::{NoopObserver, SimObserver};
pub use score::{Player, Scoreboard};
pub use sim::Sim;
pub use world::{GameDispatcher, World};
