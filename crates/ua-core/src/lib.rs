//! `ua-core`: foundational types for the `rust_ua` decision engine.
//!
//! This crate is a dependency of every other `ua-*` crate.  It has no `ua-*`
//! dependencies and minimal external ones (`rand`, `thiserror`, `bitflags`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `UtilityId`, `PlayerId`                        |
//! | [`geo`]     | `Vec3`, distance and `move_towards`                       |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`, `FailurePolicy`          |
//! | [`rng`]     | `AgentRng` (per-agent, seeded)                            |
//! | [`kind`]    | `AgentKind` enum, `KindSet` bitflags                      |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Vec3;
pub use ids::{AgentId, PlayerId, UtilityId};
pub use kind::{AgentKind, KindSet};
pub use rng::AgentRng;
pub use time::{FailurePolicy, SimClock, SimConfig, Tick};
