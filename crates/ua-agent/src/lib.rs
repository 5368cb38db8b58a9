//! `ua-agent`: NPC state and storage for the `rust_ua` decision engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`npc`]     | `Npc` (body, behavior slot, status), `NpcStatus`, `TerminalReason` |
//! | [`store`]   | `NpcStore` (agents by id), `NpcRngs` (per-agent RNG)       |
//! | [`builder`] | `NpcStoreBuilder` (fluent construction)                    |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                             |
//!
//! An agent owns at most one behavior at a time.  The slot is emptied the
//! moment the behavior yields an outcome or is cancelled, so a finished
//! behavior is never left attached.

pub mod builder;
pub mod error;
pub mod npc;
pub mod store;


pub use builder::NpcStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use npc::{Npc, NpcStatus, TerminalReason};
pub use store::{NpcRngs, NpcStore};
