//! `ua-utility`: the decision graph: goal nodes, successor chains, and root
//! selection.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`utility`] | `Utility` node, `instantiate` → configured behavior             |
//! | [`goal`]    | `Goal` (built-in goals + `Custom`), `BehaviorFactory`           |
//! | [`builder`] | `UtilityDef`, `UtilityGraphBuilder` (name resolution, cycle check) |
//! | [`graph`]   | `UtilityGraph` arena, roots, successor chains                   |
//! | [`scoring`] | `RootScorer`, `FirstMatch`, `StaticPriority`, `RootSelector`, `AgentView` |
//! | [`error`]   | `UtilityError`, `UtilityResult<T>`                              |
//!
//! The graph is built once per session and read-only afterwards.  Driving
//! agents through it (executing, following `next`, reselecting) is done by
//! `ua-sim`'s utility manager.

pub mod builder;
pub mod error;
pub mod goal;
pub mod graph;
pub mod scoring;
pub mod utility;

#[cfg(test)]
mod tests;

pub use builder::{UtilityDef, UtilityGraphBuilder};
pub use error::{UtilityError, UtilityResult};
pub use goal::{BehaviorFactory, Goal};
pub use graph::UtilityGraph;
pub use scoring::{AgentView, FirstMatch, RootScorer, RootSelector, StaticPriority, TieBreak};
pub use utility::Utility;
