//! `ua-behavior`: multi-tick behaviors that carry out a utility's work.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`model`]     | `Behavior` trait                                               |
//! | [`lifecycle`] | `Lifecycle`, `BehaviorState`: exactly-once outcome guard      |
//! | [`outcome`]   | `Binding`, `Outcome`, `OutcomeKind` (→ `GameEvent`)            |
//! | [`params`]    | `BehaviorParams`: destination, waypoints, duration, speed     |
//! | [`body`]      | `Body` (position + speed), `TickContext<'a>`                   |
//! | [`move_to`]   | `MoveBehavior`: walk through waypoints                        |
//! | [`wait`]      | `WaitBehavior`: complete after a fixed time                   |
//! | [`noop`]      | `DoNothingBehavior`: placeholder that never completes         |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Design notes
//!
//! A behavior never blocks and never suspends.  Its progress lives in plain
//! fields (remaining waypoints, elapsed time) that [`Behavior::tick`] advances
//! once per simulation tick.  Outcomes are returned to the caller rather than
//! pushed onto the event dispatcher directly: the simulation converts them to
//! `GameEvent`s and triggers them in agent order, which keeps each tick
//! deterministic.

pub mod body;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod move_to;
pub mod noop;
pub mod outcome;
pub mod params;
pub mod wait;


pub use body::{Body, TickContext};
pub use error::{BehaviorError, BehaviorResult};
pub use lifecycle::{BehaviorState, Lifecycle};
pub use model::Behavior;
pub use move_to::MoveBehavior;
pub use noop::DoNothingBehavior;
pub use outcome::{Binding, Outcome, OutcomeKind};
pub use params::BehaviorParams;
pub use wait::WaitBehavior;
