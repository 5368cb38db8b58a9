//! `ua-events`: ordered, reentrancy-safe event dispatch.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`event`]      | `Event` trait (payload + routing kind)                         |
//! | [`dispatcher`] | `EventDispatcher<E, C>`, `SubscriptionId`, `DispatchStats`     |
//! | [`game`]       | `GameEvent`, `GameEventKind`, `StartReason`                    |
//! | [`error`]      | `EventError`, `EventResult<T>`                                 |
//!
//! # Design notes
//!
//! The dispatcher is generic over the handler context `C` instead of letting
//! handlers reach ambient state.  The owner passes `&mut C` to `trigger`, and
//! the dispatcher forwards it together with `&mut self` to each handler, so a
//! handler can mutate the world and trigger follow-up events without any
//! shared-ownership cells.  Follow-up events are queued, never run inline,
//! which keeps delivery strictly FIFO however deep the trigger chain goes.
//!
//! Handler failures are isolated by default (logged, drain continues); see
//! [`FailurePolicy`](ua_core::FailurePolicy).

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod game;


pub use dispatcher::{BoxError, DispatchStats, EventDispatcher, Handler, HandlerResult, SubscriptionId};
pub use error::{EventError, EventResult};
pub use event::Event;
pub use game::{GameEvent, GameEventKind, StartReason};
pub use ua_core::FailurePolicy;
