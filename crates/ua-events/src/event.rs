//! The `Event` trait: what the dispatcher needs to know about a payload.

use std::fmt::Debug;
use std::hash::Hash;

/// A payload routed by [`EventDispatcher`][crate::EventDispatcher].
///
/// Subscribers register per `Kind`; the dispatcher looks the kind up when the
/// event is triggered.  Payloads carry their own parameters, so an event of
/// any arity is just one enum variant.
pub trait Event: Debug + 'static {
    /// Routing key.  Usually a field-less mirror of the event enum.
    type Kind: Copy + Eq + Hash + Debug;

    fn kind(&self) -> Self::Kind;
}
