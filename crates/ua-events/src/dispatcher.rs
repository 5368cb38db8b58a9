//! FIFO event dispatcher with a single, non-reentrant drain loop.
//!
//! # Drain model
//!
//! ```text
//! trigger(e) ──► no subscribers? ──► dropped (no-op)
//!            └─► push_back(snapshot, e)
//!                 ├─ draining  → return (the active loop will reach it)
//!                 └─ idle      → drain: pop_front until the queue is empty
//! ```
//!
//! Handlers receive `&mut EventDispatcher` and may trigger further events,
//! subscribe, or unsubscribe.  Triggers from inside a handler only enqueue;
//! they run after every event that was already queued, never inline.  The
//! subscriber list is snapshotted when an event is triggered, so changes made
//! during a drain affect only events triggered afterwards.
//!
//! The drain loop holds a [`DrainFrame`] guard; dropping it (normal return,
//! propagated error, or a panicking handler) releases the draining flag.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, trace, warn};
use ua_core::FailurePolicy;

use crate::{Event, EventError, EventResult};

#[cfg(feature = "fx-hash")]
type KindMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type KindMap<K, V> = std::collections::HashMap<K, V>;

/// Error type handlers may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Return type of every handler.
pub type HandlerResult = Result<(), BoxError>;

/// A subscribed callback.
///
/// `C` is the mutable context the owner passes to [`EventDispatcher::trigger`]
/// (for the simulation, the `World`).
pub type Handler<E, C> =
    dyn Fn(&mut C, &mut EventDispatcher<E, C>, &E) -> HandlerResult + Send + Sync;

/// Token returned by [`EventDispatcher::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct SubscriptionId(pub u64);

/// Running counters, mostly for tests and diagnostics.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct DispatchStats {
    /// Events accepted into the queue.
    pub triggered:        u64,
    /// Events dropped because nobody was subscribed to their kind.
    pub dropped:          u64,
    /// Events whose handlers all ran.
    pub dispatched:       u64,
    /// Handler invocations that returned an error.
    pub handler_failures: u64,
    /// Deepest the queue has been.
    pub max_depth:        usize,
}

struct Subscriber<E: Event, C> {
    id:      SubscriptionId,
    handler: Arc<Handler<E, C>>,
}

/// An event plus the handlers subscribed to its kind when it was triggered.
struct QueuedEvent<E: Event, C> {
    handlers: Vec<Arc<Handler<E, C>>>,
    event:    E,
}

/// Ordered, reentrancy-safe publish/subscribe bus.
///
/// One instance is owned per session; there is no global.  Call
/// [`reset`](Self::reset) at session boundaries.
pub struct EventDispatcher<E: Event, C> {
    subscribers:       KindMap<E::Kind, Vec<Subscriber<E, C>>>,
    queue:             VecDeque<QueuedEvent<E, C>>,
    draining:          bool,
    frame_open:        bool,
    generation:        u64,
    next_subscription: u64,
    policy:            FailurePolicy,
    stats:             DispatchStats,
}

impl<E: Event, C> EventDispatcher<E, C> {
    pub fn new() -> Self {
        Self::with_policy(FailurePolicy::default())
    }

    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self {
            subscribers:       KindMap::default(),
            queue:             VecDeque::new(),
            draining:          false,
            frame_open:        false,
            generation:        0,
            next_subscription: 0,
            policy,
            stats:             DispatchStats::default(),
        }
    }

    // ── Subscription ──────────────────────────────────────────────────────

    /// Register `handler` for events of `kind`.
    ///
    /// Handlers for the same kind run in subscription order.
    pub fn subscribe<F>(&mut self, kind: E::Kind, handler: F) -> SubscriptionId
    where
        F: Fn(&mut C, &mut EventDispatcher<E, C>, &E) -> HandlerResult + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers
            .entry(kind)
            .or_default()
            .push(Subscriber { id, handler: Arc::new(handler) });
        trace!(?kind, subscription = id.0, "subscribed");
        id
    }

    /// Remove a subscription.  Returns `false` if it was not registered for
    /// `kind`.
    ///
    /// Events already queued keep the handler they captured.
    pub fn unsubscribe(&mut self, kind: E::Kind, id: SubscriptionId) -> bool {
        let Some(subs) = self.subscribers.get_mut(&kind) else {
            return false;
        };
        let before = subs.len();
        subs.retain(|s| s.id != id);
        let removed = subs.len() != before;
        if subs.is_empty() {
            self.subscribers.remove(&kind);
        }
        removed
    }

    pub fn subscriber_count(&self, kind: E::Kind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }

    // ── Triggering ────────────────────────────────────────────────────────

    /// Queue `event` and, unless a drain is already running, drain the queue.
    ///
    /// When called from inside a handler this only enqueues; the caller must
    /// not assume the event's handlers have run when this returns.
    ///
    /// Errors only under [`FailurePolicy::Propagate`].
    pub fn trigger(&mut self, ctx: &mut C, event: E) -> EventResult<()> {
        let kind = event.kind();
        let handlers: Vec<Arc<Handler<E, C>>> = match self.subscribers.get(&kind) {
            Some(subs) if !subs.is_empty() => {
                subs.iter().map(|s| Arc::clone(&s.handler)).collect()
            }
            _ => {
                self.stats.dropped += 1;
                trace!(?kind, "no subscribers, event dropped");
                return Ok(());
            }
        };

        self.stats.triggered += 1;
        self.queue.push_back(QueuedEvent { handlers, event });
        self.stats.max_depth = self.stats.max_depth.max(self.queue.len());

        if self.draining || self.frame_open {
            trace!(?kind, depth = self.queue.len(), "queued behind active drain");
            return Ok(());
        }
        self.drain(ctx)
    }

    /// Flush anything left in the queue (e.g. after a propagated failure).
    pub fn flush(&mut self, ctx: &mut C) -> EventResult<()> {
        if self.draining || self.frame_open || self.queue.is_empty() {
            return Ok(());
        }
        self.drain(ctx)
    }

    fn drain(&mut self, ctx: &mut C) -> EventResult<()> {
        let mut frame = DrainFrame::open(self);
        frame.dispatcher.drain_queue(ctx)
    }

    fn drain_queue(&mut self, ctx: &mut C) -> EventResult<()> {
        let mut generation = self.generation;
        'events: while let Some(queued) = self.queue.pop_front() {
            let kind = queued.event.kind();
            for handler in &queued.handlers {
                let outcome = (**handler)(ctx, self, &queued.event);

                if self.generation != generation {
                    // Only events triggered after the reset are left.
                    debug!(?kind, pending = self.queue.len(), "dispatcher reset inside a handler");
                    generation = self.generation;
                    self.draining = true;
                    continue 'events;
                }

                if let Err(source) = outcome {
                    self.stats.handler_failures += 1;
                    match self.policy {
                        FailurePolicy::Isolate => {
                            warn!(?kind, error = %source, "event handler failed, continuing drain");
                        }
                        FailurePolicy::Propagate => {
                            return Err(EventError::Handler {
                                kind: format!("{kind:?}"),
                                source,
                            });
                        }
                    }
                }
            }
            self.stats.dispatched += 1;
        }
        Ok(())
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Drop every pending event and release the draining flag.
    ///
    /// Subscribers are kept.  Called from inside a handler, the drain running
    /// further up the stack skips the remaining handlers of the current event
    /// and abandons everything queued before the reset.  Events the handler
    /// triggers after calling `reset` are still only queued; that same drain
    /// runs them once the handler returns.
    pub fn reset(&mut self) {
        let discarded = self.queue.len();
        self.queue.clear();
        self.draining = false;
        self.generation = self.generation.wrapping_add(1);
        debug!(discarded, "event dispatcher reset");
    }

    // ── Introspection ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_draining(&self) -> bool {
        self.draining
    }

    /// Number of events waiting in the queue.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    #[inline]
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }
}

/// Marks a drain loop as running for as long as it is alive.
struct DrainFrame<'a, E: Event, C> {
    dispatcher: &'a mut EventDispatcher<E, C>,
}

impl<'a, E: Event, C> DrainFrame<'a, E, C> {
    fn open(dispatcher: &'a mut EventDispatcher<E, C>) -> Self {
        dispatcher.draining = true;
        dispatcher.frame_open = true;
        DrainFrame { dispatcher }
    }
}

impl<E: Event, C> Drop for DrainFrame<'_, E, C> {
    fn drop(&mut self) {
        self.dispatcher.draining = false;
        self.dispatcher.frame_open = false;
    }
}

impl<E: Event, C> Default for EventDispatcher<E, C> {
    fn default() -> Self {
        Self::new()
    }
}
