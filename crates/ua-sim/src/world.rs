//! Everything event handlers may touch, bundled as the dispatcher context.

use ua_agent::{NpcRngs, NpcStore};
use ua_core::Tick;
use ua_events::{EventDispatcher, GameEvent};
use ua_utility::{RootSelector, UtilityGraph};

use crate::Scoreboard;

/// The session's dispatcher: game events, handled against the [`World`].
pub type GameDispatcher = EventDispatcher<GameEvent, World>;

/// Mutable session state passed to every handler.
///
/// Fields are disjoint so handlers can borrow, say, `graph` and `rngs` at the
/// same time.
pub struct World {
    pub graph:      UtilityGraph,
    pub npcs:       NpcStore,
    pub rngs:       NpcRngs,
    pub selector:   RootSelector,
    pub scoreboard: Scoreboard,
    /// Tick being processed.  Stamped on behaviors as their start tick.
    pub tick:       Tick,
}
