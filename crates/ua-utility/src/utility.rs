//! A single goal node in the decision graph.

use ua_behavior::{Behavior, Binding};
use ua_core::{AgentId, AgentKind, KindSet, UtilityId};

use crate::{Goal, UtilityError, UtilityResult};

/// A named goal node.
///
/// Nodes are created by [`UtilityGraphBuilder`][crate::UtilityGraphBuilder]
/// and owned by the [`UtilityGraph`][crate::UtilityGraph] for the whole
/// session.  Agents refer to them by [`UtilityId`].
#[derive(Clone, Debug)]
pub struct Utility {
    pub id:       UtilityId,
    pub name:     String,
    /// Eligible for root (re)selection.
    pub is_root:  bool,
    /// Agent kinds allowed to run this node.
    pub kinds:    KindSet,
    /// Executed automatically after this node completes.
    pub next:     Option<UtilityId>,
    /// Static score used by [`StaticPriority`][crate::StaticPriority].
    pub priority: i32,
    pub goal:     Goal,
}

impl Utility {
    #[inline]
    pub fn is_available_for(&self, kind: AgentKind) -> bool {
        self.kinds.allows(kind)
    }

    /// Spawn this node's behavior and configure it for `agent`.
    ///
    /// The returned behavior is configured but not started.
    pub fn instantiate(&self, agent: AgentId) -> UtilityResult<Box<dyn Behavior>> {
        let mut behavior = self
            .goal
            .spawn()
            .ok_or_else(|| UtilityError::Unimplemented { utility: self.name.clone() })?;
        behavior.configure(Binding::new(self.id, agent), &self.goal.params())?;
        Ok(behavior)
    }
}
