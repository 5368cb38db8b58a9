//! The validated, immutable utility graph.

use std::collections::HashMap;

use ua_core::{AgentKind, UtilityId};

use crate::{Utility, UtilityError, UtilityResult};

/// Arena of utility nodes indexed by [`UtilityId`].
///
/// Only [`UtilityGraphBuilder::build`][crate::UtilityGraphBuilder::build]
/// creates one, so every `next` link resolves and no successor chain loops.
#[derive(Debug, Default)]
pub struct UtilityGraph {
    pub(crate) nodes:   Vec<Utility>,
    pub(crate) by_name: HashMap<String, UtilityId>,
}

impl UtilityGraph {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: UtilityId) -> Option<&Utility> {
        self.nodes.get(id.index())
    }

    pub fn try_get(&self, id: UtilityId) -> UtilityResult<&Utility> {
        self.get(id).ok_or(UtilityError::NotFound(id))
    }

    pub fn by_name(&self, name: &str) -> Option<&Utility> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    /// Resolve a name to its id.
    pub fn id_of(&self, name: &str) -> UtilityResult<UtilityId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| UtilityError::UnknownName(name.to_owned()))
    }

    /// All nodes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Utility> {
        self.nodes.iter()
    }

    /// Root nodes in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &Utility> {
        self.nodes.iter().filter(|u| u.is_root)
    }

    /// Root nodes an agent of `kind` may run, in declaration order.
    pub fn roots_for(&self, kind: AgentKind) -> impl Iterator<Item = &Utility> {
        self.roots().filter(move |u| u.is_available_for(kind))
    }

    /// `start` followed by every node reached through `next` links.
    ///
    /// Always finite: the builder rejects cyclic chains.
    pub fn chain(&self, start: UtilityId) -> impl Iterator<Item = &Utility> {
        std::iter::successors(self.get(start), |u| u.next.and_then(|n| self.get(n)))
    }
}
