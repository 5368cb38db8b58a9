//! Declarative construction of a [`UtilityGraph`].
//!
//! # Usage
//!
//! ```rust
//! use ua_core::{KindSet, Vec3};
//! use ua_utility::{Goal, UtilityDef, UtilityGraphBuilder};
//!
//! let graph = UtilityGraphBuilder::new()
//!     .add(UtilityDef::root("priest-start", Goal::move_to(Vec3::ZERO))
//!         .kinds(KindSet::PRIEST)
//!         .next("priest-pray"))
//!     .add(UtilityDef::new("priest-pray", Goal::move_to(Vec3::ZERO))
//!         .kinds(KindSet::PRIEST))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.len(), 2);
//! assert_eq!(graph.roots().count(), 1);
//! ```
//!
//! Successors are named, so nodes may be declared in any order.  `build`
//! assigns ids in declaration order and rejects:
//!
//! - duplicate names,
//! - `next` names that were never declared,
//! - successor chains that loop back on themselves.

use std::collections::HashMap;

use tracing::{debug, warn};
use ua_core::{KindSet, UtilityId};

use crate::{Goal, Utility, UtilityError, UtilityGraph, UtilityResult};

// ── UtilityDef ────────────────────────────────────────────────────────────────

/// Declaration of one node, before successor names are resolved.
#[derive(Clone, Debug)]
pub struct UtilityDef {
    name:     String,
    is_root:  bool,
    kinds:    KindSet,
    next:     Option<String>,
    priority: i32,
    goal:     Goal,
}

impl UtilityDef {
    /// A non-root node.  Available to every kind until narrowed with
    /// [`kinds`](Self::kinds).
    pub fn new(name: impl Into<String>, goal: Goal) -> Self {
        Self {
            name: name.into(),
            is_root: false,
            kinds: KindSet::all(),
            next: None,
            priority: 0,
            goal,
        }
    }

    /// A node eligible for root selection.
    pub fn root(name: impl Into<String>, goal: Goal) -> Self {
        Self { is_root: true, ..Self::new(name, goal) }
    }

    pub fn kinds(mut self, kinds: KindSet) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn next(mut self, successor: impl Into<String>) -> Self {
        self.next = Some(successor.into());
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

// ── UtilityGraphBuilder ───────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct UtilityGraphBuilder {
    defs: Vec<UtilityDef>,
}

impl UtilityGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, def: UtilityDef) -> Self {
        self.defs.push(def);
        self
    }

    /// Validate the declarations and produce the graph.
    pub fn build(self) -> UtilityResult<UtilityGraph> {
        // ── Assign ids ────────────────────────────────────────────────────
        let mut by_name: HashMap<String, UtilityId> = HashMap::with_capacity(self.defs.len());
        for (i, def) in self.defs.iter().enumerate() {
            let id = UtilityId(i as u32);
            if by_name.insert(def.name.clone(), id).is_some() {
                return Err(UtilityError::DuplicateName(def.name.clone()));
            }
        }

        // ── Resolve successors ────────────────────────────────────────────
        let mut nodes = Vec::with_capacity(self.defs.len());
        for (i, def) in self.defs.into_iter().enumerate() {
            let next = match &def.next {
                None => None,
                Some(to) => Some(*by_name.get(to).ok_or_else(|| UtilityError::UnknownSuccessor {
                    from: def.name.clone(),
                    to:   to.clone(),
                })?),
            };
            if def.is_root && def.kinds.is_empty() {
                warn!(utility = %def.name, "root utility has no eligible agent kinds");
            }
            nodes.push(Utility {
                id: UtilityId(i as u32),
                name: def.name,
                is_root: def.is_root,
                kinds: def.kinds,
                next,
                priority: def.priority,
                goal: def.goal,
            });
        }

        check_acyclic(&nodes)?;

        debug!(
            nodes = nodes.len(),
            roots = nodes.iter().filter(|u| u.is_root).count(),
            "utility graph built"
        );
        Ok(UtilityGraph { nodes, by_name })
    }
}

// ── Cycle detection ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Every node has at most one successor, so each walk is a simple path that
/// either ends, joins an already-checked path, or revisits itself.
fn check_acyclic(nodes: &[Utility]) -> UtilityResult<()> {
    let mut marks = vec![Mark::Unvisited; nodes.len()];

    for start in 0..nodes.len() {
        let mut path: Vec<usize> = Vec::new();
        let mut cursor = Some(start);

        while let Some(i) = cursor {
            match marks[i] {
                Mark::Done => break,
                Mark::OnPath => {
                    let from = path.iter().position(|&p| p == i).unwrap_or(0);
                    let mut names: Vec<String> =
                        path[from..].iter().map(|&p| nodes[p].name.clone()).collect();
                    names.push(nodes[i].name.clone());
                    return Err(UtilityError::Cycle { path: names });
                }
                Mark::Unvisited => {
                    marks[i] = Mark::OnPath;
                    path.push(i);
                    cursor = nodes[i].next.map(UtilityId::index);
                }
            }
        }

        for i in path {
            marks[i] = Mark::Done;
        }
    }
    Ok(())
}
