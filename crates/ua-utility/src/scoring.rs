//! Root-utility scoring and selection.
//!
//! # Selection rule
//!
//! 1. Keep root nodes whose kind set includes the agent's kind.
//! 2. Score each with the configured [`RootScorer`]; skip non-finite scores.
//! 3. Return the highest score.  Equal scores are resolved by [`TieBreak`].
//!
//! With the default [`FirstMatch`] scorer every candidate scores the same, so
//! the first eligible root in declaration order wins.

use std::fmt;

use tracing::trace;
use ua_core::{AgentId, AgentKind, AgentRng, UtilityId, Vec3};

use crate::{Utility, UtilityError, UtilityGraph, UtilityResult};

/// Read-only snapshot of the agent being scored for.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AgentView {
    pub id:       AgentId,
    pub kind:     AgentKind,
    pub position: Vec3,
}

// ── Scorers ───────────────────────────────────────────────────────────────────

/// Scores a candidate root utility for an agent.  Higher wins.
pub trait RootScorer: Send + Sync {
    fn score(&self, utility: &Utility, agent: &AgentView) -> f32;
}

/// Every candidate scores zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct FirstMatch;

impl RootScorer for FirstMatch {
    fn score(&self, _utility: &Utility, _agent: &AgentView) -> f32 {
        0.0
    }
}

/// Scores by the node's declared `priority`.
#[derive(Copy, Clone, Debug, Default)]
pub struct StaticPriority;

impl RootScorer for StaticPriority {
    fn score(&self, utility: &Utility, _agent: &AgentView) -> f32 {
        utility.priority as f32
    }
}

impl<F> RootScorer for F
where
    F: Fn(&Utility, &AgentView) -> f32 + Send + Sync,
{
    fn score(&self, utility: &Utility, agent: &AgentView) -> f32 {
        self(utility, agent)
    }
}

// ── Selector ──────────────────────────────────────────────────────────────────

/// How equal top scores are resolved.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TieBreak {
    /// Earliest declared node wins.
    #[default]
    FirstDeclared,
    /// Uniform pick using the agent's own RNG, reproducible for a fixed seed.
    Random,
}

pub struct RootSelector {
    scorer:    Box<dyn RootScorer>,
    tie_break: TieBreak,
}

impl RootSelector {
    pub fn new(scorer: impl RootScorer + 'static) -> Self {
        Self { scorer: Box::new(scorer), tie_break: TieBreak::default() }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[inline]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Pick the root utility `agent` should run next.
    pub fn select(
        &self,
        graph: &UtilityGraph,
        agent: &AgentView,
        rng:   &mut AgentRng,
    ) -> UtilityResult<UtilityId> {
        let mut best = f32::NEG_INFINITY;
        let mut tied: Vec<UtilityId> = Vec::new();

        for utility in graph.roots_for(agent.kind) {
            let score = self.scorer.score(utility, agent);
            if !score.is_finite() {
                trace!(utility = %utility.name, score, "non-finite score skipped");
                continue;
            }
            if score > best {
                best = score;
                tied.clear();
                tied.push(utility.id);
            } else if score == best {
                tied.push(utility.id);
            }
        }

        let chosen = match (self.tie_break, tied.len()) {
            (_, 0) => None,
            (TieBreak::Random, n) if n > 1 => rng.choose(&tied).copied(),
            _ => tied.first().copied(),
        };
        chosen.ok_or(UtilityError::NoEligibleRoot { agent: agent.id, kind: agent.kind })
    }
}

impl Default for RootSelector {
    fn default() -> Self {
        Self::new(FirstMatch)
    }
}

impl fmt::Debug for RootSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootSelector")
            .field("tie_break", &self.tie_break)
            .finish_non_exhaustive()
    }
}
