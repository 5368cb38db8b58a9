//! Agent-kind tags and the eligibility set used by utility nodes.
//!
//! Kinds are a closed enumeration compared by value.  A utility declares the
//! kinds allowed to run it as a [`KindSet`]; eligibility is a single bit test.

use bitflags::bitflags;

/// The kind of an agent, used for utility eligibility checks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    /// Plain townsfolk with no specialised routine.
    #[default]
    Villager,
    Priest,
    Thief,
    Guard,
}

impl AgentKind {
    /// Every kind, in declaration order.
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Villager,
        AgentKind::Priest,
        AgentKind::Thief,
        AgentKind::Guard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Villager => "villager",
            AgentKind::Priest   => "priest",
            AgentKind::Thief    => "thief",
            AgentKind::Guard    => "guard",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Set of agent kinds allowed to run a utility.
    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct KindSet: u8 {
        const VILLAGER = 1 << 0;
        const PRIEST   = 1 << 1;
        const THIEF    = 1 << 2;
        const GUARD    = 1 << 3;
    }
}

impl KindSet {
    /// `true` if `kind` is a member of this set.
    #[inline]
    pub fn allows(self, kind: AgentKind) -> bool {
        self.contains(KindSet::from(kind))
    }

    /// Set containing exactly `kind`.
    #[inline]
    pub fn only(kind: AgentKind) -> Self {
        KindSet::from(kind)
    }
}

impl From<AgentKind> for KindSet {
    fn from(kind: AgentKind) -> Self {
        match kind {
            AgentKind::Villager => KindSet::VILLAGER,
            AgentKind::Priest   => KindSet::PRIEST,
            AgentKind::Thief    => KindSet::THIEF,
            AgentKind::Guard    => KindSet::GUARD,
        }
    }
}

impl FromIterator<AgentKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = AgentKind>>(iter: I) -> Self {
        iter.into_iter().fold(KindSet::empty(), |set, k| set | KindSet::from(k))
    }
}
