//! Typed handles for agents, utility nodes, and players.
//!
//! Agents and utilities live in dense `Vec`s, so a handle is just the
//! position in its arena (`id.index()`).  The `Display` form is `AgentId(3)`.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Placeholder for "no such entry"; never handed out by a builder.
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;

            fn try_from(index: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(index).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent (NPC) in the `NpcStore`.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a utility node in the `UtilityGraph` arena.
    pub struct UtilityId(u32);
}

typed_id! {
    /// Index of a player on the session scoreboard.
    pub struct PlayerId(u32);
}
