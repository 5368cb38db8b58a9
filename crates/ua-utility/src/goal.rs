//! What a utility asks its agent to do, and how that becomes a behavior.

use std::fmt;
use std::sync::Arc;

use ua_behavior::{Behavior, BehaviorParams, DoNothingBehavior, MoveBehavior, WaitBehavior};
use ua_core::Vec3;

/// Produces fresh, unconfigured behaviors for a [`Goal::Custom`].
///
/// Any `Fn() -> Box<dyn Behavior> + Send + Sync` closure is a factory.
pub trait BehaviorFactory: Send + Sync {
    fn spawn(&self) -> Box<dyn Behavior>;
}

impl<F> BehaviorFactory for F
where
    F: Fn() -> Box<dyn Behavior> + Send + Sync,
{
    fn spawn(&self) -> Box<dyn Behavior> {
        self()
    }
}

/// The work attached to a utility node.
#[derive(Clone)]
pub enum Goal {
    /// Walk to a single point.
    MoveTo { destination: Vec3 },
    /// Walk through several points in order.
    Patrol { waypoints: Vec<Vec3> },
    /// Stand still for `secs` game seconds.
    Wait { secs: f32 },
    /// Occupy the agent until something interrupts it.
    Idle,
    /// Declared in the graph but not built yet.  Executing it is an error.
    Unimplemented,
    /// Application-defined behavior plus the parameters it is configured with.
    Custom {
        factory: Arc<dyn BehaviorFactory>,
        params:  BehaviorParams,
    },
}

impl Goal {
    pub fn move_to(destination: Vec3) -> Self {
        Goal::MoveTo { destination }
    }

    pub fn custom<F>(factory: F, params: BehaviorParams) -> Self
    where
        F: Fn() -> Box<dyn Behavior> + Send + Sync + 'static,
    {
        Goal::Custom { factory: Arc::new(factory), params }
    }

    /// A new, unconfigured behavior, or `None` for [`Goal::Unimplemented`].
    pub fn spawn(&self) -> Option<Box<dyn Behavior>> {
        let behavior: Box<dyn Behavior> = match self {
            Goal::MoveTo { .. } | Goal::Patrol { .. } => Box::new(MoveBehavior::new()),
            Goal::Wait { .. }                         => Box::new(WaitBehavior::new()),
            Goal::Idle                                => Box::new(DoNothingBehavior::new()),
            Goal::Unimplemented                       => return None,
            Goal::Custom { factory, .. }              => factory.spawn(),
        };
        Some(behavior)
    }

    /// Parameters handed to the spawned behavior's `configure`.
    pub fn params(&self) -> BehaviorParams {
        match self {
            Goal::MoveTo { destination }  => BehaviorParams::destination(*destination),
            Goal::Patrol { waypoints }    => BehaviorParams::waypoints(waypoints.clone()),
            Goal::Wait { secs }           => BehaviorParams::duration(*secs),
            Goal::Idle | Goal::Unimplemented => BehaviorParams::none(),
            Goal::Custom { params, .. }   => params.clone(),
        }
    }
}

impl fmt::Debug for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::MoveTo { destination } => f.debug_struct("MoveTo").field("destination", destination).finish(),
            Goal::Patrol { waypoints }   => f.debug_struct("Patrol").field("waypoints", waypoints).finish(),
            Goal::Wait { secs }          => f.debug_struct("Wait").field("secs", secs).finish(),
            Goal::Idle                   => f.write_str("Idle"),
            Goal::Unimplemented          => f.write_str("Unimplemented"),
            Goal::Custom { params, .. }  => f.debug_struct("Custom").field("params", params).finish_non_exhaustive(),
        }
    }
}
