//! Goal-specific parameters passed to [`Behavior::configure`][crate::Behavior::configure].

use ua_core::Vec3;

/// Parameters a utility hands to the behavior it spawns.
///
/// Each behavior reads the fields it needs and rejects missing ones with
/// [`BehaviorError::MissingParameter`][crate::BehaviorError::MissingParameter].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BehaviorParams {
    /// Points to visit in order.  A single destination is a one-element list.
    pub waypoints:     Vec<Vec3>,
    /// How long a timed behavior lasts, in game seconds.
    pub duration_secs: Option<f32>,
    /// Overrides the agent's own speed while this behavior runs.
    pub speed:         Option<f32>,
}

impl BehaviorParams {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn destination(point: Vec3) -> Self {
        Self { waypoints: vec![point], ..Self::default() }
    }

    pub fn waypoints(points: Vec<Vec3>) -> Self {
        Self { waypoints: points, ..Self::default() }
    }

    pub fn duration(secs: f32) -> Self {
        Self { duration_secs: Some(secs), ..Self::default() }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }
}
