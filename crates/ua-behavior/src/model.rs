//! The `Behavior` trait: the runtime unit that carries out a utility's work.

use crate::{BehaviorParams, BehaviorResult, BehaviorState, Binding, Outcome, TickContext};

/// Multi-tick execution unit for one utility on one agent.
///
/// The agent owns its current behavior exclusively; the simulation drops it
/// the moment it yields an [`Outcome`].
///
/// # Contract
///
/// - [`configure`][Self::configure] binds goal data before anything runs.
/// - [`execute`][Self::execute] starts the work and returns immediately; it
///   never reports completion itself.
/// - [`tick`][Self::tick] advances saved state by one tick and returns
///   `Some(Outcome::complete(..))` exactly once, on the tick the work ends.
/// - [`cancel`][Self::cancel] returns `Some(Outcome::failure(..))` exactly once
///   for a running behavior and `None` in every other state.
///
/// Implementations usually embed a [`Lifecycle`][crate::Lifecycle], which
/// enforces all of the above.
///
/// # Example
///
/// ```rust,ignore
/// struct Pray { life: Lifecycle, left: f32 }
///
/// impl Behavior for Pray {
///     fn name(&self) -> &'static str { "pray" }
///     fn configure(&mut self, b: Binding, p: &BehaviorParams) -> BehaviorResult<()> {
///         self.left = p.duration_secs.ok_or(BehaviorError::MissingParameter("duration_secs"))?;
///         self.life.configure(b)
///     }
///     fn execute(&mut self) -> BehaviorResult<()> { self.life.start() }
///     fn tick(&mut self, ctx: &mut TickContext<'_>) -> Option<Outcome> {
///         if !self.life.is_running() { return None; }
///         self.left -= ctx.delta_secs;
///         if self.left <= 0.0 { self.life.complete() } else { None }
///     }
///     fn cancel(&mut self) -> Option<Outcome> { self.life.cancel() }
///     fn state(&self) -> BehaviorState { self.life.state() }
///     fn binding(&self) -> Option<Binding> { self.life.binding() }
/// }
/// ```
pub trait Behavior: Send + 'static {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    fn configure(&mut self, binding: Binding, params: &BehaviorParams) -> BehaviorResult<()>;

    fn execute(&mut self) -> BehaviorResult<()>;

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> Option<Outcome>;

    fn cancel(&mut self) -> Option<Outcome>;

    fn state(&self) -> BehaviorState;

    fn binding(&self) -> Option<Binding>;
}
