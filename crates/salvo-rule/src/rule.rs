//! The [`Rule`] trait.

use crate::context::StepContext;
use salvo_core::{Machine, Position};
use salvo_space::Line;

/// A synchronous, per-position transition function.
///
/// # Contract
///
/// - `transition()` MUST be deterministic and MUST read only the previous
///   generation (via `ctx`). The engine computes positions in index order
///   but any order must give the same result.
/// - `&self`: rules are stateless; all state lives in the machines.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores the rule as
/// `Box<dyn Rule>`.
///
/// # Examples
///
/// A rule that turns every machine into a general after one step:
///
/// ```
/// use salvo_core::{General, Machine, Position, Soldier};
/// use salvo_rule::{Rule, StepContext};
/// use salvo_space::Line;
///
/// struct Enlist;
///
/// impl Rule for Enlist {
///     fn name(&self) -> &str { "enlist" }
///
///     fn seed(&self, _line: &Line, _position: Position) -> Machine {
///         Soldier::recruit().into()
///     }
///
///     fn transition(&self, _ctx: &StepContext<'_>, _position: Position) -> Machine {
///         General::right_end().into()
///     }
/// }
///
/// let line = Line::new(3).unwrap();
/// assert!(!Enlist.seed(&line, Position(1)).is_general());
/// assert_eq!(Enlist.name(), "enlist");
/// ```
pub trait Rule: Send + 'static {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// The machine at `position` in generation 0.
    fn seed(&self, line: &Line, position: Position) -> Machine;

    /// The machine at `position` in the generation after `ctx.previous()`.
    fn transition(&self, ctx: &StepContext<'_>, position: Position) -> Machine;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn seed(&self, line: &Line, position: Position) -> Machine {
        (**self).seed(line, position)
    }

    fn transition(&self, ctx: &StepContext<'_>, position: Position) -> Machine {
        (**self).transition(ctx, position)
    }
}
