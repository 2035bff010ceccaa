//! Interpreter that walks an expanded symbol string and drives a [`Turtle`].
//!
//! The entry points are [`interpret`], which returns the finished turtle so
//! callers can inspect its final state, and [`render`], which builds the turtle
//! from a factory and returns only its segments.

use crate::action::{Action, ActionTable};
use crate::drawing::Segment;
use crate::error::{LsysError, Result};
use crate::sampler::Sampler;
use crate::turtle::Turtle;
use rand::RngCore;
use tracing::{debug, trace, warn};

/// Runs every symbol of `symbols` through `turtle` and returns it.
///
/// Symbols with no binding in `actions` are skipped. `Push` saves a deep copy
/// of the turtle state; `Pop` restores the most recent copy and fails with
/// [`LsysError::StackUnderflow`] when nothing is saved. On failure the turtle
/// and every segment it recorded are dropped.
///
/// Actions are assumed to have been validated for the turtle's dimensionality;
/// a `Spin` reaching a planar turtle still surfaces as an error rather than
/// being ignored.
pub fn interpret<T: Turtle, R: RngCore>(
    symbols: &str,
    actions: &ActionTable,
    mut turtle: T,
    sampler: &mut Sampler<R>,
) -> Result<T> {
    let mut stack: Vec<T::State> = Vec::new();

    for (index, symbol) in symbols.chars().enumerate() {
        let Some(action) = actions.get(symbol) else {
            continue;
        };

        match action {
            Action::Push => {
                stack.push(turtle.snapshot());
                trace!(index, depth = stack.len(), "push");
            }
            Action::Pop => {
                let Some(state) = stack.pop() else {
                    warn!(index, "pop with empty stack");
                    return Err(LsysError::StackUnderflow { index });
                };
                turtle.restore(state);
                trace!(index, depth = stack.len(), "pop");
            }
            motion => turtle.apply(symbol, motion, sampler)?,
        }
    }

    debug!(
        symbols = symbols.chars().count(),
        segments = turtle.segments().len(),
        unclosed = stack.len(),
        "interpreted symbol string"
    );
    Ok(turtle)
}

/// Builds a turtle with `factory`, interprets `symbols`, and returns the
/// segments in draw order.
pub fn render<T, F, R>(
    symbols: &str,
    actions: &ActionTable,
    factory: F,
    sampler: &mut Sampler<R>,
) -> Result<Vec<Segment<T::Point>>>
where
    T: Turtle,
    F: FnOnce() -> T,
    R: RngCore,
{
    interpret(symbols, actions, factory(), sampler).map(T::into_segments)
}
