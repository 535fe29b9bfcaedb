//! Backtracking line search with the Armijo sufficient-decrease test.
//!
//! Starting from an initial step, the step is halved until
//! `f(x + α·d) ≤ f(x) + c1·α·(gᵗd)` holds, for at most [`MAX_LS_TRIALS`]
//! trial steps. When no trial passes, the smallest step tried is returned
//! anyway: the search never fails on its own, only objective errors
//! propagate. The curvature (Wolfe) condition is not checked here.
use crate::optimization::{
    errors::OptResult,
    minimizer::{
        Cost, Grad, Theta,
        traits::Objective,
        types::{BACKTRACK_FACTOR, MAX_LS_TRIALS},
    },
};

/// Result of one backtracking search.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSearchOutcome {
    /// Step length `α` (always `> 0`).
    pub step: f64,
    /// Trial point `x + α·d`.
    pub theta: Theta,
    /// Objective value at `theta`.
    pub value: Cost,
    /// Whether the Armijo test held for `step`.
    pub accepted: bool,
    /// Objective evaluations spent.
    pub evals: usize,
}

/// backtracking_armijo — find a step length along `direction`.
///
/// Parameters
/// ----------
/// - `f`, `data`: objective and its payload.
/// - `theta`: current point `x`.
/// - `value`: `f(x)`, already known to the caller.
/// - `grad`: gradient at `x`.
/// - `direction`: search direction `d`.
/// - `initial_step`: first `α` tried (positive).
/// - `c1`: sufficient-decrease coefficient.
///
/// Returns
/// -------
/// A [`LineSearchOutcome`]. `accepted == false` means every trial failed
/// and the smallest one (`initial_step · 0.5^(MAX_LS_TRIALS − 1)`) is
/// reported.
///
/// Errors
/// ------
/// - Propagates the first error returned by [`Objective::value`].
///
/// Notes
/// -----
/// - A NaN trial value (or a NaN `value`) makes the comparison false, so a
///   non-finite objective exhausts the halvings instead of raising.
#[allow(clippy::too_many_arguments)]
pub fn backtracking_armijo<F: Objective>(
    f: &F, data: &F::Data, theta: &Theta, value: Cost, grad: &Grad, direction: &Grad,
    initial_step: f64, c1: f64,
) -> OptResult<LineSearchOutcome> {
    let slope = grad.dot(direction);
    let mut step = initial_step;
    let mut evals = 0;
    let mut last: Option<(f64, Theta, Cost)> = None;

    for _ in 0..MAX_LS_TRIALS {
        let trial = theta + &(direction * step);
        let trial_value = f.value(&trial, data)?;
        evals += 1;
        if trial_value <= value + c1 * step * slope {
            return Ok(LineSearchOutcome {
                step,
                theta: trial,
                value: trial_value,
                accepted: true,
                evals,
            });
        }
        last = Some((step, trial, trial_value));
        step *= BACKTRACK_FACTOR;
    }

    match last {
        Some((step, theta, value)) => {
            Ok(LineSearchOutcome { step, theta, value, accepted: false, evals })
        }
        // MAX_LS_TRIALS > 0, so at least one trial was recorded.
        None => Ok(LineSearchOutcome {
            step: initial_step,
            theta: theta.clone(),
            value,
            accepted: false,
            evals,
        }),
    }
}
