//! High-level entry point for minimizing a calibration objective.
//!
//! Builds the native [`Lbfgs`] strategy from the given options and runs it
//! without bounds. Callers that need the argmin backend, bounds, or
//! restarts use [`ArgminLbfgs`](super::ArgminLbfgs),
//! [`Minimizer::minimize`], or [`multi_start`](super::multi_start)
//! directly.
use crate::optimization::{
    errors::OptResult,
    minimizer::{
        Theta,
        lbfgs::Lbfgs,
        traits::{Bounds, LbfgsOptions, Minimizer, Objective, OptimOutcome},
    },
};

/// Minimize `f(·, data)` from `theta0` with native L-BFGS.
///
/// # Errors
/// - Option validation errors from [`Lbfgs::new`].
/// - Input errors for `theta0` and anything raised by `f.check`.
/// - Any error returned by `f.value` during the run.
///
/// # Example
/// ```
/// use calibration_optim::optimization::{
///     errors::OptResult,
///     minimizer::{LbfgsOptions, Objective, Theta, minimize},
/// };
/// use ndarray::array;
///
/// /// Squared pricing errors of a one-parameter model `p(k) = θ·k`.
/// struct LinearFit;
/// impl Objective for LinearFit {
///     type Data = Vec<(f64, f64)>;
///     fn value(&self, theta: &Theta, quotes: &Self::Data) -> OptResult<f64> {
///         Ok(quotes.iter().map(|(k, p)| (theta[0] * k - p).powi(2)).sum())
///     }
/// }
///
/// let quotes = vec![(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)];
/// let out = minimize(&LinearFit, &quotes, array![0.0], &LbfgsOptions::default())?;
/// assert!(out.converged);
/// assert!((out.theta_hat[0] - 2.0).abs() < 1e-5);
/// # Ok::<(), calibration_optim::optimization::errors::OptError>(())
/// ```
pub fn minimize<F: Objective>(
    f: &F, data: &F::Data, theta0: Theta, opts: &LbfgsOptions,
) -> OptResult<OptimOutcome> {
    let solver = Lbfgs::new(*opts)?;
    solver.minimize(f, data, theta0, &Bounds::unbounded())
}
