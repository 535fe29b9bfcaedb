//! minimizer::finite_diff — central-difference gradient estimator.
//!
//! Purpose
//! -------
//! Supply the gradient of an [`Objective`] that has no closed-form
//! derivative. Both minimization strategies obtain every gradient here.
//!
//! Key behaviors
//! -------------
//! - For each coordinate `i`, perturb `θ` by `±h` in that coordinate only
//!   and set `g[i] = (f(θ + h·eᵢ) − f(θ − h·eᵢ)) / (2h)`.
//! - Exactly `2n` objective evaluations per gradient; see [`fd_evals`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The objective is deterministic, so the estimate is deterministic.
//! - Truncation error is `O(h²)` for smooth objectives; with the default
//!   `h = 1e-7` rounding error dominates for costs of order one.
//!
//! Conventions
//! -----------
//! - An objective error at any probe aborts the estimate and is returned
//!   unchanged; there is no retry and no fallback scheme.
//! - Non-finite objective values are not sanitized: they produce
//!   non-finite gradient entries that the caller must tolerate.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against analytic gradients and against the
//!   `finitediff` crate as an independent reference, and check error
//!   propagation and evaluation counts.
use crate::optimization::{
    errors::OptResult,
    minimizer::{Grad, Theta, traits::Objective, types::FD_STEP},
};

/// central_diff_gradient — gradient estimate with the default step.
///
/// Parameters
/// ----------
/// - `f`: objective to differentiate.
/// - `data`: read-only payload forwarded to every evaluation.
/// - `theta`: evaluation point; its length sets the gradient dimension.
///
/// Returns
/// -------
/// `OptResult<Grad>` with `grad.len() == theta.len()`.
///
/// Errors
/// ------
/// - Propagates the first error returned by [`Objective::value`].
///
/// Examples
/// --------
/// ```rust
/// use calibration_optim::optimization::minimizer::{FnObjective, Theta};
/// use calibration_optim::optimization::minimizer::finite_diff::central_diff_gradient;
/// use ndarray::array;
///
/// let f = FnObjective::new(|x: &Theta| x[0] * x[0] + 3.0 * x[1]);
/// let g = central_diff_gradient(&f, &(), &array![2.0, 0.0]).unwrap();
/// assert!((g[0] - 4.0).abs() < 1e-6);
/// assert!((g[1] - 3.0).abs() < 1e-6);
/// ```
pub fn central_diff_gradient<F: Objective>(
    f: &F, data: &F::Data, theta: &Theta,
) -> OptResult<Grad> {
    central_diff_gradient_with_step(f, data, theta, FD_STEP)
}

/// central_diff_gradient_with_step — gradient estimate with an explicit step `h`.
///
/// Same contract as [`central_diff_gradient`]. A single probe vector is
/// reused; each coordinate is restored to its original value before the
/// next one is perturbed.
pub fn central_diff_gradient_with_step<F: Objective>(
    f: &F, data: &F::Data, theta: &Theta, h: f64,
) -> OptResult<Grad> {
    let mut probe = theta.clone();
    let mut grad = Grad::zeros(theta.len());
    for i in 0..theta.len() {
        let xi = theta[i];
        probe[i] = xi + h;
        let f_plus = f.value(&probe, data)?;
        probe[i] = xi - h;
        let f_minus = f.value(&probe, data)?;
        probe[i] = xi;
        grad[i] = (f_plus - f_minus) / (2.0 * h);
    }
    Ok(grad)
}

/// Objective evaluations spent by one gradient estimate in dimension `dim`.
pub const fn fd_evals(dim: usize) -> usize {
    2 * dim
}
