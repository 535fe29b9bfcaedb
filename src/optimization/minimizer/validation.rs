//! Validation helpers for the minimizer.
//!
//! This module centralizes the consistency checks run before any objective
//! evaluation:
//!
//! - **Configuration checks**: [`verify_tol_grad`], [`verify_max_iter`],
//!   [`verify_mem`], [`verify_initial_step`], [`verify_line_search_coeffs`].
//! - **Initial point**: [`validate_theta0`] rejects empty or non-finite
//!   starting vectors.
//! - **Bounds**: [`validate_bounds`] checks bound shapes against the
//!   parameter dimension.
//!
//! Objective values and gradients produced during a run are deliberately
//! *not* validated on the native path; a non-finite cost simply fails the
//! Armijo test.
use crate::optimization::{
    errors::{OptError, OptResult},
    minimizer::{Theta, traits::Bounds},
};

/// Validate the gradient-norm tolerance.
///
/// # Errors
/// Returns [`OptError::InvalidTolGrad`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_grad(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the iteration budget.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] if `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate the L-BFGS history depth.
///
/// # Errors
/// Returns [`OptError::InvalidLBFGSMem`] if `mem == 0`.
pub fn verify_mem(mem: usize) -> OptResult<()> {
    if mem == 0 {
        return Err(OptError::InvalidLBFGSMem {
            mem,
            reason: "L-BFGS memory must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate the initial step length of the line search.
///
/// # Errors
/// Returns [`OptError::InvalidInitialStep`] if the step is non-finite or ≤ 0.0.
pub fn verify_initial_step(step: f64) -> OptResult<()> {
    if !step.is_finite() {
        return Err(OptError::InvalidInitialStep { step, reason: "Step must be finite." });
    }
    if step <= 0.0 {
        return Err(OptError::InvalidInitialStep { step, reason: "Step must be positive." });
    }
    Ok(())
}

/// Validate the sufficient-decrease and curvature coefficients.
///
/// Requires `0 < c1 < c2 < 1`. `c2` is checked even though only the Wolfe
/// backend consumes it.
///
/// # Errors
/// Returns [`OptError::InvalidLineSearchCoeffs`] on any violation.
pub fn verify_line_search_coeffs(c1: f64, c2: f64) -> OptResult<()> {
    if !c1.is_finite() || !c2.is_finite() {
        return Err(OptError::InvalidLineSearchCoeffs {
            c1,
            c2,
            reason: "Coefficients must be finite.",
        });
    }
    if c1 <= 0.0 || c2 >= 1.0 {
        return Err(OptError::InvalidLineSearchCoeffs {
            c1,
            c2,
            reason: "Coefficients must lie in (0, 1).",
        });
    }
    if c1 >= c2 {
        return Err(OptError::InvalidLineSearchCoeffs {
            c1,
            c2,
            reason: "Sufficient-decrease coefficient c1 must be below c2.",
        });
    }
    Ok(())
}

/// Validate the starting point of a run.
///
/// # Errors
/// - [`OptError::EmptyTheta`] if `theta0` has no coordinates.
/// - [`OptError::InvalidThetaInput`] for the first non-finite coordinate.
pub fn validate_theta0(theta0: &Theta) -> OptResult<()> {
    if theta0.is_empty() {
        return Err(OptError::EmptyTheta);
    }
    for (index, &value) in theta0.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidThetaInput { index, value });
        }
    }
    Ok(())
}

/// Validate bound shapes against the parameter dimension.
///
/// Empty bounds mean "unbounded". Otherwise both vectors must have length
/// `dim` and satisfy `lower[i] <= upper[i]` (infinite bounds are allowed).
///
/// # Errors
/// - [`OptError::BoundsDimMismatch`] on a length mismatch.
/// - [`OptError::InvalidBounds`] for the first crossed or NaN pair.
pub fn validate_bounds(bounds: &Bounds, dim: usize) -> OptResult<()> {
    if bounds.is_unbounded() {
        return Ok(());
    }
    let (lower, upper) = (bounds.lower(), bounds.upper());
    if lower.len() != dim || upper.len() != dim {
        return Err(OptError::BoundsDimMismatch {
            expected: dim,
            lower: lower.len(),
            upper: upper.len(),
        });
    }
    for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return Err(OptError::InvalidBounds { index, lower: lo, upper: hi });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn verify_tol_grad_rejects_non_positive_and_non_finite() {
        assert!(verify_tol_grad(1e-6).is_ok());
        assert!(matches!(verify_tol_grad(0.0), Err(OptError::InvalidTolGrad { .. })));
        assert!(matches!(verify_tol_grad(-1.0), Err(OptError::InvalidTolGrad { .. })));
        assert!(matches!(verify_tol_grad(f64::NAN), Err(OptError::InvalidTolGrad { .. })));
    }

    #[test]
    fn verify_line_search_coeffs_enforces_ordering() {
        assert!(verify_line_search_coeffs(1e-4, 0.9).is_ok());
        assert!(verify_line_search_coeffs(0.0, 0.9).is_err());
        assert!(verify_line_search_coeffs(0.5, 0.5).is_err());
        assert!(verify_line_search_coeffs(0.1, 1.0).is_err());
        assert!(verify_line_search_coeffs(f64::INFINITY, 0.9).is_err());
    }

    #[test]
    fn verify_counts_and_step() {
        assert!(verify_max_iter(1).is_ok());
        assert!(matches!(verify_max_iter(0), Err(OptError::InvalidMaxIter { .. })));
        assert!(verify_mem(1).is_ok());
        assert!(matches!(verify_mem(0), Err(OptError::InvalidLBFGSMem { .. })));
        assert!(verify_initial_step(0.5).is_ok());
        assert!(matches!(verify_initial_step(0.0), Err(OptError::InvalidInitialStep { .. })));
    }

    #[test]
    fn validate_theta0_reports_first_non_finite_coordinate() {
        assert_eq!(validate_theta0(&Theta::zeros(0)), Err(OptError::EmptyTheta));

        let err = validate_theta0(&array![1.0, f64::NAN, f64::INFINITY]).unwrap_err();
        match err {
            OptError::InvalidThetaInput { index, value } => {
                assert_eq!(index, 1);
                assert!(value.is_nan());
            }
            other => panic!("Expected InvalidThetaInput, got {other:?}"),
        }
    }

    #[test]
    fn validate_bounds_accepts_empty_and_matching_shapes() {
        assert!(Bounds::unbounded().is_unbounded());
        assert!(validate_bounds(&Bounds::unbounded(), 3).is_ok());

        let half_empty = Bounds::new(Theta::zeros(0), array![1.0, 2.0]);
        assert!(!half_empty.is_unbounded());
        assert!(matches!(
            validate_bounds(&half_empty, 2),
            Err(OptError::BoundsDimMismatch { expected: 2, lower: 0, upper: 2 })
        ));

        let ok = Bounds::new(array![0.0, f64::NEG_INFINITY], array![1.0, 2.0]);
        assert!(validate_bounds(&ok, 2).is_ok());

        let short = Bounds::new(array![0.0], array![1.0]);
        assert!(matches!(validate_bounds(&short, 2), Err(OptError::BoundsDimMismatch { .. })));

        let crossed = Bounds::new(array![0.0, 3.0], array![1.0, 2.0]);
        assert_eq!(
            validate_bounds(&crossed, 2),
            Err(OptError::InvalidBounds { index: 1, lower: 3.0, upper: 2.0 })
        );
    }
}
