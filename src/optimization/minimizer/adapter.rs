//! Adapter that exposes a user [`Objective`] as an `argmin` problem.
//!
//! The cost is the objective value itself (no sign flip). Gradients are
//! always central differences of that cost, computed by the same routine
//! the native loop uses, so both strategies see identical derivatives.
use crate::optimization::{
    errors::OptError,
    minimizer::{
        finite_diff::central_diff_gradient,
        traits::Objective,
        types::{Cost, Grad, Theta},
    },
};
use argmin::core::{CostFunction, Error, Gradient};

/// Bridges a user [`Objective`] to `argmin`'s `CostFunction` and `Gradient`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: Objective> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: Objective> ArgMinAdapter<'a, F> {
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

impl<F: Objective> CostFunction for ArgMinAdapter<'_, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate `f(θ)`.
    ///
    /// Wolfe line searches interpolate on cost values, so a non-finite cost
    /// is reported as [`OptError::NonFiniteCost`] instead of being passed on.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user's `value` via `?`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(output)
    }
}

impl<F: Objective> Gradient for ArgMinAdapter<'_, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Central-difference gradient of the cost (`2n` evaluations).
    ///
    /// # Errors
    /// Propagates the first error raised by a probe evaluation.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        Ok(central_diff_gradient(self.f, self.data, theta)?)
    }
}
