//! L-BFGS with a Wolfe line search, delegated to `argmin`.
//!
//! Unlike [`Lbfgs`](super::Lbfgs), this strategy enforces the curvature
//! condition (`c2` is consumed) and treats a non-finite cost as an error,
//! since both Wolfe searches interpolate on cost values.
use crate::optimization::{
    errors::OptResult,
    minimizer::{
        Theta,
        adapter::ArgMinAdapter,
        builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
        run::run_lbfgs,
        traits::{Bounds, LbfgsOptions, Minimizer, Objective, OptimOutcome, WolfeLineSearch},
        validation::{validate_bounds, validate_theta0},
    },
};

/// argmin-backed L-BFGS strategy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArgminLbfgs {
    opts: LbfgsOptions,
    line_search: WolfeLineSearch,
}

impl ArgminLbfgs {
    /// Build the strategy.
    ///
    /// Options are validated, then the solver is built once so that argmin
    /// rejects unusable coefficients here rather than on the first run.
    ///
    /// # Errors
    /// - Any error from [`LbfgsOptions::validate`].
    /// - `OptError::InvalidParameter` when argmin refuses `(c1, c2)` for the
    ///   chosen line search.
    pub fn new(opts: LbfgsOptions, line_search: WolfeLineSearch) -> OptResult<Self> {
        opts.validate()?;
        match line_search {
            WolfeLineSearch::MoreThuente => {
                build_optimizer_more_thuente(&opts)?;
            }
            WolfeLineSearch::HagerZhang => {
                build_optimizer_hager_zhang(&opts)?;
            }
        }
        Ok(Self { opts, line_search })
    }

    pub fn options(&self) -> &LbfgsOptions {
        &self.opts
    }

    pub fn line_search(&self) -> WolfeLineSearch {
        self.line_search
    }
}

impl Minimizer for ArgminLbfgs {
    fn name(&self) -> &'static str {
        match self.line_search {
            WolfeLineSearch::MoreThuente => "L-BFGS (argmin, More-Thuente)",
            WolfeLineSearch::HagerZhang => "L-BFGS (argmin, Hager-Zhang)",
        }
    }

    /// # Errors
    /// In addition to the [`Minimizer`] contract, any argmin failure is
    /// returned: a non-finite cost (`OptError::NonFiniteCost`) or a line
    /// search that cannot make progress.
    fn minimize<F: Objective>(
        &self, f: &F, data: &F::Data, theta0: Theta, bounds: &Bounds,
    ) -> OptResult<OptimOutcome> {
        validate_theta0(&theta0)?;
        validate_bounds(bounds, theta0.len())?;
        f.check(&theta0, data)?;
        let problem = ArgMinAdapter::new(f, data);
        match self.line_search {
            WolfeLineSearch::MoreThuente => {
                let solver = build_optimizer_more_thuente(&self.opts)?;
                run_lbfgs(theta0, &self.opts, problem, solver, self.name())
            }
            WolfeLineSearch::HagerZhang => {
                let solver = build_optimizer_hager_zhang(&self.opts)?;
                run_lbfgs(theta0, &self.opts, problem, solver, self.name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        errors::OptError,
        minimizer::{FnObjective, traits::Termination},
    };
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Convergence on a separable quadratic with both line searches.
    // - Budget exhaustion mapped to `MaxItersReached`.
    // - Error paths: non-finite costs, input validation, argmin rejections.
    //
    // They intentionally DO NOT cover:
    // - argmin's internal line-search logic.
    // -------------------------------------------------------------------------

    fn separable() -> FnObjective<impl Fn(&Theta) -> f64> {
        FnObjective::new(|x: &Theta| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2))
    }

    #[test]
    // Purpose
    // -------
    // Both Wolfe variants reach the minimizer of `(x − 1)² + (y + 2)²`.
    //
    // Expect
    // ------
    // - converged, `theta_hat ≈ [1, −2]`, and at least the initial cost and
    //   gradient were counted (`fn_evals ≥ 1 + 2n`).
    fn both_line_searches_converge_on_separable_quadratic() {
        for line_search in [WolfeLineSearch::MoreThuente, WolfeLineSearch::HagerZhang] {
            // Arrange
            let solver = ArgminLbfgs::new(LbfgsOptions::default(), line_search).unwrap();

            // Act
            let out =
                solver.minimize(&separable(), &(), array![0.0, 0.0], &Bounds::unbounded()).unwrap();

            // Assert
            assert!(out.converged, "{}: status {}", solver.name(), out.status);
            approx::assert_abs_diff_eq!(out.theta_hat[0], 1.0, epsilon = 1e-4);
            approx::assert_abs_diff_eq!(out.theta_hat[1], -2.0, epsilon = 1e-4);
            assert!(out.value < 1e-8);
            assert!(out.fn_evals >= 5);
        }
    }

    #[test]
    fn single_iteration_budget_reports_max_iters() {
        let rosenbrock = FnObjective::new(|x: &Theta| {
            (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
        });
        let opts = LbfgsOptions { max_iter: 1, ..LbfgsOptions::default() };
        let solver = ArgminLbfgs::new(opts, WolfeLineSearch::MoreThuente).unwrap();

        let out = solver.minimize(&rosenbrock, &(), array![-1.2, 1.0], &Bounds::unbounded()).unwrap();

        assert!(!out.converged);
        assert_eq!(out.status, Termination::MaxItersReached);
        assert_eq!(out.iterations, 1);
        assert!(out.value < 24.2);
    }

    #[test]
    // Purpose
    // -------
    // A NaN cost at the initial point aborts the argmin run with a typed error.
    fn non_finite_initial_cost_is_an_error() {
        let f = FnObjective::new(|_: &Theta| f64::NAN);
        let solver = ArgminLbfgs::default();

        let err = solver.minimize(&f, &(), array![0.0], &Bounds::unbounded()).unwrap_err();

        assert!(matches!(err, OptError::NonFiniteCost { .. }), "got {err:?}");
    }

    #[test]
    fn input_validation_matches_native_strategy() {
        let solver = ArgminLbfgs::default();

        assert_eq!(
            solver.minimize(&separable(), &(), Theta::zeros(0), &Bounds::unbounded()),
            Err(OptError::EmptyTheta)
        );
        assert!(matches!(
            solver.minimize(
                &separable(),
                &(),
                array![0.0, 0.0],
                &Bounds::new(array![1.0, 0.0], array![0.0, 1.0])
            ),
            Err(OptError::InvalidBounds { index: 0, .. })
        ));
    }

    #[test]
    fn new_validates_options() {
        let opts = LbfgsOptions { c1: 0.9, c2: 0.1, ..LbfgsOptions::default() };
        assert!(matches!(
            ArgminLbfgs::new(opts, WolfeLineSearch::HagerZhang),
            Err(OptError::InvalidLineSearchCoeffs { .. })
        ));

        let solver = ArgminLbfgs::new(LbfgsOptions::default(), WolfeLineSearch::HagerZhang).unwrap();
        assert_eq!(solver.line_search(), WolfeLineSearch::HagerZhang);
        assert_eq!(solver.name(), "L-BFGS (argmin, Hager-Zhang)");
    }
}
