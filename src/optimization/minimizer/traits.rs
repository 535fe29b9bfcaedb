//! Public API surface for objective minimization.
//!
//! - [`Objective`]: trait callers implement for their calibration cost.
//! - [`FnObjective`]: adapter turning a plain closure into an [`Objective`].
//! - [`Minimizer`]: strategy interface; [`Lbfgs`](super::Lbfgs) is the native
//!   implementation, [`ArgminLbfgs`](super::ArgminLbfgs) the Wolfe-line-search one.
//! - [`LbfgsOptions`]: configuration shared by both strategies.
//! - [`WolfeLineSearch`]: line-search choice for the argmin strategy.
//! - [`Bounds`]: accepted but inert box bounds.
//! - [`OptimOutcome`] and [`Termination`]: normalized run result.
//!
//! Convention: the objective is *minimized* as given. Callers encoding
//! domain constraints (LPPL, GARCH) add penalty terms to the raw cost.
use crate::optimization::{
    errors::{OptError, OptResult},
    minimizer::{
        Cost, Theta,
        types::{
            DEFAULT_C1, DEFAULT_C2, DEFAULT_INITIAL_STEP, DEFAULT_LBFGS_MEM, DEFAULT_MAX_ITER,
            DEFAULT_TOL_GRAD,
        },
        validation::{
            verify_initial_step, verify_line_search_coeffs, verify_max_iter, verify_mem,
            verify_tol_grad,
        },
    },
};
use std::{fmt, str::FromStr};

/// User-implemented objective interface.
///
/// - `type Data`: read-only context (time series, price series, ...) passed
///   explicitly into every evaluation. Use `()` when the objective captures
///   everything it needs.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `f(θ)`.
///   The value may be non-finite; the native minimizer treats that as a
///   failed sufficient-decrease test rather than an error. Return `Err` only
///   for genuine evaluation failures, which abort the run.
///
/// Optional:
/// - `check(&Theta, &Data) -> OptResult<()>`: called once on the initial
///   point before any evaluation. Reject dimension mismatches here (e.g.
///   with [`OptError::ThetaLengthMismatch`]).
///
/// Implementations must be deterministic for a given input; finite
/// differences are meaningless otherwise.
pub trait Objective {
    type Data: ?Sized;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;

    fn check(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        Ok(())
    }
}

/// Closure-backed [`Objective`] with no data payload.
///
/// ```
/// use calibration_optim::optimization::minimizer::{FnObjective, Objective, Theta};
/// use ndarray::array;
///
/// let f = FnObjective::new(|x: &Theta| (x[0] - 3.0).powi(2));
/// assert_eq!(f.value(&array![3.0], &()).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<G> {
    func: G,
}

impl<G> FnObjective<G>
where
    G: Fn(&Theta) -> Cost,
{
    pub fn new(func: G) -> Self {
        Self { func }
    }
}

impl<G> Objective for FnObjective<G>
where
    G: Fn(&Theta) -> Cost,
{
    type Data = ();

    fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
        Ok((self.func)(theta))
    }
}

/// A minimization strategy.
///
/// Implementors own only immutable configuration; all per-run state is
/// created inside [`Minimizer::minimize`], so one instance can serve
/// several runs, including concurrent ones.
pub trait Minimizer {
    /// Short human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Minimize `f(·, data)` starting from `theta0`.
    ///
    /// `bounds` are validated for shape and otherwise ignored.
    ///
    /// # Errors
    /// - Input errors (empty/non-finite `theta0`, malformed bounds,
    ///   anything raised by [`Objective::check`]).
    /// - Any error returned by [`Objective::value`] during the run.
    fn minimize<F: Objective>(
        &self, f: &F, data: &F::Data, theta0: Theta, bounds: &Bounds,
    ) -> OptResult<OptimOutcome>;
}

/// Box bounds accepted by [`Minimizer::minimize`].
///
/// Bounds are part of the calibration callers' interface but carry no
/// algorithmic effect: iterates are never projected or clipped. Empty
/// vectors mean "unbounded"; non-empty ones are shape-checked against the
/// parameter dimension.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bounds {
    lower: Theta,
    upper: Theta,
}

impl Bounds {
    pub fn new(lower: Theta, upper: Theta) -> Self {
        Self { lower, upper }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn lower(&self) -> &Theta {
        &self.lower
    }

    pub fn upper(&self) -> &Theta {
        &self.upper
    }

    pub fn is_unbounded(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }
}

/// Choice of Wolfe line search used inside the argmin L-BFGS strategy.
///
/// Parsing is case-insensitive (`"MoreThuente"`, `"HagerZhang"`); unknown
/// names return `OptError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WolfeLineSearch {
    #[default]
    MoreThuente,
    HagerZhang,
}

impl FromStr for WolfeLineSearch {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(WolfeLineSearch::MoreThuente),
            "hagerzhang" => Ok(WolfeLineSearch::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Minimizer configuration.
///
/// Fields:
/// - `mem`: history depth `m`.
/// - `max_iter`: iteration budget.
/// - `tol_grad`: stop once `‖∇f‖₂` drops below this.
/// - `initial_step`: first step length tried by the line search.
/// - `c1`: sufficient-decrease (Armijo) coefficient.
/// - `c2`: curvature (Wolfe) coefficient. Validated, but the native
///   backtracking search never consumes it; only [`ArgminLbfgs`](super::ArgminLbfgs)
///   enforces the curvature condition.
/// - `verbose`: emit progress records (requires the `obs_slog` feature).
///
/// Default: `mem = 10`, `max_iter = 500`, `tol_grad = 1e-6`,
/// `initial_step = 1.0`, `c1 = 1e-4`, `c2 = 0.9`, `verbose = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LbfgsOptions {
    pub mem: usize,
    pub max_iter: usize,
    pub tol_grad: f64,
    pub initial_step: f64,
    pub c1: f64,
    pub c2: f64,
    pub verbose: bool,
}

impl LbfgsOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// See [`LbfgsOptions::validate`].
    pub fn new(
        mem: usize, max_iter: usize, tol_grad: f64, initial_step: f64, c1: f64, c2: f64,
        verbose: bool,
    ) -> OptResult<Self> {
        let opts = Self { mem, max_iter, tol_grad, initial_step, c1, c2, verbose };
        opts.validate()?;
        Ok(opts)
    }

    /// Re-check every field. Fields are public, so strategies call this
    /// again when they are constructed.
    ///
    /// # Errors
    /// - [`OptError::InvalidLBFGSMem`] if `mem == 0`.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    /// - [`OptError::InvalidTolGrad`] for a non-finite or non-positive tolerance.
    /// - [`OptError::InvalidInitialStep`] for a non-finite or non-positive step.
    /// - [`OptError::InvalidLineSearchCoeffs`] unless `0 < c1 < c2 < 1`.
    pub fn validate(&self) -> OptResult<()> {
        verify_mem(self.mem)?;
        verify_max_iter(self.max_iter)?;
        verify_tol_grad(self.tol_grad)?;
        verify_initial_step(self.initial_step)?;
        verify_line_search_coeffs(self.c1, self.c2)
    }
}

impl Default for LbfgsOptions {
    fn default() -> Self {
        Self {
            mem: DEFAULT_LBFGS_MEM,
            max_iter: DEFAULT_MAX_ITER,
            tol_grad: DEFAULT_TOL_GRAD,
            initial_step: DEFAULT_INITIAL_STEP,
            c1: DEFAULT_C1,
            c2: DEFAULT_C2,
            verbose: false,
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Gradient norm fell below `tol_grad`.
    Converged,
    /// Iteration budget spent without meeting the tolerance.
    MaxItersReached,
    /// Backend-specific stop (argmin strategy only).
    Stopped(String),
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Converged => write!(f, "Converged"),
            Termination::MaxItersReached => write!(f, "Maximum iterations reached"),
            Termination::Stopped(reason) => write!(f, "Stopped: {reason}"),
        }
    }
}

/// Canonical result returned by every [`Minimizer`].
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: objective value at `theta_hat`.
/// - `converged`: `true` iff `status == Termination::Converged`.
/// - `status`: termination reason.
/// - `iterations`: number of completed update steps.
/// - `fn_evals`: total objective evaluations, finite-difference probes included.
/// - `grad_norm`: norm of the last available gradient.
///
/// A non-converged outcome is a best-effort answer, not a failure; callers
/// running several restarts compare outcomes by `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: Cost,
    pub converged: bool,
    pub status: Termination,
    pub iterations: usize,
    pub fn_evals: usize,
    pub grad_norm: Option<f64>,
}

impl OptimOutcome {
    pub fn new(
        theta_hat: Theta, value: Cost, status: Termination, iterations: usize, fn_evals: usize,
        grad_norm: Option<f64>,
    ) -> Self {
        let converged = status == Termination::Converged;
        Self { theta_hat, value, converged, status, iterations, fn_evals, grad_norm }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Defaults and validation of `LbfgsOptions`.
    // - Case-insensitive parsing of `WolfeLineSearch`.
    // - The closure adapter and the default `check` hook.
    // - Derivation of `converged` from the termination status.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Defaults must match the documented calibration settings.
    fn lbfgs_options_default_values() {
        let opts = LbfgsOptions::default();

        assert_eq!(opts.mem, 10);
        assert_eq!(opts.max_iter, 500);
        assert_eq!(opts.tol_grad, 1e-6);
        assert_eq!(opts.initial_step, 1.0);
        assert_eq!(opts.c1, 1e-4);
        assert_eq!(opts.c2, 0.9);
        assert!(!opts.verbose);
        assert!(opts.validate().is_ok());
    }

    #[test]
    // Purpose
    // -------
    // `LbfgsOptions::new` rejects each invalid field with its own variant.
    //
    // Given
    // -----
    // - One invalid field at a time, all others at their defaults.
    //
    // Expect
    // ------
    // - The matching `OptError` variant.
    fn lbfgs_options_new_rejects_invalid_fields() {
        assert!(matches!(
            LbfgsOptions::new(0, 500, 1e-6, 1.0, 1e-4, 0.9, false),
            Err(OptError::InvalidLBFGSMem { .. })
        ));
        assert!(matches!(
            LbfgsOptions::new(10, 0, 1e-6, 1.0, 1e-4, 0.9, false),
            Err(OptError::InvalidMaxIter { .. })
        ));
        assert!(matches!(
            LbfgsOptions::new(10, 500, -1e-6, 1.0, 1e-4, 0.9, false),
            Err(OptError::InvalidTolGrad { .. })
        ));
        assert!(matches!(
            LbfgsOptions::new(10, 500, 1e-6, f64::NAN, 1e-4, 0.9, false),
            Err(OptError::InvalidInitialStep { .. })
        ));
        assert!(matches!(
            LbfgsOptions::new(10, 500, 1e-6, 1.0, 0.95, 0.9, false),
            Err(OptError::InvalidLineSearchCoeffs { .. })
        ));
    }

    #[test]
    fn wolfe_line_search_parses_case_insensitively() {
        assert_eq!("morethuente".parse::<WolfeLineSearch>(), Ok(WolfeLineSearch::MoreThuente));
        assert_eq!("HAGERZHANG".parse::<WolfeLineSearch>(), Ok(WolfeLineSearch::HagerZhang));
        assert!(matches!(
            "backtracking".parse::<WolfeLineSearch>(),
            Err(OptError::InvalidLineSearch { .. })
        ));
    }

    #[test]
    fn fn_objective_evaluates_closure_and_accepts_any_point() {
        let f = FnObjective::new(|x: &Theta| x.dot(x));
        let theta = array![1.0, 2.0];

        assert_eq!(f.value(&theta, &()).unwrap(), 5.0);
        assert!(f.check(&theta, &()).is_ok());
    }

    #[test]
    fn optim_outcome_converged_follows_status() {
        let done = OptimOutcome::new(array![0.0], 0.0, Termination::Converged, 3, 12, Some(0.0));
        let spent =
            OptimOutcome::new(array![0.0], 0.0, Termination::MaxItersReached, 5, 20, Some(1.0));

        assert!(done.converged);
        assert!(!spent.converged);
        assert_eq!(spent.status.to_string(), "Maximum iterations reached");
    }
}
