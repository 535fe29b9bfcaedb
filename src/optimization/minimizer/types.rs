//! minimizer::types — shared numeric aliases, algorithm constants, and
//! argmin solver wiring.
//!
//! Purpose
//! -------
//! Centralize the numeric types and fixed constants used by the minimizer
//! so that the rest of the module stays agnostic to `ndarray` and argmin
//! generics.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors, gradients, and scalar
//!   costs (`Theta`, `Grad`, `Cost`).
//! - Fix the algorithm constants that are not part of [`LbfgsOptions`]:
//!   finite-difference step, curvature admission threshold, and the
//!   backtracking schedule.
//! - Expose pre-wired argmin L-BFGS aliases for the Wolfe line searches.
//!
//! Invariants & assumptions
//! ------------------------
//! - All vectors are `ndarray::Array1<f64>` and share one dimension `n`
//!   throughout a run.
//! - `Cost` is the raw objective value; the minimizer never flips signs.
//!
//! Testing notes
//! -------------
//! - Aliases and constants only; exercised by the surrounding modules.
//!
//! [`LbfgsOptions`]: crate::optimization::minimizer::LbfgsOptions
use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    quasinewton::LBFGS,
};
use ndarray::Array1;

/// Parameter vector `θ` being optimized.
pub type Theta = Array1<f64>;

/// Gradient vector `∇f(θ)`, same shape as `Theta`.
pub type Grad = Array1<f64>;

/// Scalar objective value.
pub type Cost = f64;

/// Default history depth (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 10;

/// Default iteration budget.
pub const DEFAULT_MAX_ITER: usize = 500;

/// Default gradient-norm convergence tolerance.
pub const DEFAULT_TOL_GRAD: f64 = 1e-6;

/// Default initial step length tried by the line search.
pub const DEFAULT_INITIAL_STEP: f64 = 1.0;

/// Default sufficient-decrease (Armijo) coefficient.
pub const DEFAULT_C1: f64 = 1e-4;

/// Default curvature (Wolfe) coefficient.
pub const DEFAULT_C2: f64 = 0.9;

/// Central-difference step `h`.
pub const FD_STEP: f64 = 1e-7;

/// History entries need `yᵗs` strictly above this to be admitted.
pub const CURVATURE_EPS: f64 = 1e-10;

/// Step lengths tried by the backtracking search: `α₀, α₀/2, …, α₀/2¹⁹`.
pub const MAX_LS_TRIALS: usize = 20;

/// Step contraction factor between two backtracking trials.
pub const BACKTRACK_FACTOR: f64 = 0.5;

/// Hager–Zhang line search specialized to this crate's numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

/// More–Thuente line search specialized to this crate's numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// argmin L-BFGS wired to the Hager–Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Theta, Grad, Cost>;

/// argmin L-BFGS wired to the More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;
