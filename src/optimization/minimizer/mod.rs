//! minimizer — derivative-free L-BFGS for calibration objectives.
//!
//! Purpose
//! -------
//! Minimize scalar objectives `f(θ)` over unconstrained real vectors when
//! only function values are available, which is the situation of every
//! calibration routine in this crate's callers (log-periodic bubble fits,
//! GARCH-type likelihoods, volatility-surface fits). Callers implement one
//! trait, [`Objective`], and either call [`minimize`] or pick a
//! [`Minimizer`] strategy explicitly.
//!
//! Key behaviors
//! -------------
//! - [`finite_diff`]: central-difference gradients (`h = 1e-7`, `2n`
//!   evaluations each).
//! - [`history`]: bounded FIFO of curvature pairs `(s, y, ρ)`; pairs with
//!   `yᵗs ≤ 1e-10` are rejected.
//! - [`direction`]: two-loop recursion producing `d = −H·g`.
//! - [`line_search`]: Armijo backtracking that never fails on its own.
//! - [`lbfgs`]: the native loop ([`Lbfgs`]), tying the pieces together.
//! - [`argmin_lbfgs`]: [`ArgminLbfgs`], the same algorithm delegated to
//!   `argmin` with a More–Thuente or Hager–Zhang Wolfe line search
//!   ([`adapter`], [`builders`], [`run`]).
//! - [`multi_start`](mod@multi_start): parallel restarts with best-run
//!   selection.
//!
//! Invariants & assumptions
//! ------------------------
//! - The minimizer never flips signs: [`OptimOutcome::value`] is `f(θ̂)`.
//! - Objective errors are the only run-time failures of the native loop;
//!   non-convergence, rejected curvature, and non-finite costs degrade the
//!   result instead.
//! - Strategies hold immutable configuration only, so one instance can be
//!   shared across threads.
//!
//! Conventions
//! -----------
//! - Parameters are `ndarray::Array1<f64>` ([`Theta`]). Any mapping from a
//!   constrained model space happens in the objective.
//! - [`Bounds`] are accepted and shape-checked but not enforced; objectives
//!   express constraints as penalties.
//! - Errors bubble up as [`OptResult<T>`] / [`OptError`].
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its local contract.
//! - `tests/lbfgs_scenarios.rs` runs both strategies end to end on convex,
//!   Rosenbrock, flat, and penalty-shaped objectives.
//!
//! [`OptResult<T>`]: crate::optimization::errors::OptResult
//! [`OptError`]: crate::optimization::errors::OptError

pub mod adapter;
pub mod api;
pub mod argmin_lbfgs;
pub mod builders;
pub mod direction;
pub mod finite_diff;
pub mod history;
pub mod lbfgs;
pub mod line_search;
pub mod multi_start;
mod observer;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::argmin_lbfgs::ArgminLbfgs;
pub use self::lbfgs::Lbfgs;
pub use self::multi_start::{MultiStartOutcome, multi_start};
pub use self::traits::{
    Bounds, FnObjective, LbfgsOptions, Minimizer, Objective, OptimOutcome, Termination,
    WolfeLineSearch,
};
pub use self::types::{Cost, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use calibration_optim::optimization::minimizer::prelude::*;
//
// to import the main minimizer surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::argmin_lbfgs::ArgminLbfgs;
    pub use super::lbfgs::Lbfgs;
    pub use super::multi_start::multi_start;
    pub use super::traits::{
        Bounds, FnObjective, LbfgsOptions, Minimizer, Objective, OptimOutcome, Termination,
        WolfeLineSearch,
    };
    pub use super::types::{Cost, Grad, Theta};
}
