//! calibration_optim — derivative-free L-BFGS for model calibration.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers that fit quantitative-finance
//! models (log-periodic power laws, GARCH-type volatility models, option
//! surfaces) by minimizing a scalar loss over a real parameter vector
//! when no analytic gradient is available.
//!
//! Key behaviors
//! -------------
//! - Re-export the optimization layer (`optimization`) as the public crate
//!   surface.
//! - Gradients are estimated by central differences; directions come from
//!   limited-memory BFGS; steps from an Armijo backtracking search (native
//!   strategy) or an argmin Wolfe search (argmin strategy).
//!
//! Conventions
//! -----------
//! - Everything that can fail returns `OptResult<T>`; library code never
//!   panics on bad input.
//! - Progress output requires the `obs_slog` feature and `verbose = true`.
//!
//! Downstream usage
//! ----------------
//! ```
//! use calibration_optim::optimization::prelude::*;
//! use ndarray::array;
//!
//! let f = FnObjective::new(|x: &Theta| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2));
//! let out = minimize(&f, &(), array![0.0, 0.0], &LbfgsOptions::default())?;
//! assert!(out.converged);
//! # Ok::<(), OptError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each component; end-to-end scenarios live in
//!   `tests/`.

pub mod optimization;
