//! optimization — L-BFGS minimizer and unified error surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer shared by calibration routines: a
//! derivative-free L-BFGS minimizer (`minimizer`) and a single error/result
//! surface (`errors`). Callers implement an objective, choose options, and
//! obtain fitted parameters and diagnostics without touching backend solver
//! details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing** objectives `f(θ)` from
//!   function values alone, with a native strategy and an argmin-backed
//!   Wolfe strategy behind one trait.
//! - Normalize configuration issues, objective failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Conventions
//! -----------
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see raw argmin errors.
//! - This module performs no I/O unless the `obs_slog` feature is enabled
//!   and a run is configured as verbose.
//!
//! Downstream usage
//! ----------------
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`, which forwards the minimizer prelude and
//!   the core error types.

pub mod errors;
pub mod minimizer;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use calibration_optim::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::minimizer::prelude::*;
}
