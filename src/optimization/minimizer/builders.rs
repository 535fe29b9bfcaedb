//! minimizer::builders — argmin L-BFGS solver construction helpers.
//!
//! Purpose
//! -------
//! Build argmin L-BFGS solvers from [`LbfgsOptions`] so that
//! [`ArgminLbfgs`](super::ArgminLbfgs) never touches argmin generics
//! directly.
//!
//! Key behaviors
//! -------------
//! - Pair L-BFGS with either a More–Thuente or a Hager–Zhang line search.
//! - Feed the Wolfe coefficients `(c1, c2)` into the line search: More–
//!   Thuente takes them as `(c1, c2)`, Hager–Zhang as `(delta, sigma)`.
//! - Apply the history depth and the gradient-norm tolerance through the
//!   shared [`configure_lbfgs`] helper.
//!
//! Invariants & assumptions
//! ------------------------
//! - Options are expected to be validated already; argmin repeats its own
//!   range checks and any rejection is surfaced as an [`OptError`] via the
//!   crate's `From<argmin::core::Error>` conversion.
//!
//! Conventions
//! -----------
//! - Builders never set the initial point or the iteration budget; the
//!   runner applies both to the executor state.
//!
//! Testing notes
//! -------------
//! - Unit tests check construction with default and custom options and the
//!   rejection path for coefficients argmin refuses. End-to-end runs live in
//!   `run.rs` and `tests/`.
//!
//! [`OptError`]: crate::optimization::errors::OptError
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    minimizer::{
        traits::LbfgsOptions,
        types::{
            Cost, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente, MoreThuenteLS, Theta,
        },
    },
};

/// build_optimizer_hager_zhang — construct L-BFGS with Hager–Zhang line search.
///
/// Parameters
/// ----------
/// - `opts`: `&LbfgsOptions`
///   Consults `mem`, `tol_grad`, and `(c1, c2)` as Hager–Zhang's
///   `(delta, sigma)`.
///
/// Returns
/// -------
/// `OptResult<LbfgsHagerZhang>`
///
/// Errors
/// ------
/// - `OptError` (via `From<argmin::core::Error>`) when argmin rejects the
///   coefficients (it needs `0 < delta < 1` and `delta ≤ sigma < 1`) or
///   the tolerance.
pub fn build_optimizer_hager_zhang(opts: &LbfgsOptions) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new().with_delta_sigma(opts.c1, opts.c2)?;
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, opts.mem);
    configure_lbfgs(lbfgs, opts)
}

/// build_optimizer_more_thuente — construct L-BFGS with More–Thuente line search.
///
/// Parameters
/// ----------
/// - `opts`: `&LbfgsOptions`
///   Consults `mem`, `tol_grad`, `c1`, and `c2`.
///
/// Returns
/// -------
/// `OptResult<LbfgsMoreThuente>`
///
/// Errors
/// ------
/// - `OptError` (via `From<argmin::core::Error>`) when argmin rejects the
///   coefficients or the tolerance.
pub fn build_optimizer_more_thuente(opts: &LbfgsOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new().with_c(opts.c1, opts.c2)?;
    let lbfgs = LbfgsMoreThuente::new(more_thuente, opts.mem);
    configure_lbfgs(lbfgs, opts)
}

/// configure_lbfgs — apply the gradient tolerance to an L-BFGS solver.
///
/// Generic over the line-search type so both builders share it.
///
/// # Errors
/// `OptError` when argmin rejects `opts.tol_grad`.
pub fn configure_lbfgs<L>(
    solver: LBFGS<L, Theta, Grad, Cost>, opts: &LbfgsOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    Ok(solver.with_tolerance_grad(opts.tol_grad)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{errors::OptError, minimizer::types::DEFAULT_LBFGS_MEM};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction of both solver variants from default and custom options.
    // - Argmin-side rejection of coefficients surfacing as `OptError`.
    //
    // They intentionally DO NOT cover:
    // - Executor behavior, which is tested with the runner.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Default options are accepted by both line searches.
    fn builders_accept_default_options() {
        // Arrange
        let opts = LbfgsOptions::default();

        // Act
        let hz = build_optimizer_hager_zhang(&opts);
        let mt = build_optimizer_more_thuente(&opts);

        // Assert
        assert!(hz.is_ok(), "Hager–Zhang builder should accept defaults");
        assert!(mt.is_ok(), "More–Thuente builder should accept defaults");
    }

    #[test]
    // Purpose
    // -------
    // Custom memory and tolerances flow through without error.
    fn builders_respect_custom_memory_and_tolerance() {
        let opts = LbfgsOptions { mem: 3, tol_grad: 1e-9, c1: 1e-3, c2: 0.5, ..LbfgsOptions::default() };

        assert!(build_optimizer_hager_zhang(&opts).is_ok());
        assert!(build_optimizer_more_thuente(&opts).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Options bypassing `LbfgsOptions::validate` (fields are public) still
    // cannot slip crossed coefficients past argmin; its refusal must come
    // back as a crate error rather than a panic.
    //
    // Given
    // -----
    // - `c1 = 0.5`, `c2 = 0.4`.
    //
    // Expect
    // ------
    // - `Err(OptError::InvalidParameter { .. })` from both builders.
    fn builders_reject_crossed_coefficients() {
        let opts = LbfgsOptions { c1: 0.5, c2: 0.4, ..LbfgsOptions::default() };

        // argmin's solvers do not implement `Debug`, so `unwrap_err` is unavailable.
        let Err(hz) = build_optimizer_hager_zhang(&opts) else {
            panic!("Hager–Zhang builder accepted crossed coefficients");
        };
        let Err(mt) = build_optimizer_more_thuente(&opts) else {
            panic!("More–Thuente builder accepted crossed coefficients");
        };

        assert!(matches!(hz, OptError::InvalidParameter { .. }), "got {hz:?}");
        assert!(matches!(mt, OptError::InvalidParameter { .. }), "got {mt:?}");
    }

    #[test]
    fn configure_lbfgs_applies_valid_tolerance() {
        let raw = LBFGS::new(MoreThuenteLS::new(), DEFAULT_LBFGS_MEM);

        let configured = configure_lbfgs(raw, &LbfgsOptions::default());

        assert!(configured.is_ok());
    }
}
