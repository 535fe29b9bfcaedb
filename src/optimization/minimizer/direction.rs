//! L-BFGS two-loop recursion.
//!
//! Applies the implicit inverse-Hessian approximation held in a [`History`]
//! to the current gradient without ever forming a matrix.
use crate::optimization::minimizer::{Grad, history::History};

/// two_loop_direction — search direction `d = −H·g`.
///
/// Parameters
/// ----------
/// - `grad`: current gradient `g`.
/// - `history`: admitted curvature pairs, oldest → newest.
///
/// Returns
/// -------
/// A direction of the same length as `grad`. With an empty history this is
/// exactly `−g` (steepest descent).
///
/// Notes
/// -----
/// - The initial Hessian scale `γ = (sᵗy)/(yᵗy)` comes from the newest pair.
///   Admission requires `sᵗy > 0`, so `y ≠ 0` and `γ` is finite.
/// - Cost is `O(m·n)` with `m = history.len()`.
pub fn two_loop_direction(grad: &Grad, history: &History) -> Grad {
    let mut q = grad.clone();
    let mut alphas = vec![0.0; history.len()];

    for (i, entry) in history.entries().enumerate().rev() {
        let alpha = entry.rho() * entry.s().dot(&q);
        q.scaled_add(-alpha, entry.y());
        alphas[i] = alpha;
    }

    if let Some(last) = history.newest() {
        let gamma = last.s().dot(last.y()) / last.y().dot(last.y());
        q *= gamma;
    }

    for (entry, alpha) in history.entries().zip(alphas.iter()) {
        let beta = entry.rho() * entry.y().dot(&q);
        q.scaled_add(alpha - beta, entry.s());
    }

    -q
}
