//! minimizer::multi_start — parallel restarts from several seeds.
//!
//! Purpose
//! -------
//! Calibration objectives (log-periodic fits, GARCH-type likelihoods) are
//! multimodal, so callers run one optimization per seed and keep the
//! lowest objective. This module does that in parallel with `rayon`.
//!
//! Key behaviors
//! -------------
//! - One [`Minimizer::minimize`] call per seed, dispatched on the rayon
//!   global pool. Each run owns its state; only `f`, `data`, and the
//!   minimizer are shared (read-only).
//! - Every outcome is kept, in seed order, whether or not it converged.
//! - The winner is the run with the lowest finite `value`; ties go to the
//!   lowest seed index.
//!
//! Invariants & assumptions
//! ------------------------
//! - Results do not depend on scheduling: runs are independent and
//!   deterministic, and selection scans them in seed order.
//! - If no run reaches a finite value, seed 0 is reported as best.
//!
//! Conventions
//! -----------
//! - Errors are returned for the lowest failing seed index; an objective
//!   error in any run fails the whole call.
//!
//! Testing notes
//! -------------
//! - Unit tests cover selection rules (finite-only, ties), error paths, and
//!   agreement with sequential runs. `tests/` exercises a multimodal
//!   penalty objective end to end.
use rayon::prelude::*;

use crate::optimization::{
    errors::{OptError, OptResult},
    minimizer::{
        Theta,
        traits::{Bounds, Minimizer, Objective, OptimOutcome},
    },
};

/// Every run of a multi-start call plus the index of the best one.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiStartOutcome {
    pub best_index: usize,
    pub runs: Vec<OptimOutcome>,
}

impl MultiStartOutcome {
    /// The selected run.
    pub fn best(&self) -> &OptimOutcome {
        &self.runs[self.best_index]
    }

    /// Consume the outcome and keep only the selected run.
    pub fn into_best(mut self) -> OptimOutcome {
        self.runs.swap_remove(self.best_index)
    }
}

/// multi_start — minimize `f` from every seed in `starts` and pick the best.
///
/// Parameters
/// ----------
/// - `minimizer`: strategy shared by all runs.
/// - `f`, `data`: objective and payload, shared read-only across threads.
/// - `starts`: seeds; each is cloned into its own run.
/// - `bounds`: forwarded to every run.
///
/// Returns
/// -------
/// `OptResult<MultiStartOutcome>` with `runs[i]` the outcome from
/// `starts[i]`.
///
/// Errors
/// ------
/// - [`OptError::NoStartingPoints`] if `starts` is empty.
/// - The error of the lowest-indexed failing run otherwise.
pub fn multi_start<M, F>(
    minimizer: &M, f: &F, data: &F::Data, starts: &[Theta], bounds: &Bounds,
) -> OptResult<MultiStartOutcome>
where
    M: Minimizer + Sync,
    F: Objective + Sync,
    F::Data: Sync,
{
    if starts.is_empty() {
        return Err(OptError::NoStartingPoints);
    }

    let results: Vec<OptResult<OptimOutcome>> = starts
        .par_iter()
        .map(|theta0| minimizer.minimize(f, data, theta0.clone(), bounds))
        .collect();
    let runs = results.into_iter().collect::<OptResult<Vec<_>>>()?;

    let best_index = select_best(&runs);
    Ok(MultiStartOutcome { best_index, runs })
}

fn select_best(runs: &[OptimOutcome]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (index, run) in runs.iter().enumerate() {
        if !run.value.is_finite() {
            continue;
        }
        match best {
            Some((_, value)) if run.value >= value => {}
            _ => best = Some((index, run.value)),
        }
    }
    best.map_or(0, |(index, _)| index)
}
