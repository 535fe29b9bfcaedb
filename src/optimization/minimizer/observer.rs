//! Progress reporting for verbose runs.
//!
//! The minimizer performs no I/O by default. With the `obs_slog` feature
//! enabled and `LbfgsOptions::verbose == true`, the native loop writes
//! structured `slog` records to a non-blocking terminal drain, matching
//! the `argmin_observer_slog` output used by the argmin strategy. Without
//! the feature every method compiles to nothing.
//!
//! The drain (and its `slog_async` worker thread) is built once per process
//! and shared, so verbose multi-start runs add child loggers, not threads.
//! The argmin strategy's `SlogLogger::term_noblock` still builds its own
//! drain per run.
use crate::optimization::minimizer::{Cost, traits::OptimOutcome};

#[cfg(feature = "obs_slog")]
use slog::{Drain, Logger, debug, info, o};
#[cfg(feature = "obs_slog")]
use std::sync::OnceLock;

#[cfg(feature = "obs_slog")]
static TERM_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Per-run progress sink.
pub(crate) struct ProgressLog {
    #[cfg(feature = "obs_slog")]
    logger: Option<Logger>,
}

impl ProgressLog {
    #[cfg(feature = "obs_slog")]
    pub(crate) fn new(verbose: bool, strategy: &'static str) -> Self {
        let logger = verbose.then(|| term_logger().new(o!("strategy" => strategy)));
        Self { logger }
    }

    #[cfg(not(feature = "obs_slog"))]
    pub(crate) fn new(_verbose: bool, _strategy: &'static str) -> Self {
        Self {}
    }

    /// State at the initial point, before the first iteration.
    pub(crate) fn start(&self, dim: usize, value: Cost, grad_norm: f64) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            info!(logger, "init"; "dim" => dim, "cost" => value, "grad_norm" => grad_norm);
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = (dim, value, grad_norm);
    }

    /// One completed update step.
    pub(crate) fn iteration(
        &self, iter: usize, value: Cost, grad_norm: f64, step: f64, accepted: bool,
    ) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            info!(
                logger, "iter";
                "iter" => iter,
                "cost" => value,
                "grad_norm" => grad_norm,
                "step" => step,
                "armijo" => accepted
            );
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = (iter, value, grad_norm, step, accepted);
    }

    /// A curvature pair failed admission and was dropped.
    pub(crate) fn curvature_skipped(&self, iter: usize, sy: f64) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            debug!(logger, "curvature update skipped"; "iter" => iter, "sy" => sy);
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = (iter, sy);
    }

    pub(crate) fn finished(&self, outcome: &OptimOutcome) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            info!(
                logger, "done";
                "status" => %outcome.status,
                "iterations" => outcome.iterations,
                "cost" => outcome.value,
                "fn_evals" => outcome.fn_evals
            );
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = outcome;
    }
}

/// Process-wide terminal logger, built on first use.
#[cfg(feature = "obs_slog")]
fn term_logger() -> &'static Logger {
    TERM_LOGGER.get_or_init(|| {
        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        let drain = slog_async::Async::new(drain).build().fuse();
        Logger::root(drain, o!())
    })
}
