//! optimization::errors — unified error surface for the minimizer stack.
//!
//! Every fallible entry point in [`crate::optimization`] returns
//! [`OptResult<T>`]. Configuration mistakes, malformed inputs, objective
//! failures, and argmin backend errors are all normalized into [`OptError`]
//! so callers never see raw `argmin::core::Error` values.
//!
//! Non-convergence and rejected curvature updates are **not** errors; they
//! are reported through [`OptimOutcome`](crate::optimization::minimizer::OptimOutcome).
use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Initial point ----
    /// The initial parameter vector has no coordinates.
    EmptyTheta,

    /// Initial parameter coordinates must be finite.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },

    /// Parameter vector length does not match what the objective expects.
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },

    // ---- Bounds ----
    /// Bound vectors must both be empty or both match the parameter dimension.
    BoundsDimMismatch {
        expected: usize,
        lower: usize,
        upper: usize,
    },

    /// Lower bound above upper bound, or a NaN bound.
    InvalidBounds {
        index: usize,
        lower: f64,
        upper: f64,
    },

    // ---- LbfgsOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// History depth needs to be at least 1.
    InvalidLBFGSMem {
        mem: usize,
        reason: &'static str,
    },
    /// Initial line-search step needs to be positive and finite.
    InvalidInitialStep {
        step: f64,
        reason: &'static str,
    },
    /// Line-search coefficients must satisfy `0 < c1 < c2 < 1`.
    InvalidLineSearchCoeffs {
        c1: f64,
        c2: f64,
        reason: &'static str,
    },
    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    // ---- Objective ----
    /// Objective returned a non-finite value where the backend cannot absorb it.
    NonFiniteCost {
        value: f64,
    },
    /// Objective-specific failure reported by the caller.
    ObjectiveFailed {
        text: String,
    },

    // ---- Multi-start ----
    /// A multi-start run needs at least one starting point.
    NoStartingPoints,

    // ---- Outcome ----
    /// The backend finished without reporting a parameter estimate.
    MissingThetaHat,

    // ---- Argmin ----
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Initial point ----
            OptError::EmptyTheta => {
                write!(f, "Initial parameter vector is empty")
            }
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid theta input at index {index}: {value}, must be finite")
            }
            OptError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }

            // ---- Bounds ----
            OptError::BoundsDimMismatch { expected, lower, upper } => {
                write!(
                    f,
                    "Bounds dimension mismatch: expected {expected} (or empty), found lower {lower}, upper {upper}"
                )
            }
            OptError::InvalidBounds { index, lower, upper } => {
                write!(f, "Invalid bounds at index {index}: lower {lower} must not exceed upper {upper}")
            }

            // ---- LbfgsOptions ----
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::InvalidLBFGSMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }
            OptError::InvalidInitialStep { step, reason } => {
                write!(f, "Invalid initial step length {step}: {reason}")
            }
            OptError::InvalidLineSearchCoeffs { c1, c2, reason } => {
                write!(f, "Invalid line-search coefficients c1 = {c1}, c2 = {c2}: {reason}")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }

            // ---- Objective ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }
            OptError::ObjectiveFailed { text } => {
                write!(f, "Objective evaluation failed: {text}")
            }

            // ---- Multi-start ----
            OptError::NoStartingPoints => {
                write!(f, "Multi-start requires at least one starting point")
            }

            // ---- Outcome ----
            OptError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    /// Map an argmin error back into the crate surface.
    ///
    /// An `OptError` raised by the objective travels through argmin boxed in
    /// its `Error`; it is recovered unchanged. Argmin's own error kinds are
    /// mapped onto the matching variants and anything else becomes
    /// `BackendError`.
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Recovery of an `OptError` that was boxed into an argmin `Error`.
    // - Mapping of argmin's own error kinds.
    // - Display formatting for a few representative variants.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // An objective error that crosses the argmin boundary must come back as
    // the same `OptError`, not as an opaque backend string.
    fn from_argmin_error_recovers_boxed_opt_error() {
        // Arrange
        let original = OptError::ThetaLengthMismatch { expected: 3, actual: 2 };
        let boxed: Error = original.clone().into();

        // Act
        let recovered = OptError::from(boxed);

        // Assert
        assert_eq!(recovered, original);
    }

    #[test]
    // Purpose
    // -------
    // Argmin's `InvalidParameter` maps onto the dedicated variant.
    fn from_argmin_error_maps_invalid_parameter() {
        let err: Error = ArgminError::InvalidParameter { text: "c1 out of range".to_string() }.into();

        let mapped = OptError::from(err);

        assert_eq!(mapped, OptError::InvalidParameter { text: "c1 out of range".to_string() });
    }

    #[test]
    fn display_mentions_offending_values() {
        let err = OptError::InvalidLineSearchCoeffs { c1: 0.5, c2: 0.1, reason: "c1 < c2" };
        let text = err.to_string();
        assert!(text.contains("0.5"));
        assert!(text.contains("0.1"));
        assert_eq!(OptError::EmptyTheta.to_string(), "Initial parameter vector is empty");
    }
}
