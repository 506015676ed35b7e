//! Error types for enumeration inference.

use thiserror::Error;

/// Errors that can occur while answering a query against a Bayesian network.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
///
/// All public APIs return `Result<T, InferenceError>`; nothing in the engine
/// catches or retries an error, so whatever the network reports reaches the
/// caller of [`ask`](crate::ask) unchanged.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    /// The network does not know the requested identifier.
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    /// The network cannot resolve a conditional probability for the current
    /// evidence (e.g. a parent value is missing).
    #[error("undefined conditional probability for '{variable}': {reason}")]
    UndefinedConditional { variable: String, reason: String },

    /// Both branch masses are zero: the evidence is impossible under the network.
    #[error("degenerate distribution: branch probabilities sum to {total}")]
    DegenerateNormalization { total: f64 },

    /// The variable sequence is longer than the configured enumeration depth.
    #[error("enumeration over {variables} variables exceeds the depth limit of {limit}")]
    DepthLimitExceeded { variables: usize, limit: usize },

    /// Invalid configuration or network table input.
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Numerical stability error (NaN/Inf, negative mass).
    #[error("numerical error: {0}")]
    Numerical(String),
}

impl InferenceError {
    pub(crate) fn undefined_conditional(
        variable: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        InferenceError::UndefinedConditional {
            variable: variable.to_string(),
            reason: reason.into(),
        }
    }
}
