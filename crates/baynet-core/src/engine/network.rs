//! The network contract consumed by the inference engine.
//!
//! The engine never looks inside a network. It needs two behaviors:
//! - an ordered sequence of every variable identifier, parents before children
//! - per variable, the conditional probability of a candidate value given the
//!   parent values found in the current evidence

use std::fmt;
use std::hash::Hash;

use crate::engine::errors::InferenceError;
use crate::engine::evidence::Evidence;

/// Values every variable ranges over, in enumeration order.
///
/// Both the query entry point and the evaluator iterate this constant, so the
/// boolean domain is fixed in exactly one place.
pub const BOOLEAN_DOMAIN: [bool; 2] = [true, false];

/// A single variable's conditional distribution.
pub trait VariableNode<V: Eq + Hash> {
    /// P(variable = `value` | parent values in `evidence`).
    ///
    /// Implementations report a missing parent value as
    /// [`InferenceError::UndefinedConditional`].
    fn probability(&self, value: bool, evidence: &Evidence<V>) -> Result<f64, InferenceError>;
}

/// A discrete Bayesian network over boolean variables.
pub trait BayesNetwork {
    /// Opaque, hashable variable identifier.
    type Var: Clone + Eq + Hash + fmt::Display;
    /// Handle returned by [`get_var`](Self::get_var).
    type Node: VariableNode<Self::Var>;

    /// All variable identifiers in a topological order (parents first).
    fn variable_names(&self) -> &[Self::Var];

    /// Resolves an identifier, failing with [`InferenceError::UnknownVariable`].
    fn get_var(&self, name: &Self::Var) -> Result<&Self::Node, InferenceError>;
}
