//! Joint probability by exhaustive enumeration.
//!
//! For a variable sequence in topological order, the joint probability of the
//! evidence is the sum, over every completion of the unobserved variables, of
//! the product of each variable's conditional probability given its
//! predecessors:
//!
//! ```text
//! J([], e)      = 1
//! J([V | R], e) = P(V = e[V] | e) * J(R, e)                      if V observed
//!               = sum_v P(V = v | e + {V: v}) * J(R, e + {V: v})  otherwise
//! ```
//!
//! Evidence is passed downward by value (each summation branch works on its own
//! extended copy), so a caller's mapping is never modified, even when a lookup
//! fails part-way through.

use std::hash::Hash;

use crate::engine::errors::InferenceError;
use crate::engine::evidence::Evidence;
use crate::engine::network::{BayesNetwork, VariableNode, BOOLEAN_DOMAIN};

/// How the enumeration tree is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnumerationStrategy {
    /// Direct recursion over suffixes of the variable sequence.
    #[default]
    Recursive,
    /// Depth-first walk driven by a heap-allocated stack; recursion depth stays
    /// constant regardless of network size.
    ExplicitStack,
}

/// Configuration for enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnumerationConfig {
    pub strategy: EnumerationStrategy,
    /// Maximum number of variables a single evaluation may walk. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl EnumerationConfig {
    pub fn with_strategy(strategy: EnumerationStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub(crate) fn validate(self) -> Result<Self, InferenceError> {
        if self.max_depth == Some(0) {
            return Err(InferenceError::ValidationError(
                "enumeration: max_depth must be > 0 when set".into(),
            ));
        }
        Ok(self)
    }
}

/// Counters collected while evaluating a joint probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnumerationDiagnostics {
    /// Length of the variable sequence evaluated.
    pub variable_count: usize,
    /// Calls made to [`VariableNode::probability`].
    pub probability_lookups: usize,
    /// Visits to variables fixed by evidence (product step).
    pub observed_visits: usize,
    /// Visits to unobserved variables (summation step).
    pub summed_visits: usize,
}

impl EnumerationDiagnostics {
    /// Adds another run's counters into this one.
    pub fn accumulate(&mut self, other: &EnumerationDiagnostics) {
        self.variable_count = self.variable_count.max(other.variable_count);
        self.probability_lookups += other.probability_lookups;
        self.observed_visits += other.observed_visits;
        self.summed_visits += other.summed_visits;
    }
}

/// Joint probability of `evidence` over `variables` with default configuration.
pub fn joint_probability<N>(
    variables: &[N::Var],
    evidence: &Evidence<N::Var>,
    network: &N,
) -> Result<f64, InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    joint_probability_with_config(variables, evidence, network, EnumerationConfig::default())
}

/// Joint probability with explicit configuration.
pub fn joint_probability_with_config<N>(
    variables: &[N::Var],
    evidence: &Evidence<N::Var>,
    network: &N,
    config: EnumerationConfig,
) -> Result<f64, InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    joint_probability_with_config_diagnostics(variables, evidence, network, config)
        .map(|(probability, _)| probability)
}

/// Joint probability with explicit configuration and diagnostics.
pub fn joint_probability_with_config_diagnostics<N>(
    variables: &[N::Var],
    evidence: &Evidence<N::Var>,
    network: &N,
    config: EnumerationConfig,
) -> Result<(f64, EnumerationDiagnostics), InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    let config = config.validate()?;
    if let Some(limit) = config.max_depth {
        if variables.len() > limit {
            return Err(InferenceError::DepthLimitExceeded {
                variables: variables.len(),
                limit,
            });
        }
    }

    let mut diagnostics = EnumerationDiagnostics {
        variable_count: variables.len(),
        ..EnumerationDiagnostics::default()
    };
    let probability = match config.strategy {
        EnumerationStrategy::Recursive => {
            enumerate_recursive(variables, evidence, network, &mut diagnostics)?
        }
        EnumerationStrategy::ExplicitStack => {
            enumerate_with_stack(variables, evidence, network, &mut diagnostics)?
        }
    };

    tracing::trace!(
        strategy = ?config.strategy,
        variables = diagnostics.variable_count,
        lookups = diagnostics.probability_lookups,
        probability,
        "joint probability evaluated"
    );
    Ok((probability, diagnostics))
}

fn conditional<N>(
    network: &N,
    variable: &N::Var,
    value: bool,
    evidence: &Evidence<N::Var>,
    diagnostics: &mut EnumerationDiagnostics,
) -> Result<f64, InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    diagnostics.probability_lookups += 1;
    network.get_var(variable)?.probability(value, evidence)
}

fn enumerate_recursive<N>(
    variables: &[N::Var],
    evidence: &Evidence<N::Var>,
    network: &N,
    diagnostics: &mut EnumerationDiagnostics,
) -> Result<f64, InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    let Some((head, rest)) = variables.split_first() else {
        return Ok(1.0);
    };

    if let Some(observed) = evidence.get(head) {
        diagnostics.observed_visits += 1;
        let p = conditional(network, head, observed, evidence, diagnostics)?;
        return Ok(p * enumerate_recursive(rest, evidence, network, diagnostics)?);
    }

    diagnostics.summed_visits += 1;
    let mut total = 0.0;
    for value in BOOLEAN_DOMAIN {
        let extended = evidence.with(head.clone(), value);
        let p = conditional(network, head, value, &extended, diagnostics)?;
        total += p * enumerate_recursive(rest, &extended, network, diagnostics)?;
    }
    Ok(total)
}

/// One pending node of the enumeration tree: the next variable to visit, the
/// evidence fixed so far and the product of conditionals along the path.
///
/// `assigned` marks a summation branch whose variable has already been fixed
/// in `evidence` but whose conditional has not been looked up yet. Deferring
/// that lookup until the frame is popped keeps the lookup order identical to
/// the recursive walk.
struct Frame<V: Eq + Hash> {
    depth: usize,
    evidence: Evidence<V>,
    weight: f64,
    assigned: Option<bool>,
}

fn enumerate_with_stack<N>(
    variables: &[N::Var],
    evidence: &Evidence<N::Var>,
    network: &N,
    diagnostics: &mut EnumerationDiagnostics,
) -> Result<f64, InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    let mut stack = vec![Frame {
        depth: 0,
        evidence: evidence.clone(),
        weight: 1.0,
        assigned: None,
    }];
    let mut total = 0.0;

    while let Some(frame) = stack.pop() {
        let Some(variable) = variables.get(frame.depth) else {
            total += frame.weight;
            continue;
        };

        if let Some(value) = frame.assigned {
            let p = conditional(network, variable, value, &frame.evidence, diagnostics)?;
            stack.push(Frame {
                depth: frame.depth + 1,
                evidence: frame.evidence,
                weight: frame.weight * p,
                assigned: None,
            });
            continue;
        }

        if let Some(observed) = frame.evidence.get(variable) {
            diagnostics.observed_visits += 1;
            let p = conditional(network, variable, observed, &frame.evidence, diagnostics)?;
            stack.push(Frame {
                depth: frame.depth + 1,
                evidence: frame.evidence,
                weight: frame.weight * p,
                assigned: None,
            });
            continue;
        }

        diagnostics.summed_visits += 1;
        // Reversed so the first domain value is explored first.
        for value in BOOLEAN_DOMAIN.into_iter().rev() {
            stack.push(Frame {
                depth: frame.depth,
                evidence: frame.evidence.with(variable.clone(), value),
                weight: frame.weight,
                assigned: Some(value),
            });
        }
    }

    Ok(total)
}
