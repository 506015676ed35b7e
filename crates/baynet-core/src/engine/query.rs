//! Enumeration-ask: posterior probability of one variable given evidence.
//!
//! The query variable is fixed to each domain value in turn, the joint
//! probability of the extended evidence is computed over the whole network,
//! and the resulting pair of masses is normalized.

use crate::engine::enumeration::{
    joint_probability_with_config_diagnostics, EnumerationConfig, EnumerationDiagnostics,
};
use crate::engine::errors::InferenceError;
use crate::engine::evidence::Evidence;
use crate::engine::network::{BayesNetwork, BOOLEAN_DOMAIN};
use crate::engine::normalize::normalize;

/// Normalized distribution of a boolean query variable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Posterior {
    pub p_true: f64,
    pub p_false: f64,
}

impl Posterior {
    /// Probability assigned to `value`.
    pub fn probability(&self, value: bool) -> f64 {
        if value {
            self.p_true
        } else {
            self.p_false
        }
    }
}

/// Per-query counters: the unnormalized branch masses and the combined
/// enumeration counters of both branches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryDiagnostics {
    /// Joint probability of the evidence with the query variable true.
    pub mass_true: f64,
    /// Joint probability of the evidence with the query variable false.
    pub mass_false: f64,
    pub enumeration: EnumerationDiagnostics,
}

/// P(`variable` = `value` | `evidence`) under `network`.
///
/// # Errors
///
/// - Any error reported by the network (unknown identifier, undefined conditional).
/// - [`InferenceError::DegenerateNormalization`] when the evidence has zero probability.
pub fn ask<N>(
    variable: &N::Var,
    value: bool,
    evidence: &Evidence<N::Var>,
    network: &N,
) -> Result<f64, InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    ask_with_config(variable, value, evidence, network, EnumerationConfig::default())
}

/// [`ask`] with explicit enumeration configuration.
pub fn ask_with_config<N>(
    variable: &N::Var,
    value: bool,
    evidence: &Evidence<N::Var>,
    network: &N,
    config: EnumerationConfig,
) -> Result<f64, InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    ask_distribution_with_config(variable, evidence, network, config)
        .map(|posterior| posterior.probability(value))
}

/// Full posterior distribution of `variable` given `evidence`.
pub fn ask_distribution<N>(
    variable: &N::Var,
    evidence: &Evidence<N::Var>,
    network: &N,
) -> Result<Posterior, InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    ask_distribution_with_config(variable, evidence, network, EnumerationConfig::default())
}

/// Full posterior distribution with explicit enumeration configuration.
pub fn ask_distribution_with_config<N>(
    variable: &N::Var,
    evidence: &Evidence<N::Var>,
    network: &N,
    config: EnumerationConfig,
) -> Result<Posterior, InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    ask_distribution_with_config_diagnostics(variable, evidence, network, config)
        .map(|(posterior, _)| posterior)
}

/// Full posterior distribution with explicit configuration and diagnostics.
///
/// If `evidence` already fixes `variable`, each branch overrides that entry
/// with the candidate value.
#[tracing::instrument(level = "debug", skip_all, fields(variable = %variable))]
pub fn ask_distribution_with_config_diagnostics<N>(
    variable: &N::Var,
    evidence: &Evidence<N::Var>,
    network: &N,
    config: EnumerationConfig,
) -> Result<(Posterior, QueryDiagnostics), InferenceError>
where
    N: BayesNetwork + ?Sized,
{
    network.get_var(variable)?;

    let mut masses = [0.0; BOOLEAN_DOMAIN.len()];
    let mut enumeration = EnumerationDiagnostics::default();
    for (mass, candidate) in masses.iter_mut().zip(BOOLEAN_DOMAIN) {
        let extended = evidence.with(variable.clone(), candidate);
        let (joint, branch) = joint_probability_with_config_diagnostics(
            network.variable_names(),
            &extended,
            network,
            config,
        )?;
        *mass = joint;
        enumeration.accumulate(&branch);
    }

    let [p_true, p_false] = normalize(masses)?;
    let diagnostics = QueryDiagnostics {
        mass_true: masses[0],
        mass_false: masses[1],
        enumeration,
    };
    tracing::debug!(
        evidence = evidence.len(),
        mass_true = diagnostics.mass_true,
        mass_false = diagnostics.mass_false,
        lookups = enumeration.probability_lookups,
        p_true,
        "enumeration-ask complete"
    );

    Ok((Posterior { p_true, p_false }, diagnostics))
}
