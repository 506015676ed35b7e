//! Normalization of unnormalized probability masses.
//!
//! Computes `p_k = m_k / sum_j m_j` over a fixed-size array of masses. A zero
//! total is reported as a typed error instead of producing `NaN`.

use crate::engine::errors::InferenceError;

/// Rescales `masses` so they sum to one.
///
/// # Errors
///
/// - [`InferenceError::Numerical`] if any mass is negative or not finite.
/// - [`InferenceError::DegenerateNormalization`] if the total is zero.
pub fn normalize<const N: usize>(masses: [f64; N]) -> Result<[f64; N], InferenceError> {
    if let Some(bad) = masses.iter().find(|m| !m.is_finite() || **m < 0.0) {
        return Err(InferenceError::Numerical(format!(
            "cannot normalize mass {} (masses must be finite and non-negative)",
            bad
        )));
    }

    let total: f64 = masses.iter().sum();
    if !total.is_finite() {
        return Err(InferenceError::Numerical(format!(
            "mass total overflowed to {}",
            total
        )));
    }
    if total == 0.0 {
        tracing::warn!(
            masses = ?masses,
            "normalization over zero total mass; evidence is impossible under the network"
        );
        return Err(InferenceError::DegenerateNormalization { total });
    }

    Ok(masses.map(|m| m / total))
}
