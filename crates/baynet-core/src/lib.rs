//! # baynet core
//!
//! Exact inference over discrete Bayesian networks of boolean variables using
//! enumeration-ask.
//!
//! ```rust
//! use std::sync::Arc;
//! use baynet_core::{ask, Evidence, TableNetwork};
//!
//! let mut net = TableNetwork::new();
//! net.add_root("Rain", 0.2)?
//!     .add_variable("WetGrass", &["Rain"], [([true], 0.9), ([false], 0.1)])?;
//!
//! let evidence: Evidence<Arc<str>> = [("WetGrass", true)].into_iter().collect();
//! let p = ask(&Arc::from("Rain"), true, &evidence, &net)?;
//! assert!((p - 0.18 / 0.26).abs() < 1e-12);
//! # Ok::<(), baynet_core::InferenceError>(())
//! ```

pub mod engine;

// Re-export commonly used types
pub use engine::enumeration::{
    joint_probability, joint_probability_with_config, joint_probability_with_config_diagnostics,
    EnumerationConfig, EnumerationDiagnostics, EnumerationStrategy,
};
pub use engine::errors::InferenceError;
pub use engine::evidence::Evidence;
pub use engine::network::{BayesNetwork, VariableNode, BOOLEAN_DOMAIN};
pub use engine::normalize::normalize;
pub use engine::query::{
    ask, ask_distribution, ask_distribution_with_config, ask_distribution_with_config_diagnostics,
    ask_with_config, Posterior, QueryDiagnostics,
};
pub use engine::table::{TableNetwork, TableVariable};
