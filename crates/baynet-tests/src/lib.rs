//! Shared fixtures for the baynet integration suites.

use std::sync::{Arc, Once};

use baynet_core::{Evidence, InferenceError, TableNetwork};

/// The classic burglary/earthquake alarm network.
///
/// Order: Burglary, Earthquake, Alarm, JohnCalls, MaryCalls.
pub fn burglary_network() -> TableNetwork {
    try_burglary_network().expect("burglary fixture is well formed")
}

fn try_burglary_network() -> Result<TableNetwork, InferenceError> {
    let mut net = TableNetwork::new();
    net.add_root("Burglary", 0.001)?
        .add_root("Earthquake", 0.002)?
        .add_variable(
            "Alarm",
            &["Burglary", "Earthquake"],
            [
                ([true, true], 0.95),
                ([true, false], 0.94),
                ([false, true], 0.29),
                ([false, false], 0.001),
            ],
        )?
        .add_variable("JohnCalls", &["Alarm"], [([true], 0.90), ([false], 0.05)])?
        .add_variable("MaryCalls", &["Alarm"], [([true], 0.70), ([false], 0.01)])?;
    Ok(net)
}

/// A chain `X0 -> X1 -> ... -> X{len-1}` with the given prior and transition
/// probabilities P(Xi = true | X{i-1}).
pub fn chain_network(len: usize, prior: f64, given_true: f64, given_false: f64) -> TableNetwork {
    let mut net = TableNetwork::new();
    if len == 0 {
        return net;
    }
    net.add_root("X0", prior).expect("valid prior");
    for i in 1..len {
        let name = format!("X{}", i);
        let parent = format!("X{}", i - 1);
        net.add_variable(
            &name,
            &[parent.as_str()],
            [([true], given_true), ([false], given_false)],
        )
        .expect("valid transition");
    }
    net
}

/// Shorthand for a table-network identifier.
pub fn var(name: &str) -> Arc<str> {
    Arc::from(name)
}

/// Builds evidence from `(name, value)` pairs.
pub fn evidence(pairs: &[(&str, bool)]) -> Evidence<Arc<str>> {
    pairs.iter().map(|(name, value)| (*name, *value)).collect()
}

static LOGGING: Once = Once::new();

/// Routes engine events to the test harness output. Safe to call repeatedly.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
