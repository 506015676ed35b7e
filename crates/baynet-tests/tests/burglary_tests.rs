//! Analytical tests against the burglary/earthquake alarm network.
//!
//! Expected values come from summing the full joint distribution by hand
//! (32 atomic events) and match the textbook enumeration-ask worked example.

use baynet_core::{
    ask, ask_distribution, ask_distribution_with_config_diagnostics, joint_probability,
    BayesNetwork, EnumerationConfig, Evidence,
};
use baynet_tests::{burglary_network, evidence, init_test_logging, var};

fn assert_close(actual: f64, expected: f64, tol: f64, label: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{} mismatch: expected {:.15}, got {:.15}, diff={:.3e}",
        label,
        expected,
        actual,
        (actual - expected).abs()
    );
}

#[test]
fn burglary_given_both_calls_matches_textbook() {
    init_test_logging();
    let net = burglary_network();
    let ev = evidence(&[("JohnCalls", true), ("MaryCalls", true)]);

    let p = ask(&var("Burglary"), true, &ev, &net).unwrap();
    assert_close(p, 0.284, 1e-3, "P(B | j, m) textbook");
    assert_close(p, 0.284_171_835_364_393, 1e-12, "P(B | j, m) exact");

    let not_p = ask(&var("Burglary"), false, &ev, &net).unwrap();
    assert_close(p + not_p, 1.0, 1e-12, "normalization");
}

#[test]
fn earthquake_and_alarm_given_both_calls() {
    let net = burglary_network();
    let ev = evidence(&[("JohnCalls", true), ("MaryCalls", true)]);

    let earthquake = ask(&var("Earthquake"), true, &ev, &net).unwrap();
    assert_close(earthquake, 0.176_066_838_405_079, 1e-12, "P(E | j, m)");

    let alarm = ask(&var("Alarm"), true, &ev, &net).unwrap();
    assert_close(alarm, 0.760_692_038_863_108, 1e-12, "P(A | j, m)");
}

#[test]
fn marginals_without_evidence() {
    let net = burglary_network();
    let none = Evidence::new();

    assert_close(
        ask(&var("Burglary"), true, &none, &net).unwrap(),
        0.001,
        1e-15,
        "P(B) prior",
    );
    assert_close(
        ask(&var("Earthquake"), true, &none, &net).unwrap(),
        0.002,
        1e-15,
        "P(E) prior",
    );
    assert_close(
        ask(&var("Alarm"), true, &none, &net).unwrap(),
        0.002_516_442,
        1e-12,
        "P(A)",
    );
    assert_close(
        ask(&var("JohnCalls"), true, &none, &net).unwrap(),
        0.052_138_975_7,
        1e-12,
        "P(J)",
    );
}

#[test]
fn causal_and_diagnostic_queries() {
    let net = burglary_network();

    let alarm_given_burglary = ask(&var("Alarm"), true, &evidence(&[("Burglary", true)]), &net);
    assert_close(alarm_given_burglary.unwrap(), 0.940_02, 1e-12, "P(A | b)");

    let john_given_burglary = ask(
        &var("JohnCalls"),
        true,
        &evidence(&[("Burglary", true)]),
        &net,
    );
    assert_close(john_given_burglary.unwrap(), 0.849_017, 1e-12, "P(J | b)");

    let burglary_given_alarm = ask(&var("Burglary"), true, &evidence(&[("Alarm", true)]), &net);
    assert_close(
        burglary_given_alarm.unwrap(),
        0.373_551_228_281_836,
        1e-12,
        "P(B | a)",
    );
}

#[test]
fn explaining_away_raises_and_lowers_burglary() {
    let net = burglary_network();

    let alone = ask(&var("Burglary"), true, &evidence(&[("Alarm", true)]), &net).unwrap();
    let with_quake = ask(
        &var("Burglary"),
        true,
        &evidence(&[("Alarm", true), ("Earthquake", true)]),
        &net,
    )
    .unwrap();
    assert_close(with_quake, 0.003_268_423_587_697, 1e-12, "P(B | a, e)");
    assert!(with_quake < alone);

    // Without the alarm, the two causes are independent.
    let independent = ask(
        &var("Burglary"),
        true,
        &evidence(&[("Earthquake", true)]),
        &net,
    )
    .unwrap();
    assert_close(independent, 0.001, 1e-15, "P(B | e)");
}

#[test]
fn calls_are_screened_off_by_alarm() {
    let net = burglary_network();
    let given_alarm = ask(&var("Burglary"), true, &evidence(&[("Alarm", true)]), &net).unwrap();
    let given_all = ask(
        &var("Burglary"),
        true,
        &evidence(&[("Alarm", true), ("JohnCalls", true), ("MaryCalls", true)]),
        &net,
    )
    .unwrap();
    assert_close(given_all, given_alarm, 1e-12, "screening off");
}

#[test]
fn distribution_and_diagnostics_are_consistent() {
    let net = burglary_network();
    let ev = evidence(&[("JohnCalls", true), ("MaryCalls", true)]);

    let posterior = ask_distribution(&var("Burglary"), &ev, &net).unwrap();
    let (same, diagnostics) = ask_distribution_with_config_diagnostics(
        &var("Burglary"),
        &ev,
        &net,
        EnumerationConfig::default(),
    )
    .unwrap();
    assert_eq!(posterior, same);

    // Textbook unnormalized masses: <0.00059224, 0.0014919>.
    assert_close(diagnostics.mass_true, 0.000_592_242_59, 1e-12, "mass(b)");
    assert_close(diagnostics.mass_false, 0.001_491_857_649, 1e-12, "mass(not b)");

    // Each branch sums out Earthquake then Alarm: 1 + 2 summation visits.
    assert_eq!(diagnostics.enumeration.summed_visits, 6);
    assert_eq!(diagnostics.enumeration.variable_count, 5);
}

#[test]
fn joint_probability_of_full_assignment_is_product() {
    // P(j, m, a, not b, not e) = 0.90 * 0.70 * 0.001 * 0.999 * 0.998
    let net = burglary_network();
    let ev = evidence(&[
        ("Burglary", false),
        ("Earthquake", false),
        ("Alarm", true),
        ("JohnCalls", true),
        ("MaryCalls", true),
    ]);
    let p = joint_probability(net.variable_names(), &ev, &net).unwrap();
    assert_close(p, 0.90 * 0.70 * 0.001 * 0.999 * 0.998, 1e-15, "full joint");
}
