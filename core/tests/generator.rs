//! Generated fixture shape and invariants.

use auditdesk_core::generator::{generate, GeneratorConfig};
use auditdesk_core::model::{AlertStatus, TransactionStatus};
use auditdesk_core::types::RiskLevel;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap()
}

#[test]
fn default_population_matches_the_fixture_shapes() {
    let store = generate(&GeneratorConfig::default(), anchor());
    assert_eq!(store.vendors().len(), 3);
    assert_eq!(store.transactions().len(), 50);
    assert_eq!(store.alerts().len(), 4);
    assert_eq!(store.investigations().len(), 1);
    assert_eq!(store.watchlist().len(), 2);
    assert_eq!(store.scenarios().len(), 3);
}

#[test]
fn every_transaction_has_a_consistent_risk_band() {
    let store = generate(&GeneratorConfig::default(), anchor());
    for txn in store.transactions() {
        assert!(
            txn.risk_level_consistent(),
            "{}: score {} vs band {:?}",
            txn.id,
            txn.risk_score,
            txn.risk_level
        );
    }
}

#[test]
fn transaction_ids_are_unique_and_reference_known_vendors() {
    let store = generate(&GeneratorConfig::default(), anchor());
    let vendor_ids: HashSet<&str> = store.vendors().iter().map(|v| v.id.as_str()).collect();
    let mut seen = HashSet::new();
    for txn in store.transactions() {
        assert!(seen.insert(txn.id.as_str()), "duplicate id {}", txn.id);
        assert!(
            vendor_ids.contains(txn.vendor_id.as_str()),
            "{} references unknown vendor {}",
            txn.id,
            txn.vendor_id
        );
    }
}

#[test]
fn transactions_sit_inside_the_seven_day_window_newest_first() {
    let store = generate(&GeneratorConfig::default(), anchor());
    let window_start = anchor() - Duration::days(7);
    let mut prev = anchor();
    for txn in store.transactions() {
        assert!(txn.timestamp <= anchor() && txn.timestamp >= window_start);
        assert!(txn.timestamp <= prev, "stream must be newest first");
        prev = txn.timestamp;
    }
}

#[test]
fn high_scores_carry_flags_and_flagged_status() {
    let store = generate(&GeneratorConfig::default(), anchor());
    for txn in store.transactions() {
        if txn.risk_score > 70 {
            assert_eq!(txn.status, TransactionStatus::Flagged, "{}", txn.id);
        } else {
            assert_eq!(txn.status, TransactionStatus::Processed, "{}", txn.id);
        }
        if txn.risk_score <= 60 {
            assert!(txn.flags.is_empty(), "{} must carry no flags", txn.id);
        }
    }
}

#[test]
fn alerts_start_without_feedback() {
    let store = generate(&GeneratorConfig::default(), anchor());
    for alert in store.alerts() {
        assert!(alert.feedback.is_none(), "{}", alert.id);
        assert_ne!(alert.status, AlertStatus::Resolved, "{}", alert.id);
    }
    assert_eq!(store.alerts()[0].severity, RiskLevel::Critical);
}

#[test]
fn extra_vendors_extend_the_curated_three() {
    let config = GeneratorConfig {
        seed: 7,
        transaction_count: 20,
        extra_vendors: 5,
    };
    let store = generate(&config, anchor());
    assert_eq!(store.vendors().len(), 8);

    let ids: Vec<&str> = store.vendors().iter().map(|v| v.id.as_str()).collect();
    assert!(ids.contains(&"V004") && ids.contains(&"V008"));
    for vendor in &store.vendors()[3..] {
        assert!(!vendor.name.is_empty());
        assert!(vendor.registration_date < anchor());
    }
}
