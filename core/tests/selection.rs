//! Selection state machine: one focused entity at a time, strict
//! transaction-to-vendor resolution.

use auditdesk_core::desk::AuditDesk;
use auditdesk_core::error::DeskError;
use auditdesk_core::generator::GeneratorConfig;
use auditdesk_core::model::{Transaction, TransactionStatus, TransactionType};
use auditdesk_core::selection::Selection;
use auditdesk_core::store::DeskStore;
use auditdesk_core::types::RiskLevel;
use chrono::{DateTime, TimeZone, Utc};

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap()
}

fn build_desk() -> AuditDesk {
    AuditDesk::generate(&GeneratorConfig::default(), anchor())
}

#[test]
fn exactly_one_selection_after_any_sequence() {
    let mut desk = build_desk();

    desk.select_alert("ALT001").unwrap();
    assert_eq!(desk.selection(), &Selection::Alert { id: "ALT001".into() });

    desk.select_vendor("V002").unwrap();
    assert_eq!(desk.selection(), &Selection::Vendor { id: "V002".into() });

    desk.select_investigation("INV001").unwrap();
    assert_eq!(
        desk.selection(),
        &Selection::Investigation { id: "INV001".into() }
    );

    desk.select_alert("ALT003").unwrap();
    assert_eq!(desk.selection(), &Selection::Alert { id: "ALT003".into() });

    desk.close_panel().unwrap();
    assert_eq!(desk.selection(), &Selection::Idle);

    desk.close_panel().unwrap();
    assert_eq!(desk.selection(), &Selection::Idle);
}

#[test]
fn selecting_a_transaction_focuses_its_vendor() {
    let mut desk = build_desk();
    let (txn_id, vendor_id) = {
        let txn = &desk.store().transactions()[0];
        (txn.id.clone(), txn.vendor_id.clone())
    };

    desk.select_transaction(&txn_id).unwrap();

    assert_eq!(desk.selection(), &Selection::Vendor { id: vendor_id });
}

#[test]
fn unresolvable_vendor_surfaces_not_found() {
    let mut store = DeskStore::new();
    store.insert_transaction(Transaction {
        id: "TXN000001".into(),
        timestamp: anchor(),
        txn_type: TransactionType::Payment,
        vendor_id: "V999".into(),
        vendor_name: "Orphaned Vendor".into(),
        amount: 250_000,
        department: "Finance".into(),
        approver: "DDO-Finance".into(),
        description: "payment for project work".into(),
        contract_id: None,
        risk_score: 10,
        risk_level: RiskLevel::Low,
        flags: Vec::new(),
        status: TransactionStatus::Processed,
    });
    let mut desk = AuditDesk::with_store(store);

    let err = desk.select_transaction("TXN000001").unwrap_err();
    assert!(matches!(err, DeskError::NotFound { kind: "vendor", .. }));
    // The failed resolution leaves the selection untouched.
    assert_eq!(desk.selection(), &Selection::Idle);
}

#[test]
fn selecting_unknown_entities_is_not_found() {
    let mut desk = build_desk();
    assert!(matches!(
        desk.select_alert("ALT999").unwrap_err(),
        DeskError::NotFound { kind: "alert", .. }
    ));
    assert!(matches!(
        desk.select_vendor("V999").unwrap_err(),
        DeskError::NotFound { kind: "vendor", .. }
    ));
    assert!(matches!(
        desk.select_transaction("TXN999999").unwrap_err(),
        DeskError::NotFound { kind: "transaction", .. }
    ));
    assert_eq!(desk.selection(), &Selection::Idle);
}

#[test]
fn selection_changes_are_logged_but_never_toasted() {
    let mut desk = build_desk();
    let n = desk.select_alert("ALT001").unwrap();
    assert!(n.is_none());
    assert_eq!(desk.events().last().unwrap().event_type, "selection_changed");
}
