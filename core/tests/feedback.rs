//! Alert feedback: monotonic status transitions and their side effects.

use auditdesk_core::desk::AuditDesk;
use auditdesk_core::error::DeskError;
use auditdesk_core::generator::GeneratorConfig;
use auditdesk_core::model::{AlertStatus, FeedbackAction, TransactionStatus};
use chrono::{TimeZone, Utc};

fn build_desk() -> AuditDesk {
    let as_of = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
    AuditDesk::generate(&GeneratorConfig::default(), as_of)
}

#[test]
fn investigate_moves_acknowledged_alert_to_investigating() {
    let mut desk = build_desk();
    assert_eq!(desk.alert("ALT002").unwrap().status, AlertStatus::Acknowledged);

    desk.apply_alert_feedback("ALT002", FeedbackAction::Investigate)
        .unwrap();

    let alert = desk.alert("ALT002").unwrap();
    assert_eq!(alert.status, AlertStatus::Investigating);
    assert_eq!(alert.feedback, Some(FeedbackAction::Investigate));
}

#[test]
fn legitimate_resolves_from_any_starting_status() {
    let mut desk = build_desk();
    for id in ["ALT001", "ALT002", "ALT003", "ALT004"] {
        desk.apply_alert_feedback(id, FeedbackAction::Legitimate)
            .unwrap();
        let alert = desk.alert(id).unwrap();
        assert_eq!(alert.status, AlertStatus::Resolved, "alert {id}");
        assert_eq!(alert.feedback, Some(FeedbackAction::Legitimate));
    }
}

#[test]
fn monitor_records_feedback_without_touching_status() {
    let mut desk = build_desk();
    let before = desk.alert("ALT003").unwrap().status;

    desk.apply_alert_feedback("ALT003", FeedbackAction::Monitor)
        .unwrap();

    let alert = desk.alert("ALT003").unwrap();
    assert_eq!(alert.status, before);
    assert_eq!(alert.feedback, Some(FeedbackAction::Monitor));
}

#[test]
fn investigate_never_reopens_a_resolved_alert() {
    let mut desk = build_desk();
    desk.apply_alert_feedback("ALT001", FeedbackAction::Legitimate)
        .unwrap();
    desk.apply_alert_feedback("ALT001", FeedbackAction::Investigate)
        .unwrap();

    let alert = desk.alert("ALT001").unwrap();
    assert_eq!(alert.status, AlertStatus::Resolved);
    assert_eq!(alert.feedback, Some(FeedbackAction::Investigate));
}

#[test]
fn reapplying_is_state_idempotent_but_renotifies() {
    let mut desk = build_desk();
    let first = desk
        .apply_alert_feedback("ALT002", FeedbackAction::Investigate)
        .unwrap();
    let events_after_first = desk.events().len();
    let second = desk
        .apply_alert_feedback("ALT002", FeedbackAction::Investigate)
        .unwrap();

    assert_eq!(desk.alert("ALT002").unwrap().status, AlertStatus::Investigating);
    // The auditor re-confirming still produces a fresh notification.
    assert_eq!(first, second);
    assert!(second.is_some());
    assert_eq!(desk.events().len(), events_after_first + 1);
}

#[test]
fn feedback_notification_uses_the_fixed_labels() {
    let mut desk = build_desk();
    let n = desk
        .apply_alert_feedback("ALT001", FeedbackAction::Legitimate)
        .unwrap()
        .expect("feedback always notifies");
    assert_eq!(n.title, "Marked as legitimate");
    assert_eq!(n.description.as_deref(), Some("Alert ALT001 has been updated"));

    let n = desk
        .apply_alert_feedback("ALT002", FeedbackAction::Monitor)
        .unwrap()
        .unwrap();
    assert_eq!(n.title, "Added to monitoring");

    let n = desk
        .apply_alert_feedback("ALT003", FeedbackAction::Investigate)
        .unwrap()
        .unwrap();
    assert_eq!(n.title, "Escalated for investigation");
}

#[test]
fn unknown_alert_is_not_found() {
    let mut desk = build_desk();
    let err = desk
        .apply_alert_feedback("ALT999", FeedbackAction::Monitor)
        .unwrap_err();
    assert!(matches!(err, DeskError::NotFound { kind: "alert", .. }));
    // All-or-nothing: the failed call left no event behind.
    assert!(desk.events().is_empty());
}

#[test]
fn investigate_flags_related_transactions_and_legitimate_clears_them() {
    let mut desk = build_desk();
    // ALT004 references TXN000008 and TXN000012, both inside the
    // generated 50-transaction window.
    desk.apply_alert_feedback("ALT004", FeedbackAction::Investigate)
        .unwrap();
    for id in ["TXN000008", "TXN000012"] {
        assert_eq!(
            desk.store().transaction(id).unwrap().status,
            TransactionStatus::Flagged,
            "transaction {id}"
        );
    }

    desk.apply_alert_feedback("ALT004", FeedbackAction::Legitimate)
        .unwrap();
    for id in ["TXN000008", "TXN000012"] {
        assert_eq!(
            desk.store().transaction(id).unwrap().status,
            TransactionStatus::Cleared,
            "transaction {id}"
        );
    }
}
