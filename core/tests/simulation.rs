//! Simulation controller transitions and their notifications.

use auditdesk_core::desk::AuditDesk;
use auditdesk_core::error::DeskError;
use auditdesk_core::event::NotifySeverity;
use auditdesk_core::generator::GeneratorConfig;
use auditdesk_core::simulation::SimulationState;
use chrono::{TimeZone, Utc};

fn build_desk() -> AuditDesk {
    let as_of = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
    AuditDesk::generate(&GeneratorConfig::default(), as_of)
}

#[test]
fn start_pause_reset_cycle() {
    let mut desk = build_desk();
    assert_eq!(desk.simulation(), &SimulationState::Reset);

    desk.start_scenario("SIM002").unwrap();
    assert_eq!(
        desk.simulation(),
        &SimulationState::Running { scenario_id: "SIM002".into() }
    );

    desk.pause_simulation().unwrap();
    assert_eq!(
        desk.simulation(),
        &SimulationState::Paused { scenario_id: "SIM002".into() }
    );

    desk.reset_simulation().unwrap();
    assert_eq!(desk.simulation(), &SimulationState::Reset);
}

#[test]
fn start_notification_names_the_scenario() {
    let mut desk = build_desk();
    let n = desk.start_scenario("SIM002").unwrap().expect("start notifies");
    assert_eq!(n.severity, NotifySeverity::Info);
    assert_eq!(n.title, "Simulation started");
    assert_eq!(
        n.description.as_deref(),
        Some("Running scenario: Split Payment Evasion")
    );
}

#[test]
fn start_while_running_replaces_the_scenario() {
    let mut desk = build_desk();
    desk.start_scenario("SIM001").unwrap();
    desk.start_scenario("SIM003").unwrap();
    assert_eq!(
        desk.simulation(),
        &SimulationState::Running { scenario_id: "SIM003".into() }
    );
}

#[test]
fn start_from_paused_resumes_into_running() {
    let mut desk = build_desk();
    desk.start_scenario("SIM001").unwrap();
    desk.pause_simulation().unwrap();
    desk.start_scenario("SIM001").unwrap();
    assert_eq!(
        desk.simulation(),
        &SimulationState::Running { scenario_id: "SIM001".into() }
    );
}

#[test]
fn pause_without_a_running_scenario_is_a_no_op() {
    let mut desk = build_desk();
    let events_before = desk.events().len();

    assert!(desk.pause_simulation().unwrap().is_none());

    desk.start_scenario("SIM001").unwrap();
    desk.pause_simulation().unwrap();
    // Already paused: second pause does nothing.
    assert!(desk.pause_simulation().unwrap().is_none());
    assert_eq!(
        desk.simulation(),
        &SimulationState::Paused { scenario_id: "SIM001".into() }
    );
    assert_eq!(desk.events().len(), events_before + 2);
}

#[test]
fn unknown_scenario_is_rejected() {
    let mut desk = build_desk();
    let err = desk.start_scenario("SIM999").unwrap_err();
    assert!(matches!(err, DeskError::UnknownScenario { .. }));
    assert_eq!(desk.simulation(), &SimulationState::Reset);
}

#[test]
fn reset_forgets_the_remembered_scenario() {
    let mut desk = build_desk();
    desk.start_scenario("SIM002").unwrap();
    desk.pause_simulation().unwrap();
    let n = desk.reset_simulation().unwrap().expect("reset notifies");
    assert_eq!(n.title, "Simulation reset");
    assert_eq!(desk.simulation(), &SimulationState::Reset);
}
