//! Desk events — the observable record of every state transition.
//!
//! RULE: Collaborators observe the desk ONLY through events.
//! The view layer never infers a mutation happened by diffing state;
//! every named operation appends exactly the events listed here.

use crate::model::{AlertStatus, FeedbackAction};
use crate::types::EntityId;
use serde::{Deserialize, Serialize};

/// Every event emitted by desk operations.
/// Variants are added as operations are added — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeskEvent {
    AlertFeedbackApplied {
        alert_id: EntityId,
        action: FeedbackAction,
        status: AlertStatus,
    },
    ChecklistItemToggled {
        investigation_id: EntityId,
        item_id: EntityId,
        completed: bool,
    },
    WatchlistItemAdded {
        item_id: EntityId,
        entity_id: EntityId,
    },
    WatchlistItemRemoved {
        item_id: EntityId,
    },
    VendorStatusChanged {
        vendor_id: EntityId,
        status: crate::model::VendorStatus,
    },
    SelectionChanged {
        selection: crate::selection::Selection,
    },
    SimulationStarted {
        scenario_id: EntityId,
        scenario_name: String,
    },
    SimulationPaused {
        scenario_id: EntityId,
    },
    SimulationReset,
    ScenarioApplied {
        scenario_id: EntityId,
        transactions_added: u32,
    },
}

/// Severity of a user-facing notification. The sink contract only
/// distinguishes informational from success toasts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotifySeverity {
    Info,
    Success,
}

/// What the external notification sink (toast/log/other) receives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub severity: NotifySeverity,
    pub title: String,
    pub description: Option<String>,
}

impl DeskEvent {
    /// Stable name for logs and the event-log entries.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::AlertFeedbackApplied { .. } => "alert_feedback_applied",
            Self::ChecklistItemToggled { .. } => "checklist_item_toggled",
            Self::WatchlistItemAdded { .. } => "watchlist_item_added",
            Self::WatchlistItemRemoved { .. } => "watchlist_item_removed",
            Self::VendorStatusChanged { .. } => "vendor_status_changed",
            Self::SelectionChanged { .. } => "selection_changed",
            Self::SimulationStarted { .. } => "simulation_started",
            Self::SimulationPaused { .. } => "simulation_paused",
            Self::SimulationReset => "simulation_reset",
            Self::ScenarioApplied { .. } => "scenario_applied",
        }
    }

    /// Map an event to the notification the sink should show, if any.
    /// Selection changes and vendor status updates are silent.
    pub fn to_notification(&self) -> Option<Notification> {
        match self {
            Self::AlertFeedbackApplied {
                alert_id, action, ..
            } => Some(Notification {
                severity: NotifySeverity::Success,
                title: crate::feedback::action_label(*action).to_string(),
                description: Some(format!("Alert {alert_id} has been updated")),
            }),
            Self::WatchlistItemRemoved { .. } => Some(Notification {
                severity: NotifySeverity::Success,
                title: "Removed from watchlist".to_string(),
                description: None,
            }),
            Self::SimulationStarted { scenario_name, .. } => Some(Notification {
                severity: NotifySeverity::Info,
                title: "Simulation started".to_string(),
                description: Some(format!("Running scenario: {scenario_name}")),
            }),
            Self::SimulationPaused { .. } => Some(Notification {
                severity: NotifySeverity::Info,
                title: "Simulation paused".to_string(),
                description: None,
            }),
            Self::SimulationReset => Some(Notification {
                severity: NotifySeverity::Info,
                title: "Simulation reset".to_string(),
                description: None,
            }),
            Self::ScenarioApplied {
                transactions_added, ..
            } => Some(Notification {
                severity: NotifySeverity::Info,
                title: "Scenario applied".to_string(),
                description: Some(format!("{transactions_added} transactions materialized")),
            }),
            Self::ChecklistItemToggled { .. }
            | Self::WatchlistItemAdded { .. }
            | Self::VendorStatusChanged { .. }
            | Self::SelectionChanged { .. } => None,
        }
    }
}

/// An event-log entry as kept in the desk's append-only in-memory log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub seq: u64,
    pub event_type: String,
    pub payload: String, // JSON-serialized DeskEvent
}
