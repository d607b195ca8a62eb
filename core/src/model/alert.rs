//! Alerts surfaced to the auditor, and the feedback actions they accept.

use crate::types::{EntityId, EntityKind, Money, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert lifecycle. Transitions are monotonic: New →
/// Acknowledged/Investigating → Resolved; nothing moves backwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    New,
    Acknowledged,
    Investigating,
    Resolved,
}

impl AlertStatus {
    /// Position in the transition chain, used to enforce monotonicity.
    /// Acknowledged and Investigating share a rank — either may follow New.
    pub fn rank(&self) -> u8 {
        match self {
            Self::New => 0,
            Self::Acknowledged | Self::Investigating => 1,
            Self::Resolved => 2,
        }
    }
}

/// Auditor feedback on an alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackAction {
    Legitimate,
    Monitor,
    Investigate,
}

impl FeedbackAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Legitimate => "legitimate",
            Self::Monitor => "monitor",
            Self::Investigate => "investigate",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: EntityId,
    pub timestamp: DateTime<Utc>,
    pub severity: RiskLevel,
    pub title: String,
    pub description: String,
    /// Why this alert surfaced now rather than earlier.
    pub why_now: String,
    pub entity_kind: EntityKind,
    pub entity_id: EntityId,
    pub entity_name: String,
    pub related_transactions: Vec<EntityId>,
    pub exposure: Money,
    pub age_in_days: u32,
    pub status: AlertStatus,
    pub feedback: Option<FeedbackAction>,
    pub auditor_notes: Option<String>,
}

impl Alert {
    /// Alerts that still demand attention. Drives the active-alert metrics.
    pub fn is_active(&self) -> bool {
        !matches!(self.status, AlertStatus::Resolved)
    }
}
