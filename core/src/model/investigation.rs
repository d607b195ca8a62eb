//! Investigations: case files bundling entities, a timeline, findings
//! and an auditor checklist.

use crate::types::{EntityId, Money, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InvestigationStatus {
    Open,
    InProgress,
    PendingReview,
    Closed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineEventKind {
    Transaction,
    Flag,
    Feedback,
    Note,
    StatusChange,
}

/// One entry in a case timeline. The timeline is append-only with
/// caller-supplied timestamps; insertion order is preserved and no
/// chronological sort happens on append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: EntityId,
    pub timestamp: DateTime<Utc>,
    pub kind: TimelineEventKind,
    pub title: String,
    pub description: String,
    pub metadata: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistSource {
    System,
    Auditor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: EntityId,
    pub text: String,
    pub completed: bool,
    pub suggested_by: ChecklistSource,
}

/// The entity ids a case is built around.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseEntities {
    pub vendors: Vec<EntityId>,
    pub departments: Vec<String>,
    pub contracts: Vec<EntityId>,
    pub transactions: Vec<EntityId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigation {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub status: InvestigationStatus,
    pub assignee: Option<String>,
    pub priority: RiskLevel,
    pub entities: CaseEntities,
    pub timeline: Vec<TimelineEvent>,
    pub findings: Vec<String>,
    pub exposure: Money,
    pub checklist: Vec<ChecklistItem>,
    pub case_summary: Option<String>,
}
