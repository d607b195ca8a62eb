//! Watchlist entries: entities flagged for ongoing monitoring outside
//! the formal investigation workflow.

use crate::types::{EntityId, EntityKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AddedBy {
    System,
    Auditor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub id: EntityId,
    pub entity_kind: EntityKind,
    pub entity_id: EntityId,
    pub entity_name: String,
    pub added_at: DateTime<Utc>,
    pub added_by: AddedBy,
    pub reason: String,
    pub trigger_conditions: Option<Vec<String>>,
}
