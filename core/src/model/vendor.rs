//! Vendor risk profiles.

use crate::model::transaction::RiskFlag;
use crate::types::{EntityId, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    Active,
    Monitoring,
    Investigating,
    Blocked,
}

impl VendorStatus {
    /// Vendors counted as "under watch" by the metrics projection.
    pub fn under_watch(&self) -> bool {
        matches!(self, Self::Monitoring | Self::Investigating)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskTrend {
    Increasing,
    Stable,
    Decreasing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: EntityId,
    pub name: String,
    pub registration_date: DateTime<Utc>,
    pub category: String,
    pub region: String,
    pub total_transactions: u32,
    pub total_value: Money,
    pub risk_score: u8,
    pub risk_trend: RiskTrend,
    pub flags: Vec<RiskFlag>,
    /// Symmetric in intent but not enforced bidirectionally in storage.
    pub related_vendors: Vec<EntityId>,
    pub departments: Vec<String>,
    pub last_activity: DateTime<Utc>,
    pub status: VendorStatus,
}
