//! Transactions and the risk flags attached to them.

use crate::types::{EntityId, Money, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Payment,
    Contract,
    Approval,
    Amendment,
    Advance,
    Milestone,
}

impl TransactionType {
    pub const ALL: [TransactionType; 6] = [
        Self::Payment,
        Self::Contract,
        Self::Approval,
        Self::Amendment,
        Self::Advance,
        Self::Milestone,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Contract => "contract",
            Self::Approval => "approval",
            Self::Amendment => "amendment",
            Self::Advance => "advance",
            Self::Milestone => "milestone",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Processed,
    Flagged,
    Cleared,
}

/// A single pass/fail context check inside a risk flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContextCheck {
    pub name: String,
    pub passed: bool,
    pub explanation: String,
}

/// A detection-output flag attached to a transaction or vendor.
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskFlag {
    pub id: EntityId,
    pub flag_type: String,
    pub severity: RiskLevel,
    pub message: String,
    pub explanation: String,
    pub context_checks: Vec<ContextCheck>,
    pub first_seen: DateTime<Utc>,
    pub occurrences: u32,
    pub is_recurring: bool,
}

/// A spend-side transaction. Immutable once generated except for
/// `status`, which the feedback processor may move to flagged/cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntityId,
    pub timestamp: DateTime<Utc>,
    pub txn_type: TransactionType,
    pub vendor_id: EntityId,
    pub vendor_name: String,
    pub amount: Money,
    pub department: String,
    pub approver: String,
    pub description: String,
    pub contract_id: Option<EntityId>,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub flags: Vec<RiskFlag>,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Invariant check: the stored band must be derivable from the score.
    pub fn risk_level_consistent(&self) -> bool {
        self.risk_level == RiskLevel::from_score(self.risk_score)
    }
}
