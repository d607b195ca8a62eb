//! Shared primitive types used across the entire desk.

use serde::{Deserialize, Serialize};

/// A stable, unique identifier for any entity on the desk.
pub type EntityId = String;

/// A monetary amount in whole rupees. The original data carries plain
/// integers; fractional paise never appear in this domain.
pub type Money = u64;

/// The risk band derived from a 0–100 risk score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Band thresholds: critical >= 80, high >= 60, medium >= 40, else low.
    /// Every stored risk level must agree with its score through this function.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Critical,
            60..=79 => Self::High,
            40..=59 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// The kind of entity an alert or watchlist item points at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Vendor,
    Department,
    Approver,
    Contract,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vendor => "vendor",
            Self::Department => "department",
            Self::Approver => "approver",
            Self::Contract => "contract",
        }
    }
}
