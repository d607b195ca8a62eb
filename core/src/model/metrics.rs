//! Aggregate risk metrics — a pure projection over the store.

use crate::types::Money;
use serde::{Deserialize, Serialize};

/// Derived snapshot of desk-wide risk posture. Never stored as
/// authoritative state; recomputed from the collections on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskMetrics {
    pub total_exposure: Money,
    pub active_alerts: u32,
    pub critical_alerts: u32,
    pub vendors_under_watch: u32,
    pub transactions_today: u32,
    pub avg_risk_score: f64,
    /// Signed percent change in mean risk score, newest half of the
    /// transaction window against the oldest half.
    pub risk_trend: f64,
}
