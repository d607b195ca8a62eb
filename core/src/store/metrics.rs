//! Risk-metrics projection. Pure over current store contents — the
//! metrics panel can never drift from the underlying collections.

use super::DeskStore;
use crate::model::RiskMetrics;
use crate::types::RiskLevel;
use chrono::{DateTime, Utc};

impl DeskStore {
    /// Recompute the aggregate snapshot. `as_of` anchors "today";
    /// calling twice without intervening mutation yields identical
    /// results for the same anchor.
    pub fn recompute_risk_metrics(&self, as_of: DateTime<Utc>) -> RiskMetrics {
        let active: Vec<_> = self.alerts.iter().filter(|a| a.is_active()).collect();
        let critical_alerts = active
            .iter()
            .filter(|a| a.severity == RiskLevel::Critical)
            .count() as u32;
        let total_exposure = active.iter().map(|a| a.exposure).sum();

        let vendors_under_watch = self
            .vendors
            .iter()
            .filter(|v| v.status.under_watch())
            .count() as u32;

        let today = as_of.date_naive();
        let transactions_today = self
            .transactions
            .iter()
            .filter(|t| t.timestamp.date_naive() == today)
            .count() as u32;

        let avg_risk_score = mean(self.transactions.iter().map(|t| f64::from(t.risk_score)));

        RiskMetrics {
            total_exposure,
            active_alerts: active.len() as u32,
            critical_alerts,
            vendors_under_watch,
            transactions_today,
            avg_risk_score,
            risk_trend: self.risk_trend(),
        }
    }

    /// Percent change in mean risk score: newest half of the
    /// transaction window against the oldest half, by timestamp.
    /// Zero with fewer than two transactions or a zero baseline.
    fn risk_trend(&self) -> f64 {
        if self.transactions.len() < 2 {
            return 0.0;
        }
        let mut ordered: Vec<_> = self
            .transactions
            .iter()
            .map(|t| (t.timestamp, f64::from(t.risk_score)))
            .collect();
        ordered.sort_by_key(|(ts, _)| *ts);

        let mid = ordered.len() / 2;
        let older = mean(ordered[..mid].iter().map(|(_, s)| *s));
        let newer = mean(ordered[mid..].iter().map(|(_, s)| *s));
        if older == 0.0 {
            return 0.0;
        }
        (newer - older) / older * 100.0
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}
