//! The canonical in-memory domain store.
//!
//! RULE: Only the store mutates domain state, and only through the
//! named operations defined in this module tree. State machines hold
//! ids into these collections, never copies of the entities.

use crate::error::{DeskError, DeskResult};
use crate::model::{
    Alert, Investigation, SimulationScenario, Transaction, Vendor, WatchlistItem,
};
use serde::{Deserialize, Serialize};

mod alert;
mod investigation;
mod metrics;
mod vendor;
mod watchlist;

/// Owner of every domain collection. Collections keep insertion order
/// so serialized snapshots are deterministic for a given seed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskStore {
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) alerts: Vec<Alert>,
    pub(crate) vendors: Vec<Vendor>,
    pub(crate) investigations: Vec<Investigation>,
    pub(crate) watchlist: Vec<WatchlistItem>,
    pub(crate) scenarios: Vec<SimulationScenario>,
}

impl DeskStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Read access ────────────────────────────────────────────

    pub fn transaction(&self, id: &str) -> DeskResult<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DeskError::not_found("transaction", id))
    }

    pub fn alert(&self, id: &str) -> DeskResult<&Alert> {
        self.alerts
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| DeskError::not_found("alert", id))
    }

    pub fn vendor(&self, id: &str) -> DeskResult<&Vendor> {
        self.vendors
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| DeskError::not_found("vendor", id))
    }

    pub fn investigation(&self, id: &str) -> DeskResult<&Investigation> {
        self.investigations
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| DeskError::not_found("investigation", id))
    }

    pub fn watchlist_item(&self, id: &str) -> DeskResult<&WatchlistItem> {
        self.watchlist
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| DeskError::not_found("watchlist item", id))
    }

    pub fn scenario(&self, id: &str) -> DeskResult<&SimulationScenario> {
        self.scenarios
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| DeskError::UnknownScenario { id: id.to_string() })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn investigations(&self) -> &[Investigation] {
        &self.investigations
    }

    pub fn watchlist(&self) -> &[WatchlistItem] {
        &self.watchlist
    }

    pub fn scenarios(&self) -> &[SimulationScenario] {
        &self.scenarios
    }

    // ── Insert paths ───────────────────────────────────────────
    // Used by the generator and scenario application. Transactions are
    // created once and never deleted; alerts and investigations are
    // only ever transitioned.

    pub fn insert_transaction(&mut self, txn: Transaction) {
        debug_assert!(
            txn.risk_level_consistent(),
            "transaction {} stored with inconsistent risk band",
            txn.id
        );
        log::debug!("store: insert transaction {}", txn.id);
        self.transactions.push(txn);
    }

    pub fn insert_alert(&mut self, alert: Alert) {
        log::debug!("store: insert alert {}", alert.id);
        self.alerts.push(alert);
    }

    pub fn insert_vendor(&mut self, vendor: Vendor) {
        log::debug!("store: insert vendor {}", vendor.id);
        self.vendors.push(vendor);
    }

    pub fn insert_investigation(&mut self, inv: Investigation) {
        log::debug!("store: insert investigation {}", inv.id);
        self.investigations.push(inv);
    }

    pub fn insert_scenario(&mut self, scenario: SimulationScenario) {
        log::debug!("store: insert scenario {}", scenario.id);
        self.scenarios.push(scenario);
    }
}
