//! The audit desk — the single wired entry point a view layer drives.
//!
//! OPERATION ORDER inside every mutation (fixed, never reordered):
//!   1. Validate ids against the store.
//!   2. Apply the store / state-machine mutation.
//!   3. Append the DeskEvent to the in-memory event log.
//!   4. Return the notification (if the event maps to one) for the sink.
//!
//! Each operation is a single atomic unit: it either completes all four
//! steps or returns an error before step 2, so no caller ever observes
//! a half-updated entity.

use crate::error::DeskResult;
use crate::event::{DeskEvent, EventLogEntry, Notification};
use crate::generator::{self, GeneratorConfig};
use crate::model::{
    Alert, FeedbackAction, Investigation, RiskMetrics, Transaction, TransactionStatus, VendorStatus,
    WatchlistItem,
};
use crate::selection::{Selection, SelectionState};
use crate::simulation::{SimulationController, SimulationState};
use crate::store::DeskStore;
use crate::types::{EntityKind, RiskLevel};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub struct AuditDesk {
    store: DeskStore,
    selection: SelectionState,
    simulation: SimulationController,
    events: Vec<EventLogEntry>,
    /// Master seed the desk was generated with; scenario application
    /// derives its fill-in stream from it.
    seed: u64,
}

/// Everything the view layer reads in one place.
#[derive(Debug, Serialize)]
pub struct DeskSnapshot<'a> {
    pub store: &'a DeskStore,
    pub selection: &'a Selection,
    pub simulation: &'a SimulationState,
    pub metrics: RiskMetrics,
}

impl AuditDesk {
    /// Build a desk from generated fixtures. Deterministic for a given
    /// (config, as_of) pair.
    pub fn generate(config: &GeneratorConfig, as_of: DateTime<Utc>) -> Self {
        let mut desk = Self::with_store(generator::generate(config, as_of));
        desk.seed = config.seed;
        desk
    }

    /// Build a desk around an externally assembled store (tests, replays).
    pub fn with_store(store: DeskStore) -> Self {
        Self {
            store,
            selection: SelectionState::new(),
            simulation: SimulationController::new(),
            events: Vec::new(),
            seed: 0,
        }
    }

    // ── Read access ────────────────────────────────────────────

    pub fn store(&self) -> &DeskStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        self.selection.current()
    }

    pub fn simulation(&self) -> &SimulationState {
        self.simulation.state()
    }

    pub fn events(&self) -> &[EventLogEntry] {
        &self.events
    }

    pub fn recompute_risk_metrics(&self, as_of: DateTime<Utc>) -> RiskMetrics {
        self.store.recompute_risk_metrics(as_of)
    }

    pub fn snapshot(&self, as_of: DateTime<Utc>) -> DeskSnapshot<'_> {
        DeskSnapshot {
            store: &self.store,
            selection: self.selection.current(),
            simulation: self.simulation.state(),
            metrics: self.store.recompute_risk_metrics(as_of),
        }
    }

    // ── Alert feedback ─────────────────────────────────────────

    /// Apply auditor feedback. State-idempotent per action, but each
    /// call re-emits the notification — an auditor re-confirming an
    /// action is worth re-announcing.
    pub fn apply_alert_feedback(
        &mut self,
        alert_id: &str,
        action: FeedbackAction,
    ) -> DeskResult<Option<Notification>> {
        let alert = self.store.apply_alert_feedback(alert_id, action)?;
        let event = DeskEvent::AlertFeedbackApplied {
            alert_id: alert.id.clone(),
            action,
            status: alert.status,
        };
        self.record(event)
    }

    // ── Investigations ─────────────────────────────────────────

    pub fn toggle_checklist_item(
        &mut self,
        investigation_id: &str,
        item_id: &str,
        at: DateTime<Utc>,
    ) -> DeskResult<Option<Notification>> {
        let inv = self.store.toggle_checklist_item(investigation_id, item_id, at)?;
        let completed = inv
            .checklist
            .iter()
            .find(|c| c.id == item_id)
            .map(|c| c.completed)
            .unwrap_or_default();
        self.record(DeskEvent::ChecklistItemToggled {
            investigation_id: investigation_id.to_string(),
            item_id: item_id.to_string(),
            completed,
        })
    }

    // ── Watchlist ──────────────────────────────────────────────

    pub fn add_to_watchlist(&mut self, item: WatchlistItem) -> DeskResult<Option<Notification>> {
        let event = DeskEvent::WatchlistItemAdded {
            item_id: item.id.clone(),
            entity_id: item.entity_id.clone(),
        };
        self.store.add_to_watchlist(item);
        self.record(event)
    }

    /// Idempotent removal; a missing id emits nothing and is not an error.
    pub fn remove_from_watchlist(
        &mut self,
        id: &str,
    ) -> DeskResult<(bool, Option<Notification>)> {
        if !self.store.remove_from_watchlist(id) {
            return Ok((false, None));
        }
        let notification = self.record(DeskEvent::WatchlistItemRemoved {
            item_id: id.to_string(),
        })?;
        Ok((true, notification))
    }

    // ── Vendor status (externally supplied updates) ────────────

    pub fn set_vendor_status(
        &mut self,
        vendor_id: &str,
        status: VendorStatus,
        at: DateTime<Utc>,
    ) -> DeskResult<Option<Notification>> {
        self.store.set_vendor_status(vendor_id, status, at)?;
        self.record(DeskEvent::VendorStatusChanged {
            vendor_id: vendor_id.to_string(),
            status,
        })
    }

    // ── Selection ──────────────────────────────────────────────

    pub fn select_alert(&mut self, id: &str) -> DeskResult<Option<Notification>> {
        self.store.alert(id)?;
        let selection = self.selection.select_alert(id.to_string()).clone();
        self.record(DeskEvent::SelectionChanged { selection })
    }

    pub fn select_vendor(&mut self, id: &str) -> DeskResult<Option<Notification>> {
        self.store.vendor(id)?;
        let selection = self.selection.select_vendor(id.to_string()).clone();
        self.record(DeskEvent::SelectionChanged { selection })
    }

    pub fn select_investigation(&mut self, id: &str) -> DeskResult<Option<Notification>> {
        self.store.investigation(id)?;
        let selection = self.selection.select_investigation(id.to_string()).clone();
        self.record(DeskEvent::SelectionChanged { selection })
    }

    /// Derived transition: focus the vendor behind a transaction.
    /// An unresolvable vendor surfaces NotFound to the caller instead
    /// of silently leaving the selection unchanged.
    pub fn select_transaction(&mut self, txn_id: &str) -> DeskResult<Option<Notification>> {
        let vendor_id = self.store.transaction(txn_id)?.vendor_id.clone();
        self.store.vendor(&vendor_id)?;
        let selection = self.selection.select_vendor(vendor_id).clone();
        self.record(DeskEvent::SelectionChanged { selection })
    }

    /// Navigate from a watchlist entry to its entity. Only vendor-kind
    /// entries resolve to a selection; other kinds are a no-op, as in
    /// the reference behavior.
    pub fn select_watchlist_entity(&mut self, item_id: &str) -> DeskResult<Option<Notification>> {
        let item = self.store.watchlist_item(item_id)?;
        if item.entity_kind != EntityKind::Vendor {
            return Ok(None);
        }
        let vendor_id = item.entity_id.clone();
        self.select_vendor(&vendor_id)
    }

    pub fn close_panel(&mut self) -> DeskResult<Option<Notification>> {
        let selection = self.selection.close().clone();
        self.record(DeskEvent::SelectionChanged { selection })
    }

    // ── Simulation ─────────────────────────────────────────────

    pub fn start_scenario(&mut self, scenario_id: &str) -> DeskResult<Option<Notification>> {
        let scenario = self.store.scenario(scenario_id)?;
        let event = DeskEvent::SimulationStarted {
            scenario_id: scenario.id.clone(),
            scenario_name: scenario.name.clone(),
        };
        self.simulation.start_unchecked(scenario_id.to_string());
        self.record(event)
    }

    pub fn pause_simulation(&mut self) -> DeskResult<Option<Notification>> {
        let scenario_id = match self.simulation.state() {
            SimulationState::Running { scenario_id } => scenario_id.clone(),
            // Pause with nothing running is a documented no-op.
            _ => return Ok(None),
        };
        self.simulation.pause();
        self.record(DeskEvent::SimulationPaused { scenario_id })
    }

    pub fn reset_simulation(&mut self) -> DeskResult<Option<Notification>> {
        self.simulation.reset();
        self.record(DeskEvent::SimulationReset)
    }

    /// Materialize a scenario's transaction templates into the store.
    /// Template gaps are filled from the scenario RNG stream; the risk
    /// band is always re-derived from the score.
    pub fn apply_scenario(
        &mut self,
        scenario_id: &str,
        as_of: DateTime<Utc>,
    ) -> DeskResult<Option<Notification>> {
        let scenario = self.store.scenario(scenario_id)?.clone();
        let mut rng =
            crate::rng::RngBank::new(self.seed).for_stream(crate::rng::StreamSlot::Scenario);

        let mut added = 0u32;
        for template in &scenario.transactions {
            let next_index = self.store.transactions().len() + 1;
            let vendor_name = self
                .store
                .vendor(&template.vendor_id)
                .map(|v| v.name.clone())
                .unwrap_or_else(|_| template.vendor_id.clone());
            let risk_score = template
                .risk_score
                .unwrap_or_else(|| rng.next_u64_below(100) as u8);

            self.store.insert_transaction(Transaction {
                id: format!("TXN{next_index:06}"),
                timestamp: as_of,
                txn_type: template.txn_type,
                vendor_id: template.vendor_id.clone(),
                vendor_name,
                amount: template.amount,
                department: template
                    .department
                    .clone()
                    .unwrap_or_else(|| "Finance".to_string()),
                approver: template
                    .approver
                    .clone()
                    .unwrap_or_else(|| "DDO-Finance".to_string()),
                description: template
                    .description
                    .clone()
                    .unwrap_or_else(|| format!("{} (scenario {})", template.txn_type.name(), scenario.id)),
                contract_id: None,
                risk_score,
                risk_level: RiskLevel::from_score(risk_score),
                flags: Vec::new(),
                status: TransactionStatus::Pending,
            });
            added += 1;
        }

        self.record(DeskEvent::ScenarioApplied {
            scenario_id: scenario.id,
            transactions_added: added,
        })
    }

    // ── Convenience getters mirroring the store ────────────────

    pub fn alert(&self, id: &str) -> DeskResult<&Alert> {
        self.store.alert(id)
    }

    pub fn investigation(&self, id: &str) -> DeskResult<&Investigation> {
        self.store.investigation(id)
    }

    // ── Event log ──────────────────────────────────────────────

    fn record(&mut self, event: DeskEvent) -> DeskResult<Option<Notification>> {
        let entry = EventLogEntry {
            seq: self.events.len() as u64,
            event_type: event.type_name().to_string(),
            payload: serde_json::to_string(&event)?,
        };
        log::debug!("desk event #{}: {}", entry.seq, entry.event_type);
        self.events.push(entry);
        Ok(event.to_notification())
    }
}
