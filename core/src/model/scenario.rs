//! Simulation scenarios — immutable fixture bundles for demo/testing runs.

use crate::model::transaction::TransactionType;
use crate::types::{EntityId, Money};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    Clean,
    Fraud,
    EdgeCase,
}

/// A partial transaction a scenario can materialize into the store.
/// Unset fields are filled from the scenario RNG stream on application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionTemplate {
    pub txn_type: TransactionType,
    pub vendor_id: EntityId,
    pub amount: Money,
    pub department: Option<String>,
    pub approver: Option<String>,
    pub description: Option<String>,
    pub risk_score: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationScenario {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub kind: ScenarioKind,
    pub transactions: Vec<TransactionTemplate>,
}
