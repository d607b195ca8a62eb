//! Seeded fixture generation — the initial domain snapshot.
//!
//! RULE: Nothing here touches a platform RNG or the wall clock. The
//! whole snapshot is a pure function of (config.seed, as_of), so two
//! desks built with the same inputs serialize byte-identically.
//!
//! The curated vendors, alerts, investigation, watchlist and scenario
//! catalog are fixed fixtures; transactions (and any vendors beyond the
//! curated three) are drawn from per-stream RNGs.

use crate::model::{
    AddedBy, Alert, AlertStatus, CaseEntities, ChecklistItem, ChecklistSource, ContextCheck,
    Investigation, InvestigationStatus, RiskFlag, RiskTrend, ScenarioKind, SimulationScenario,
    TimelineEvent, TimelineEventKind, Transaction, TransactionStatus, TransactionTemplate,
    TransactionType, Vendor, VendorStatus, WatchlistItem,
};
use crate::rng::{DeskRng, RngBank, StreamSlot};
use crate::store::DeskStore;
use crate::types::{EntityKind, RiskLevel};
use crate::vendor_names::VendorNameGenerator;
use chrono::{DateTime, Duration, TimeZone, Utc};

const DEPARTMENTS: &[&str] = &[
    "PWD",
    "Housing",
    "IT",
    "Finance",
    "Health",
    "Education",
    "Urban Development",
];
const APPROVERS: &[&str] = &["AO-North-1", "AO-West-2", "AO-South-1", "DDO-Finance", "CE-PWD"];
const REGIONS: &[&str] = &["North", "South", "East", "West"];
const CATEGORIES: &[&str] = &["Construction", "IT Services", "Logistics", "Consulting"];

/// Scores above this copy the vendor's flags onto the transaction.
const FLAG_CARRYOVER_SCORE: u8 = 60;
/// Scores above this mark the transaction flagged instead of processed.
const FLAGGED_STATUS_SCORE: u8 = 70;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// Synthetic transactions in the initial window.
    pub transaction_count: usize,
    /// Vendors generated beyond the curated three.
    pub extra_vendors: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            transaction_count: 50,
            extra_vendors: 0,
        }
    }
}

/// Build the full initial store.
pub fn generate(config: &GeneratorConfig, as_of: DateTime<Utc>) -> DeskStore {
    let bank = RngBank::new(config.seed);
    let mut store = DeskStore::new();

    for vendor in curated_vendors(as_of) {
        store.insert_vendor(vendor);
    }
    let mut vendor_rng = bank.for_stream(StreamSlot::Vendors);
    for n in 0..config.extra_vendors {
        let vendor = synthetic_vendor(n, &mut vendor_rng, as_of);
        store.insert_vendor(vendor);
    }

    let mut txn_rng = bank.for_stream(StreamSlot::Transactions);
    let mut transactions = Vec::with_capacity(config.transaction_count);
    for i in 0..config.transaction_count {
        transactions.push(synthetic_transaction(i, &mut txn_rng, store.vendors(), as_of));
    }
    // Newest first, matching the stream panel's ordering.
    transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(a.id.cmp(&b.id)));
    for txn in transactions {
        store.insert_transaction(txn);
    }

    for alert in curated_alerts(as_of) {
        store.insert_alert(alert);
    }
    store.insert_investigation(curated_investigation(as_of));
    for item in curated_watchlist() {
        store.add_to_watchlist(item);
    }
    for scenario in scenario_catalog() {
        store.insert_scenario(scenario);
    }

    log::info!(
        "generated desk: seed {} -> {} vendors, {} transactions, {} alerts",
        config.seed,
        store.vendors().len(),
        store.transactions().len(),
        store.alerts().len()
    );
    store
}

fn synthetic_transaction(
    index: usize,
    rng: &mut DeskRng,
    vendors: &[Vendor],
    as_of: DateTime<Utc>,
) -> Transaction {
    let vendor = rng.pick(vendors);
    let risk_score = rng.next_u64_below(100) as u8;
    let txn_type = *rng.pick(&TransactionType::ALL);
    let age_secs = rng.next_u64_below(7 * 24 * 60 * 60) as i64;

    Transaction {
        id: format!("TXN{:06}", index + 1),
        timestamp: as_of - Duration::seconds(age_secs),
        txn_type,
        vendor_id: vendor.id.clone(),
        vendor_name: vendor.name.clone(),
        amount: 100_000 + rng.next_u64_below(10_000_000),
        department: rng.pick(DEPARTMENTS).to_string(),
        approver: rng.pick(APPROVERS).to_string(),
        description: format!("{} for project work", txn_type.name()),
        contract_id: None,
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        flags: if risk_score > FLAG_CARRYOVER_SCORE {
            vendor.flags.clone()
        } else {
            Vec::new()
        },
        status: if risk_score > FLAGGED_STATUS_SCORE {
            TransactionStatus::Flagged
        } else {
            TransactionStatus::Processed
        },
    }
}

fn synthetic_vendor(index: usize, rng: &mut DeskRng, as_of: DateTime<Utc>) -> Vendor {
    let risk_score = rng.next_u64_below(100) as u8;
    let age_days = 120 + rng.next_u64_below(2_000) as i64;
    Vendor {
        // Curated fixtures occupy V001–V003.
        id: format!("V{:03}", index + 4),
        name: VendorNameGenerator::generate(rng),
        registration_date: as_of - Duration::days(age_days),
        category: rng.pick(CATEGORIES).to_string(),
        region: rng.pick(REGIONS).to_string(),
        total_transactions: rng.next_u64_below(300) as u32,
        total_value: rng.next_u64_below(150_000_000),
        risk_score,
        risk_trend: *rng.pick(&[RiskTrend::Increasing, RiskTrend::Stable, RiskTrend::Decreasing]),
        flags: Vec::new(),
        related_vendors: Vec::new(),
        departments: vec![rng.pick(DEPARTMENTS).to_string()],
        last_activity: as_of,
        status: if rng.chance(0.15) {
            VendorStatus::Monitoring
        } else {
            VendorStatus::Active
        },
    }
}

fn curated_vendors(as_of: DateTime<Utc>) -> Vec<Vendor> {
    vec![
        Vendor {
            id: "V001".into(),
            name: "Bharat Infrastructure Ltd".into(),
            registration_date: date(2019, 3, 15),
            category: "Construction".into(),
            region: "North".into(),
            total_transactions: 245,
            total_value: 125_000_000,
            risk_score: 72,
            risk_trend: RiskTrend::Increasing,
            flags: vec![RiskFlag {
                id: "F001".into(),
                flag_type: "velocity_spike".into(),
                severity: RiskLevel::High,
                message: "Unusual transaction velocity detected".into(),
                explanation:
                    "Transaction frequency increased 340% in last 30 days compared to historical average"
                        .into(),
                context_checks: vec![
                    ContextCheck {
                        name: "Year-end rush period".into(),
                        passed: false,
                        explanation: "Current month is July, not fiscal year-end".into(),
                    },
                    ContextCheck {
                        name: "Active milestone contracts".into(),
                        passed: true,
                        explanation: "2 milestone-based contracts currently active".into(),
                    },
                ],
                first_seen: date(2024, 6, 15),
                occurrences: 8,
                is_recurring: true,
            }],
            related_vendors: vec!["V008".into(), "V012".into()],
            departments: vec!["PWD".into(), "Housing".into(), "Urban Development".into()],
            last_activity: as_of,
            status: VendorStatus::Monitoring,
        },
        Vendor {
            id: "V002".into(),
            name: "Sunrise IT Solutions".into(),
            registration_date: date(2021, 8, 22),
            category: "IT Services".into(),
            region: "West".into(),
            total_transactions: 89,
            total_value: 45_000_000,
            risk_score: 45,
            risk_trend: RiskTrend::Stable,
            flags: Vec::new(),
            related_vendors: Vec::new(),
            departments: vec!["IT".into(), "Finance".into()],
            last_activity: as_of,
            status: VendorStatus::Active,
        },
        Vendor {
            id: "V003".into(),
            name: "Greenfield Constructions".into(),
            registration_date: date(2023, 11, 1),
            category: "Construction".into(),
            region: "South".into(),
            total_transactions: 12,
            total_value: 28_000_000,
            risk_score: 85,
            risk_trend: RiskTrend::Increasing,
            flags: vec![RiskFlag {
                id: "F002".into(),
                flag_type: "new_vendor_large_contracts".into(),
                severity: RiskLevel::Critical,
                message: "New vendor with disproportionate contract value".into(),
                explanation: "Vendor registered 8 months ago but already awarded ₹28 Cr in contracts"
                    .into(),
                context_checks: vec![
                    ContextCheck {
                        name: "Emergency procurement".into(),
                        passed: false,
                        explanation: "No emergency declarations found".into(),
                    },
                    ContextCheck {
                        name: "Specialized capability".into(),
                        passed: false,
                        explanation: "Standard construction work, multiple alternatives available"
                            .into(),
                    },
                ],
                first_seen: date(2024, 5, 20),
                occurrences: 4,
                is_recurring: true,
            }],
            related_vendors: vec!["V001".into()],
            departments: vec!["PWD".into()],
            last_activity: as_of,
            status: VendorStatus::Investigating,
        },
    ]
}

fn curated_alerts(as_of: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            id: "ALT001".into(),
            timestamp: as_of,
            severity: RiskLevel::Critical,
            title: "Repeated split payments detected".into(),
            description: "Multiple payments just below ₹5L threshold to same vendor within 48 hours"
                .into(),
            why_now: "Pattern detected for 3rd consecutive week - escalation warranted".into(),
            entity_kind: EntityKind::Vendor,
            entity_id: "V003".into(),
            entity_name: "Greenfield Constructions".into(),
            related_transactions: vec!["TXN000045".into(), "TXN000046".into(), "TXN000047".into()],
            exposure: 14_500_000,
            age_in_days: 21,
            status: AlertStatus::New,
            feedback: None,
            auditor_notes: None,
        },
        Alert {
            id: "ALT002".into(),
            timestamp: as_of - Duration::hours(1),
            severity: RiskLevel::High,
            title: "Unusual approval chain bypass".into(),
            description: "Contract amendment approved without standard departmental review".into(),
            why_now: "Same pattern observed in 2 other departments this month".into(),
            entity_kind: EntityKind::Approver,
            entity_id: "AO-North-1".into(),
            entity_name: "AO-North-1".into(),
            related_transactions: vec!["TXN000032".into()],
            exposure: 8_200_000,
            age_in_days: 5,
            status: AlertStatus::Acknowledged,
            feedback: None,
            auditor_notes: None,
        },
        Alert {
            id: "ALT003".into(),
            timestamp: as_of - Duration::hours(2),
            severity: RiskLevel::Medium,
            title: "Vendor relationship cluster identified".into(),
            description: "Three vendors with common directors receiving contracts from same department"
                .into(),
            why_now: "New connection discovered after recent company registration update".into(),
            entity_kind: EntityKind::Vendor,
            entity_id: "V001".into(),
            entity_name: "Bharat Infrastructure Ltd".into(),
            related_transactions: vec!["TXN000015".into(), "TXN000022".into(), "TXN000028".into()],
            exposure: 42_000_000,
            age_in_days: 45,
            status: AlertStatus::Investigating,
            feedback: None,
            auditor_notes: None,
        },
        Alert {
            id: "ALT004".into(),
            timestamp: as_of - Duration::hours(4),
            severity: RiskLevel::Low,
            title: "Advance payment ratio elevated".into(),
            description: "Department advance payments 15% above quarterly average".into(),
            why_now: "Context: Monsoon preparation activities - may be legitimate".into(),
            entity_kind: EntityKind::Department,
            entity_id: "D001".into(),
            entity_name: "PWD".into(),
            related_transactions: vec!["TXN000008".into(), "TXN000012".into()],
            exposure: 5_500_000,
            age_in_days: 3,
            status: AlertStatus::New,
            feedback: None,
            auditor_notes: None,
        },
    ]
}

fn curated_investigation(as_of: DateTime<Utc>) -> Investigation {
    Investigation {
        id: "INV001".into(),
        created_at: date(2024, 6, 1),
        updated_at: as_of,
        title: "Vendor Cartel Investigation - PWD Contracts".into(),
        description: "Investigation into potential bid-rigging among construction vendors in PWD department"
            .into(),
        status: InvestigationStatus::InProgress,
        assignee: Some("Auditor-A1".into()),
        priority: RiskLevel::Critical,
        entities: CaseEntities {
            vendors: vec!["V001".into(), "V003".into(), "V008".into()],
            departments: vec!["PWD".into()],
            contracts: vec!["C001".into(), "C002".into(), "C003".into()],
            transactions: vec!["TXN000001".into(), "TXN000015".into(), "TXN000022".into()],
        },
        timeline: vec![
            TimelineEvent {
                id: "TL001".into(),
                timestamp: date(2024, 6, 1),
                kind: TimelineEventKind::StatusChange,
                title: "Investigation opened".into(),
                description: "Initial review triggered by velocity anomaly detection".into(),
                metadata: None,
            },
            TimelineEvent {
                id: "TL002".into(),
                timestamp: date(2024, 6, 5),
                kind: TimelineEventKind::Flag,
                title: "Related vendor connection discovered".into(),
                description: "Common director found between V001 and V003".into(),
                metadata: None,
            },
        ],
        findings: vec![
            "Common director found across 3 vendors".into(),
            "Sequential bid patterns observed in 5 contracts".into(),
        ],
        exposure: 75_000_000,
        checklist: vec![
            checklist_item("CK001", "Review vendor registration documents", true, ChecklistSource::System),
            checklist_item(
                "CK002",
                "Cross-reference director information with MCA database",
                false,
                ChecklistSource::System,
            ),
            checklist_item(
                "CK003",
                "Analyze bid price patterns across related contracts",
                false,
                ChecklistSource::System,
            ),
            checklist_item(
                "CK004",
                "Interview department procurement officer",
                false,
                ChecklistSource::Auditor,
            ),
        ],
        case_summary: None,
    }
}

fn checklist_item(id: &str, text: &str, completed: bool, suggested_by: ChecklistSource) -> ChecklistItem {
    ChecklistItem {
        id: id.into(),
        text: text.into(),
        completed,
        suggested_by,
    }
}

fn curated_watchlist() -> Vec<WatchlistItem> {
    vec![
        WatchlistItem {
            id: "WL001".into(),
            entity_kind: EntityKind::Vendor,
            entity_id: "V003".into(),
            entity_name: "Greenfield Constructions".into(),
            added_at: date(2024, 5, 20),
            added_by: AddedBy::System,
            reason: "New vendor with disproportionate contract awards".into(),
            trigger_conditions: Some(vec![
                "New contract > ₹1 Cr".into(),
                "Payment velocity change > 50%".into(),
            ]),
        },
        WatchlistItem {
            id: "WL002".into(),
            entity_kind: EntityKind::Approver,
            entity_id: "AO-North-1".into(),
            entity_name: "AO-North-1".into(),
            added_at: date(2024, 6, 10),
            added_by: AddedBy::Auditor,
            reason: "Multiple approval chain bypasses observed".into(),
            trigger_conditions: None,
        },
    ]
}

fn scenario_catalog() -> Vec<SimulationScenario> {
    vec![
        SimulationScenario {
            id: "SIM001".into(),
            name: "Clean Operations".into(),
            description: "Normal transaction patterns with proper approvals and documentation".into(),
            kind: ScenarioKind::Clean,
            transactions: Vec::new(),
        },
        SimulationScenario {
            id: "SIM002".into(),
            name: "Split Payment Evasion".into(),
            description: "Multiple payments just below threshold to circumvent approval limits".into(),
            kind: ScenarioKind::Fraud,
            // A burst of payments hugging the ₹5L approval threshold.
            transactions: vec![
                split_payment_template(498_000),
                split_payment_template(495_500),
                split_payment_template(499_200),
            ],
        },
        SimulationScenario {
            id: "SIM003".into(),
            name: "Emergency Procurement".into(),
            description: "Legitimate fast-track procurement during declared emergency".into(),
            kind: ScenarioKind::EdgeCase,
            transactions: Vec::new(),
        },
    ]
}

fn split_payment_template(amount: u64) -> TransactionTemplate {
    TransactionTemplate {
        txn_type: TransactionType::Payment,
        vendor_id: "V003".into(),
        amount,
        department: Some("PWD".into()),
        approver: None,
        description: Some("Progress payment - roadwork segment".into()),
        risk_score: Some(82),
    }
}

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}
