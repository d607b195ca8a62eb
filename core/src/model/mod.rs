//! The audit domain model.
//!
//! RULE: Entities here are plain data. All mutation goes through the
//! store's named operations — no entity exposes a mutating method the
//! store does not own.

pub mod alert;
pub mod investigation;
pub mod metrics;
pub mod scenario;
pub mod transaction;
pub mod vendor;
pub mod watchlist;

pub use alert::{Alert, AlertStatus, FeedbackAction};
pub use investigation::{
    CaseEntities, ChecklistItem, ChecklistSource, Investigation, InvestigationStatus,
    TimelineEvent, TimelineEventKind,
};
pub use metrics::RiskMetrics;
pub use scenario::{ScenarioKind, SimulationScenario, TransactionTemplate};
pub use transaction::{
    ContextCheck, RiskFlag, Transaction, TransactionStatus, TransactionType,
};
pub use vendor::{RiskTrend, Vendor, VendorStatus};
pub use watchlist::{AddedBy, WatchlistItem};
