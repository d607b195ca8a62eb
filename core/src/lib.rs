//! auditdesk-core — the headless core of a fraud/audit monitoring desk.
//!
//! The crate owns the canonical domain collections (transactions,
//! alerts, vendors, investigations, watchlist, scenario catalog), the
//! selection state machine driving the detail panel, the feedback
//! processor, and the simulation controller. Rendering, routing and
//! notification delivery are external collaborators: they read
//! [`desk::AuditDesk`] snapshots and feed user intents back through its
//! named operations, each of which is synchronous, atomic, and either
//! fully applied or rejected with a [`error::DeskError`].
//!
//! All fixture data is produced by the seeded [`generator`]; two desks
//! built from the same seed and anchor time are byte-identical when
//! serialized.

pub mod desk;
pub mod error;
pub mod event;
pub mod feedback;
pub mod format;
pub mod generator;
pub mod model;
pub mod rng;
pub mod selection;
pub mod simulation;
pub mod store;
pub mod types;
pub mod vendor_names;
