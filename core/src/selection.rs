//! Detail-panel selection state machine.
//!
//! Exactly one entity (or none) is focused at a time. The selection is
//! a sum type, so "two panels selected" is unrepresentable rather than
//! merely forbidden.

use crate::types::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "focus", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Idle,
    Alert {
        id: EntityId,
    },
    Vendor {
        id: EntityId,
    },
    Investigation {
        id: EntityId,
    },
}

/// Tracks which entity the detail panel shows. Cyclic and UI-driven;
/// there is no terminal state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }

    /// Focus an alert, discarding any prior selection.
    pub fn select_alert(&mut self, id: EntityId) -> &Selection {
        self.current = Selection::Alert { id };
        &self.current
    }

    /// Focus a vendor, discarding any prior selection.
    pub fn select_vendor(&mut self, id: EntityId) -> &Selection {
        self.current = Selection::Vendor { id };
        &self.current
    }

    /// Focus an investigation, discarding any prior selection.
    pub fn select_investigation(&mut self, id: EntityId) -> &Selection {
        self.current = Selection::Investigation { id };
        &self.current
    }

    /// Close the detail panel.
    pub fn close(&mut self) -> &Selection {
        self.current = Selection::Idle;
        &self.current
    }
}
