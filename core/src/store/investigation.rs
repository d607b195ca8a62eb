//! Investigation mutations: checklist toggles and timeline appends.

use super::DeskStore;
use crate::error::{DeskError, DeskResult};
use crate::model::{Investigation, TimelineEvent};
use chrono::{DateTime, Utc};

impl DeskStore {
    /// Flip one checklist item's `completed` flag. Involutive: toggling
    /// twice restores the original value. Only `updated_at` changes
    /// besides the flag itself.
    pub fn toggle_checklist_item(
        &mut self,
        investigation_id: &str,
        item_id: &str,
        at: DateTime<Utc>,
    ) -> DeskResult<&Investigation> {
        let inv = self
            .investigations
            .iter_mut()
            .find(|i| i.id == investigation_id)
            .ok_or_else(|| DeskError::not_found("investigation", investigation_id))?;

        let item = inv
            .checklist
            .iter_mut()
            .find(|c| c.id == item_id)
            .ok_or_else(|| DeskError::not_found("checklist item", item_id))?;

        item.completed = !item.completed;
        let completed = item.completed;
        inv.updated_at = at;

        log::info!("investigation {investigation_id}: checklist {item_id} -> {completed}");
        Ok(&*inv)
    }

    /// Append a timeline event with its caller-supplied timestamp.
    /// The timeline is append-only; no chronological sort on insert.
    pub fn record_timeline_event(
        &mut self,
        investigation_id: &str,
        event: TimelineEvent,
    ) -> DeskResult<&Investigation> {
        let inv = self
            .investigations
            .iter_mut()
            .find(|i| i.id == investigation_id)
            .ok_or_else(|| DeskError::not_found("investigation", investigation_id))?;

        inv.updated_at = event.timestamp;
        log::debug!(
            "investigation {investigation_id}: timeline append {:?} '{}'",
            event.kind,
            event.title
        );
        inv.timeline.push(event);
        Ok(&*inv)
    }
}
